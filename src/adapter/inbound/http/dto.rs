//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, PersonalityProfile, RiskKind, RiskScoreSet};

/// `POST /predict` request body.
///
/// Fields are wide integers so out-of-range values reach validation instead
/// of failing deserialization with a less specific message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersonalityInput {
    pub openness: i64,
    pub conscientiousness: i64,
    pub extraversion: i64,
    pub agreeableness: i64,
    pub neuroticism: i64,
}

impl TryFrom<PersonalityInput> for PersonalityProfile {
    type Error = DomainError;

    fn try_from(input: PersonalityInput) -> Result<Self, Self::Error> {
        PersonalityProfile::try_new(
            input.openness,
            input.conscientiousness,
            input.extraversion,
            input.agreeableness,
            input.neuroticism,
        )
    }
}

/// `POST /predict` success body.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RiskScores {
    pub phishing_risk: f64,
    pub weak_password_risk: f64,
    pub oversharing_risk: f64,
    pub emotional_manipulation_risk: f64,
    pub update_ignorance_risk: f64,
}

impl TryFrom<&RiskScoreSet> for RiskScores {
    type Error = RiskKind;

    /// Fails with the first risk that has no score.
    fn try_from(set: &RiskScoreSet) -> Result<Self, Self::Error> {
        let score = |kind: RiskKind| set.get(kind).map(|s| s.value()).ok_or(kind);
        Ok(Self {
            phishing_risk: score(RiskKind::Phishing)?,
            weak_password_risk: score(RiskKind::WeakPassword)?,
            oversharing_risk: score(RiskKind::Oversharing)?,
            emotional_manipulation_risk: score(RiskKind::EmotionalManipulation)?,
            update_ignorance_risk: score(RiskKind::UpdateIgnorance)?,
        })
    }
}

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_loaded: usize,
    pub available_predictions: Vec<RiskKind>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
