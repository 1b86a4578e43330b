//! Risk categories and the scores produced for them.
//!
//! The set of risks is fixed at compile time. Every successful prediction
//! yields exactly one [`RiskScore`] per [`RiskKind`], collected into a
//! [`RiskScoreSet`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::DomainError;

/// Lowest score a risk can take.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a risk can take.
pub const MAX_SCORE: f64 = 100.0;

/// One of the five behavioral security risks a model is trained for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskKind {
    Phishing,
    WeakPassword,
    Oversharing,
    EmotionalManipulation,
    UpdateIgnorance,
}

impl RiskKind {
    /// All risks, in response order.
    pub const ALL: [RiskKind; 5] = [
        RiskKind::Phishing,
        RiskKind::WeakPassword,
        RiskKind::Oversharing,
        RiskKind::EmotionalManipulation,
        RiskKind::UpdateIgnorance,
    ];

    /// Wire name used in responses and artifact file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phishing => "phishing_risk",
            Self::WeakPassword => "weak_password_risk",
            Self::Oversharing => "oversharing_risk",
            Self::EmotionalManipulation => "emotional_manipulation_risk",
            Self::UpdateIgnorance => "update_ignorance_risk",
        }
    }

    /// Position of this risk in [`RiskKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DomainError::UnknownRisk(s.to_string()))
    }
}

impl Serialize for RiskKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A model output clamped to `[MIN_SCORE, MAX_SCORE]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Clamp a raw model output into the score range.
    ///
    /// NaN lands on [`MAX_SCORE`], the same as an upper-bound check that
    /// runs before the lower one.
    #[must_use]
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(MAX_SCORE);
        }
        Self(raw.clamp(MIN_SCORE, MAX_SCORE))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Scores for every risk, filled in one risk at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskScoreSet {
    scores: [Option<RiskScore>; 5],
}

impl RiskScoreSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for `kind`, replacing any previous value.
    pub fn record(&mut self, kind: RiskKind, score: RiskScore) {
        self.scores[kind.index()] = Some(score);
    }

    #[must_use]
    pub fn get(&self, kind: RiskKind) -> Option<RiskScore> {
        self.scores[kind.index()]
    }

    /// Number of risks scored so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every risk has a score.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// Iterate recorded scores in [`RiskKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskKind, RiskScore)> + '_ {
        RiskKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|score| (kind, score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_range_to_zero() {
        assert_eq!(RiskScore::clamped(-15.0).value(), 0.0);
    }

    #[test]
    fn clamps_above_range_to_hundred() {
        assert_eq!(RiskScore::clamped(142.7).value(), 100.0);
    }

    #[test]
    fn keeps_in_range_values() {
        assert_eq!(RiskScore::clamped(42.5).value(), 42.5);
    }

    #[test]
    fn infinities_clamp_to_bounds() {
        assert_eq!(RiskScore::clamped(f64::INFINITY).value(), 100.0);
        assert_eq!(RiskScore::clamped(f64::NEG_INFINITY).value(), 0.0);
    }

    #[test]
    fn nan_clamps_to_upper_bound() {
        assert_eq!(RiskScore::clamped(f64::NAN).value(), MAX_SCORE);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in RiskKind::ALL {
            assert_eq!(kind.name().parse::<RiskKind>().unwrap(), kind);
        }
        assert!("phishing".parse::<RiskKind>().is_err());
    }

    #[test]
    fn score_set_completes_only_with_every_risk() {
        let mut set = RiskScoreSet::new();
        assert!(set.is_empty());

        for kind in RiskKind::ALL.into_iter().rev() {
            assert!(!set.is_complete());
            set.record(kind, RiskScore::clamped(10.0));
        }

        assert!(set.is_complete());
        assert_eq!(set.len(), 5);
        let order: Vec<_> = set.iter().map(|(kind, _)| kind).collect();
        assert_eq!(order, RiskKind::ALL.to_vec());
    }
}
