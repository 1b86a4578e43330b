//! Risk predictor: reconciles the fixed five-trait input with each model.
//!
//! Models are trained independently and may expect a different number of
//! features than the profile supplies. For every model the predictor:
//!
//! 1. Copies the base feature vector.
//! 2. Pads (with zeros) or truncates it to the width the model advertises.
//! 3. Runs a single-row prediction.
//! 4. On a shape mismatch whose expected width exceeds the current one, pads
//!    to that width and retries exactly once. Widths above
//!    [`MAX_FEATURE_WIDTH`] are never padded to.
//! 5. Coerces the output to a float and clamps it to `[0, 100]`.
//!
//! Any failure for any model fails the whole prediction.

pub mod mismatch;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::registry::ModelRegistry;
use crate::domain::{
    FeatureVector, PersonalityProfile, RiskKind, RiskScore, RiskScoreSet, MAX_FEATURE_WIDTH,
};
use crate::error::PredictionError;
use crate::port::inbound::prediction::RiskPrediction;
use crate::port::outbound::model::{ModelError, RawPrediction, RiskModel};

use mismatch::parse_shape_mismatch;

/// Scores profiles against every model in a [`ModelRegistry`].
#[derive(Debug, Clone)]
pub struct RiskPredictor {
    registry: Arc<ModelRegistry>,
}

impl RiskPredictor {
    #[must_use]
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}

impl RiskPrediction for RiskPredictor {
    fn predict(&self, profile: &PersonalityProfile) -> Result<RiskScoreSet, PredictionError> {
        let base = profile.features();
        let mut scores = RiskScoreSet::new();

        for (risk, model) in self.registry.iter() {
            let score = score_risk(risk, model.as_ref(), &base)?;
            scores.record(risk, score);
        }

        Ok(scores)
    }

    fn models_loaded(&self) -> usize {
        self.registry.len()
    }

    fn available_predictions(&self) -> Vec<RiskKind> {
        self.registry.risks()
    }
}

/// Score a single risk with its model.
///
/// # Errors
///
/// Returns a [`PredictionError`] if the model fails after reconciliation
/// or returns something that is not a number.
pub fn score_risk(
    risk: RiskKind,
    model: &dyn RiskModel,
    base: &FeatureVector,
) -> Result<RiskScore, PredictionError> {
    let mut features = base.clone();

    match model.expected_input_width() {
        Some(width) if width > MAX_FEATURE_WIDTH => {
            warn!(
                risk = %risk,
                width,
                limit = MAX_FEATURE_WIDTH,
                "Ignoring implausible model width"
            );
        }
        Some(width) if width != features.len() => {
            debug!(
                risk = %risk,
                expected = width,
                actual = features.len(),
                "Reshaping features to model width"
            );
            features.reshape(width);
        }
        _ => {}
    }

    let raw = match predict_one(model, &features) {
        Ok(raw) => raw,
        Err(err) => retry_with_padding(risk, model, features, err)?,
    };

    raw.to_f64()
        .map(RiskScore::clamped)
        .ok_or(PredictionError::NonNumeric { risk })
}

/// Run a batch of one row and take its only output.
fn predict_one(model: &dyn RiskModel, features: &FeatureVector) -> Result<RawPrediction, ModelError> {
    let batch = [features.as_slice().to_vec()];
    model
        .predict(&batch)?
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::Other("model returned no predictions".to_string()))
}

/// Handle a failed first attempt, padding and retrying once when the error
/// names a larger expected width.
fn retry_with_padding(
    risk: RiskKind,
    model: &dyn RiskModel,
    mut features: FeatureVector,
    err: ModelError,
) -> Result<RawPrediction, PredictionError> {
    let expected = match &err {
        ModelError::ShapeMismatch { expected, .. } => Some(*expected),
        ModelError::Value(message) => parse_shape_mismatch(message).map(|hint| hint.expected),
        ModelError::Other(_) => None,
    };

    match expected {
        Some(expected) if expected > features.len() && expected <= MAX_FEATURE_WIDTH => {
            warn!(
                risk = %risk,
                expected,
                actual = features.len(),
                error = %err,
                "Shape mismatch, retrying with padded features"
            );
            features.pad_to(expected);
            predict_one(model, &features).map_err(|retry_err| PredictionError::AfterPadding {
                risk,
                message: retry_err.to_string(),
            })
        }
        _ => Err(PredictionError::Model {
            risk,
            message: err.to_string(),
        }),
    }
}
