//! Inbound prediction port.
//!
//! The contract driving adapters (HTTP, CLI) use to score a profile without
//! knowing how models are loaded or reconciled.

use crate::domain::{PersonalityProfile, RiskKind, RiskScoreSet};
use crate::error::PredictionError;

/// Scores a personality profile against every loaded risk model.
pub trait RiskPrediction: Send + Sync {
    /// Score `profile` against every risk.
    ///
    /// # Errors
    ///
    /// Returns the first [`PredictionError`] raised by any model.
    fn predict(&self, profile: &PersonalityProfile) -> Result<RiskScoreSet, PredictionError>;

    /// Number of models available for prediction.
    fn models_loaded(&self) -> usize;

    /// Risks that can be predicted, in response order.
    fn available_predictions(&self) -> Vec<RiskKind>;
}
