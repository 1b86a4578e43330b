//! Model port for trained regression models.
//!
//! Defines the capability the predictor needs from a loaded model: run a
//! batch of feature rows and, optionally, report the input width the model
//! was fitted on.
//!
//! # Overview
//!
//! - [`RiskModel`]: A trained model that scores feature rows
//! - [`ModelError`]: Failures a model can report
//! - [`RawPrediction`]: An unvalidated model output
//!
//! # Shape Mismatches
//!
//! Models report wrong-width input in one of two ways:
//!
//! - **Structured**: [`ModelError::ShapeMismatch`] carries both widths
//! - **Free text**: [`ModelError::Value`] carries a message such as
//!   `"expected 7, got 5"` that the predictor has to parse

use thiserror::Error;

/// A single unvalidated output from a model.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPrediction {
    Number(f64),
    Text(String),
}

impl RawPrediction {
    /// Coerce to a float. Only unparsable text yields `None`; NaN and the
    /// infinities pass through for clamping.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for RawPrediction {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Errors reported by a model's prediction routine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Input width differs from what the model was fitted on.
    #[error("X has {got} features, but the model is expecting {expected} features as input")]
    ShapeMismatch { expected: usize, got: usize },

    /// A value-type failure described only by its message.
    #[error("{0}")]
    Value(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// A trained model that maps feature rows to predictions.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance is
/// shared read-only by every request.
///
/// # Implementation Notes
///
/// - [`predict`](Self::predict) must return one prediction per input row
/// - Implementations must not mutate internal state during prediction
pub trait RiskModel: Send + Sync {
    /// Return the model kind for logging.
    fn kind(&self) -> &'static str;

    /// Return the feature width the model was fitted on, if it records one.
    fn expected_input_width(&self) -> Option<usize>;

    /// Score a batch of feature rows.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if any row cannot be scored.
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<RawPrediction>, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_coerce_directly() {
        assert_eq!(RawPrediction::Number(12.5).to_f64(), Some(12.5));
    }

    #[test]
    fn numeric_text_coerces() {
        assert_eq!(RawPrediction::Text(" 42.0 ".into()).to_f64(), Some(42.0));
    }

    #[test]
    fn non_numeric_text_does_not_coerce() {
        assert_eq!(RawPrediction::Text("high".into()).to_f64(), None);
    }

    #[test]
    fn nan_coerces() {
        assert!(RawPrediction::Number(f64::NAN)
            .to_f64()
            .is_some_and(f64::is_nan));
        assert!(RawPrediction::Text("NaN".into())
            .to_f64()
            .is_some_and(f64::is_nan));
    }

    #[test]
    fn shape_mismatch_message_names_both_widths() {
        let err = ModelError::ShapeMismatch {
            expected: 7,
            got: 5,
        };
        assert_eq!(
            err.to_string(),
            "X has 5 features, but the model is expecting 7 features as input"
        );
    }
}
