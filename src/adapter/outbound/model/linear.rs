//! Linear regression model.

use serde::Deserialize;

use super::metadata::WidthMetadata;
use crate::domain::MAX_FEATURE_WIDTH;
use crate::error::ArtifactError;
use crate::port::outbound::model::{ModelError, RawPrediction, RiskModel};

/// Ordinary linear regressor: `intercept + Σ coefficient_i * x_i`.
///
/// Rejects rows whose width differs from the number of coefficients with a
/// structured [`ModelError::ShapeMismatch`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    #[serde(default)]
    intercept: f64,
    #[serde(flatten)]
    metadata: WidthMetadata,
}

impl LinearModel {
    #[must_use]
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        let metadata = WidthMetadata::declared(coefficients.len());
        Self {
            coefficients,
            intercept,
            metadata,
        }
    }

    /// Replace the width metadata, e.g. to model an artifact that omits it.
    #[must_use]
    pub fn with_metadata(mut self, metadata: WidthMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check internal consistency after deserialization.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        let coefficients = self.coefficients.len();
        if coefficients == 0 {
            return Err(ArtifactError::NoCoefficients);
        }
        if coefficients > MAX_FEATURE_WIDTH {
            return Err(ArtifactError::WidthTooLarge {
                width: coefficients,
                limit: MAX_FEATURE_WIDTH,
            });
        }
        self.metadata.check_limit()?;
        match self.metadata.declared_width() {
            Some(declared) if declared != coefficients => {
                Err(ArtifactError::CoefficientMismatch {
                    declared,
                    coefficients,
                })
            }
            _ => Ok(()),
        }
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }
        Ok(self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (w, x)| acc + w * x))
    }
}

impl RiskModel for LinearModel {
    fn kind(&self) -> &'static str {
        "linear"
    }

    fn expected_input_width(&self) -> Option<usize> {
        self.metadata.width()
    }

    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<RawPrediction>, ModelError> {
        batch
            .iter()
            .map(|row| self.predict_row(row).map(RawPrediction::Number))
            .collect()
    }
}
