//! Mapping of request failures onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::dto::ErrorBody;
use crate::domain::DomainError;
use crate::error::PredictionError;

/// A failed API request.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be read as a profile.
    Rejected { status: StatusCode, detail: String },
    /// The body parsed but a trait is out of range.
    Invalid(DomainError),
    /// A model failed.
    Prediction(PredictionError),
    /// The service broke an internal invariant.
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected { status, .. } => *status,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Prediction(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Rejected { detail, .. } | Self::Internal(detail) => detail.clone(),
            Self::Invalid(err) => err.to_string(),
            Self::Prediction(err) => err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err)
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self::Prediction(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            Self::Prediction(err) => error!(risk = %err.risk(), error = %err, "Prediction failed"),
            Self::Internal(detail) => error!(detail = %detail, "Internal error"),
            Self::Rejected { .. } | Self::Invalid(_) => {
                warn!(status = status.as_u16(), detail = %detail, "Rejected request");
            }
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskKind;

    #[test]
    fn out_of_range_is_unprocessable() {
        let err = ApiError::from(DomainError::TraitOutOfRange {
            trait_name: "openness",
            value: 120,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail(), "openness must be between 0 and 100, got 120");
    }

    #[test]
    fn prediction_failure_is_server_error() {
        let err = ApiError::from(PredictionError::NonNumeric {
            risk: RiskKind::Phishing,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.detail(),
            "Model returned non-numeric prediction for phishing_risk"
        );
    }
}
