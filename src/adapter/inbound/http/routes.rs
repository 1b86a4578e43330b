//! HTTP routes: health and prediction.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use super::dto::{HealthResponse, PersonalityInput, RiskScores};
use super::error::ApiError;
use crate::domain::PersonalityProfile;
use crate::infrastructure::config::CorsConfig;
use crate::port::inbound::prediction::RiskPrediction;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    predictor: Arc<dyn RiskPrediction>,
}

impl AppState {
    #[must_use]
    pub fn new(predictor: Arc<dyn RiskPrediction>) -> Self {
        Self { predictor }
    }
}

/// Build the API router.
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for GET and POST from the configured origins.
///
/// A wildcard origin cannot be combined with credentials, so credentials
/// are only allowed for an explicit origin list.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]);

    if config.allows_any() {
        return layer.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unrepresentable CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(origins)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        models_loaded: state.predictor.models_loaded(),
        available_predictions: state.predictor.available_predictions(),
    })
}

async fn predict(
    State(state): State<AppState>,
    body: Result<Json<PersonalityInput>, JsonRejection>,
) -> Result<Json<RiskScores>, ApiError> {
    let Json(input) = body?;
    let profile = PersonalityProfile::try_from(input)?;

    let scores = state.predictor.predict(&profile)?;
    let response = RiskScores::try_from(&scores)
        .map_err(|risk| ApiError::Internal(format!("no score produced for {risk}")))?;

    debug!(?profile, ?response, "Prediction served");
    Ok(Json(response))
}
