//! HTTP API adapter (axum).
//!
//! | Method | Path       | Body                         |
//! |--------|------------|------------------------------|
//! | GET    | `/`        | [`dto::HealthResponse`]      |
//! | POST   | `/predict` | [`dto::PersonalityInput`] → [`dto::RiskScores`] |
//!
//! Errors are returned as `{"detail": "..."}` with status 422 for invalid
//! input and 500 for prediction failures.

pub mod dto;
pub mod error;
pub mod routes;

pub use routes::{router, AppState};
