//! Persona-risk - personality-profile to security-risk prediction.
//!
//! Maps a five-factor personality profile to five independent risk scores,
//! each produced by a separately trained regression model.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Profiles, feature vectors, risk kinds and clamped scores
//! - **`port`** - `RiskPrediction` (inbound) and `RiskModel` (outbound)
//! - **`application`** - `ModelRegistry` and the `RiskPredictor` that
//!   reconciles the five input features with each model's expected width
//! - **`adapter`** - axum HTTP API, clap CLI, linear and tree model artifacts
//! - **`infrastructure`** - Configuration, artifact bootstrap, server lifecycle
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use persona_risk::domain::PersonalityProfile;
//! use persona_risk::infrastructure::bootstrap::build_predictor;
//! use persona_risk::port::inbound::prediction::RiskPrediction;
//!
//! # fn main() -> persona_risk::error::Result<()> {
//! let predictor = build_predictor(Path::new("models"))?;
//! let profile = PersonalityProfile::try_new(55, 70, 40, 62, 35)?;
//! for (risk, score) in predictor.predict(&profile)?.iter() {
//!     println!("{risk}: {:.1}", score.value());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
