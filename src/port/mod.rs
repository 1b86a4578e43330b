//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────┐     ┌─────────────────────────┐     ┌──────────────┐
//!   │ HTTP/CLI │ ──▶ │ RiskPrediction (inbound)│ ──▶ │ RiskModel    │
//!   │ adapters │     │  application::predictor │     │ (outbound)   │
//!   └──────────┘     └─────────────────────────┘     └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`inbound::prediction::RiskPrediction`] - Profile scoring used by driving adapters
//! - [`outbound::model::RiskModel`] - Trained model capability

pub mod inbound;
pub mod outbound;
