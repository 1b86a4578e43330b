//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`model`] - Mock [`RiskModel`](crate::port::outbound::model::RiskModel)
//!   implementations and registry helpers.
//! - [`artifact`] - Writers for model artifact directories.

pub mod artifact;
pub mod model;
