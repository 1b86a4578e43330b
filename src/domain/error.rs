//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use persona_risk::domain::error::DomainError;
//! use persona_risk::domain::profile::PersonalityProfile;
//!
//! // Traits are percentiles and must stay within 0..=100
//! let result = PersonalityProfile::try_new(50, 50, 101, 50, 50);
//!
//! assert!(matches!(
//!     result,
//!     Err(DomainError::TraitOutOfRange { trait_name: "extraversion", value: 101 })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A personality trait was outside the accepted 0..=100 range.
    #[error("{trait_name} must be between 0 and 100, got {value}")]
    TraitOutOfRange {
        /// Name of the offending trait.
        trait_name: &'static str,
        /// The value that was provided.
        value: i64,
    },

    /// A risk name did not match any of the known risk categories.
    #[error("unknown risk name: {0}")]
    UnknownRisk(String),
}
