//! Model-agnostic domain types: profiles, feature vectors and risk scores.

pub mod error;
pub mod profile;
pub mod risk;

pub use error::DomainError;
pub use profile::{
    FeatureVector, PersonalityProfile, BASE_WIDTH, MAX_FEATURE_WIDTH, PAD_VALUE, TRAIT_NAMES,
};
pub use risk::{RiskKind, RiskScore, RiskScoreSet, MAX_SCORE, MIN_SCORE};
