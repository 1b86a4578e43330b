//! Application layer: model registry and the risk predictor built on it.

pub mod predictor;
pub mod registry;

pub use predictor::RiskPredictor;
pub use registry::{ModelRegistry, ModelRegistryBuilder};
