use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::RiskKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Problems with the contents of a model artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("linear model has no coefficients")]
    NoCoefficients,

    #[error("declared width {declared} does not match {coefficients} coefficients")]
    CoefficientMismatch { declared: usize, coefficients: usize },

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("node {node} has invalid child {child}")]
    InvalidChild { node: usize, child: usize },

    #[error("node {node} splits on feature {feature}, beyond the limit of {limit} features")]
    FeatureOutOfRange {
        node: usize,
        feature: usize,
        limit: usize,
    },

    #[error("declared width {declared} is smaller than split feature count {required}")]
    WidthBelowSplits { declared: usize, required: usize },

    #[error("width {width} exceeds the limit of {limit} features")]
    WidthTooLarge { width: usize, limit: usize },
}

/// Fatal errors raised while loading model artifacts before serving.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("model file not found for {risk}: {}", path.display())]
    MissingArtifact { risk: RiskKind, path: PathBuf },

    #[error("failed to read model file {}: {source}", path.display())]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model file {}: {source}", path.display())]
    InvalidArtifact {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },

    #[error("no model registered for {0}")]
    MissingModel(RiskKind),
}

/// Per-request prediction failures.
///
/// Any of these aborts the whole request; no partial score set is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Prediction error: {message}")]
    Model { risk: RiskKind, message: String },

    #[error("Prediction error after padding: {message}")]
    AfterPadding { risk: RiskKind, message: String },

    #[error("Model returned non-numeric prediction for {risk}")]
    NonNumeric { risk: RiskKind },
}

impl PredictionError {
    /// Risk whose model failed.
    #[must_use]
    pub fn risk(&self) -> RiskKind {
        match self {
            Self::Model { risk, .. } | Self::AfterPadding { risk, .. } | Self::NonNumeric { risk } => {
                *risk
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
