//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Loads every model artifact before the service accepts traffic. A missing
//! or unreadable artifact is fatal: there is no partial availability.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::model::load_model;
use crate::application::predictor::RiskPredictor;
use crate::application::registry::ModelRegistry;
use crate::domain::RiskKind;
use crate::error::StartupError;

/// Suffix appended to a risk name to form its artifact file name.
pub const ARTIFACT_SUFFIX: &str = "_model.json";

/// Path of the artifact for `risk` inside `dir`.
#[must_use]
pub fn artifact_path(dir: &Path, risk: RiskKind) -> PathBuf {
    dir.join(format!("{}{ARTIFACT_SUFFIX}", risk.name()))
}

/// Load one model per risk from `dir`.
///
/// Every artifact's presence is checked before any is parsed, so a missing
/// file is reported even when another file is also malformed.
///
/// # Errors
///
/// Returns [`StartupError::MissingArtifact`] for the first absent file, or
/// the load error of the first artifact that fails to parse.
pub fn load_registry(dir: &Path) -> Result<ModelRegistry, StartupError> {
    let paths: Vec<(RiskKind, PathBuf)> = RiskKind::ALL
        .into_iter()
        .map(|risk| (risk, artifact_path(dir, risk)))
        .collect();

    if let Some((risk, path)) = paths.iter().find(|(_, path)| !path.is_file()) {
        return Err(StartupError::MissingArtifact {
            risk: *risk,
            path: path.clone(),
        });
    }

    let mut builder = ModelRegistry::builder();
    for (risk, path) in paths {
        let model = load_model(&path)?;
        info!(
            risk = %risk,
            kind = model.kind(),
            width = ?model.expected_input_width(),
            path = %path.display(),
            "Loaded model"
        );
        builder = builder.model(risk, model);
    }

    builder.build()
}

/// Load the registry from `dir` and wrap it in a predictor.
///
/// # Errors
///
/// Propagates any [`StartupError`] from [`load_registry`].
pub fn build_predictor(dir: &Path) -> Result<RiskPredictor, StartupError> {
    let registry = load_registry(dir)?;
    info!(models = registry.len(), dir = %dir.display(), "Model registry ready");
    Ok(RiskPredictor::new(Arc::new(registry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::artifact::{write_artifact, write_linear_artifacts};

    #[test]
    fn artifact_names_follow_risk_names() {
        let path = artifact_path(Path::new("models"), RiskKind::WeakPassword);
        assert_eq!(path, PathBuf::from("models/weak_password_risk_model.json"));
    }

    #[test]
    fn loads_all_five_models() {
        let dir = tempfile::tempdir().unwrap();
        write_linear_artifacts(dir.path());

        let registry = load_registry(dir.path()).unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.risks(), RiskKind::ALL.to_vec());
    }

    #[test]
    fn missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_linear_artifacts(dir.path());
        std::fs::remove_file(artifact_path(dir.path(), RiskKind::Oversharing)).unwrap();

        let err = load_registry(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            StartupError::MissingArtifact {
                risk: RiskKind::Oversharing,
                ..
            }
        ));
    }

    #[test]
    fn missing_is_reported_before_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_linear_artifacts(dir.path());
        write_artifact(dir.path(), RiskKind::Phishing, "{");
        std::fs::remove_file(artifact_path(dir.path(), RiskKind::UpdateIgnorance)).unwrap();

        assert!(matches!(
            load_registry(dir.path()),
            Err(StartupError::MissingArtifact {
                risk: RiskKind::UpdateIgnorance,
                ..
            })
        ));
    }

    #[test]
    fn malformed_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_linear_artifacts(dir.path());
        write_artifact(dir.path(), RiskKind::Phishing, r#"{"kind": "linear"}"#);

        assert!(matches!(
            load_registry(dir.path()),
            Err(StartupError::InvalidArtifact { .. })
        ));
    }
}
