//! Model artifact files.
//!
//! An artifact is a JSON document tagged with its model kind:
//!
//! ```json
//! { "kind": "linear", "n_features_in": 5, "coefficients": [0.2, 0.1, 0.3, -0.1, 0.4], "intercept": 12.0 }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::linear::LinearModel;
use super::tree::TreeModel;
use crate::error::{ArtifactError, StartupError};
use crate::port::outbound::model::RiskModel;

/// A deserialized artifact of any supported kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Tree(TreeModel),
}

impl ModelArtifact {
    /// Parse an artifact from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an [`ArtifactError`] if the text is not a valid, internally
    /// consistent artifact.
    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(text)?;
        match &artifact {
            Self::Linear(model) => model.validate()?,
            Self::Tree(model) => model.validate()?,
        }
        Ok(artifact)
    }

    #[must_use]
    pub fn into_model(self) -> Arc<dyn RiskModel> {
        match self {
            Self::Linear(model) => Arc::new(model),
            Self::Tree(model) => Arc::new(model),
        }
    }
}

/// Read and validate the artifact at `path`.
///
/// # Errors
///
/// Returns [`StartupError::ReadArtifact`] if the file cannot be read and
/// [`StartupError::InvalidArtifact`] if its contents are not a valid model.
pub fn load_model(path: &Path) -> Result<Arc<dyn RiskModel>, StartupError> {
    let text = fs::read_to_string(path).map_err(|source| StartupError::ReadArtifact {
        path: path.to_path_buf(),
        source,
    })?;

    ModelArtifact::from_json(&text)
        .map(ModelArtifact::into_model)
        .map_err(|source| StartupError::InvalidArtifact {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_linear_artifact() {
        let artifact = ModelArtifact::from_json(
            r#"{"kind": "linear", "n_features_in": 2, "coefficients": [1.0, 2.0], "intercept": 3}"#,
        )
        .unwrap();
        let model = artifact.into_model();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.expected_input_width(), Some(2));
    }

    #[test]
    fn parses_tree_artifact() {
        let artifact = ModelArtifact::from_json(
            r#"{"kind": "tree", "nodes": [{"feature": 0, "threshold": 1.5, "left": 1, "right": 2}, {"value": 0}, {"value": 1}]}"#,
        )
        .unwrap();
        assert!(matches!(artifact, ModelArtifact::Tree(_)));
        assert_eq!(artifact.into_model().expected_input_width(), None);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = ModelArtifact::from_json(r#"{"kind": "forest", "trees": []}"#).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
        assert!(err.to_string().contains("forest"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_inconsistent_model() {
        assert!(matches!(
            ModelArtifact::from_json(r#"{"kind": "linear", "coefficients": []}"#),
            Err(ArtifactError::NoCoefficients)
        ));
    }

    #[test]
    fn oversized_tree_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(
            &path,
            r#"{"kind": "tree", "n_features_in": 1e12, "nodes": [{"value": 1}]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_model(&path),
            Err(StartupError::InvalidArtifact {
                source: ArtifactError::WidthTooLarge { .. },
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_model(&dir.path().join("absent.json")),
            Err(StartupError::ReadArtifact { .. })
        ));
    }

    #[test]
    fn malformed_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_model(&path),
            Err(StartupError::InvalidArtifact { .. })
        ));
    }
}
