//! Regression tree stored as a flat node array.
//!
//! Node `0` is the root. A split sends a row left when
//! `row[feature] <= threshold` and right otherwise. Leaves hold the output,
//! which is usually a number but may be a label for trees exported from a
//! classifier.

use serde::Deserialize;
use serde_json::Value;

use super::metadata::WidthMetadata;
use crate::domain::MAX_FEATURE_WIDTH;
use crate::error::ArtifactError;
use crate::port::outbound::model::{ModelError, RawPrediction, RiskModel};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Value,
    },
}

/// Decision tree regressor.
///
/// Unlike [`LinearModel`](super::linear::LinearModel), a tree only reports
/// short input through a free-text [`ModelError::Value`] message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeModel {
    nodes: Vec<TreeNode>,
    #[serde(flatten)]
    metadata: WidthMetadata,
}

impl TreeModel {
    #[must_use]
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self {
            nodes,
            metadata: WidthMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: WidthMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Smallest row width that reaches every split feature.
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                TreeNode::Split { feature, .. } => Some(feature.saturating_add(1)),
                TreeNode::Leaf { .. } => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Check the node array forms a tree rooted at node 0.
    ///
    /// Children must come after their parent, which rules out cycles.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::EmptyTree);
        }
        for (node, entry) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = entry
            {
                if *feature >= MAX_FEATURE_WIDTH {
                    return Err(ArtifactError::FeatureOutOfRange {
                        node,
                        feature: *feature,
                        limit: MAX_FEATURE_WIDTH,
                    });
                }
                for child in [*left, *right] {
                    if child <= node || child >= self.nodes.len() {
                        return Err(ArtifactError::InvalidChild { node, child });
                    }
                }
            }
        }
        self.metadata.check_limit()?;
        if let Some(declared) = self.metadata.declared_width() {
            let required = self.required_width();
            if declared < required {
                return Err(ArtifactError::WidthBelowSplits { declared, required });
            }
        }
        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> Result<RawPrediction, ModelError> {
        let required = self.required_width();
        if row.len() < required {
            return Err(ModelError::Value(format!(
                "Input shape mismatch: expected {required}, got {}",
                row.len()
            )));
        }

        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Some(TreeNode::Leaf { value }) => return Ok(leaf_output(value)),
                None => return Err(ModelError::Other(format!("tree node {index} is missing"))),
            }
        }
    }
}

fn leaf_output(value: &Value) -> RawPrediction {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| RawPrediction::Text(n.to_string()), RawPrediction::Number),
        Value::String(s) => RawPrediction::Text(s.clone()),
        other => RawPrediction::Text(other.to_string()),
    }
}

impl RiskModel for TreeModel {
    fn kind(&self) -> &'static str {
        "tree"
    }

    fn expected_input_width(&self) -> Option<usize> {
        self.metadata.width()
    }

    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<RawPrediction>, ModelError> {
        batch.iter().map(|row| self.predict_row(row)).collect()
    }
}
