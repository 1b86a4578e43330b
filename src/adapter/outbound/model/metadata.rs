//! Fitted-width metadata shared by all artifact kinds.
//!
//! Artifacts exported from different trainers record the input width under
//! one of two names. The first name present wins, even if its value turns
//! out to be unusable. An explicit `null` counts as present.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::MAX_FEATURE_WIDTH;
use crate::error::ArtifactError;

/// Optional width metadata carried by a model artifact.
///
/// `None` means the key is absent; `Some(Value::Null)` means it was written
/// as `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WidthMetadata {
    #[serde(default, deserialize_with = "present")]
    pub n_features_in: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub n_features: Option<Value>,
}

/// Keep `null` distinct from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl WidthMetadata {
    /// Metadata declaring `width` under the primary name.
    #[must_use]
    pub fn declared(width: usize) -> Self {
        Self {
            n_features_in: Some(Value::from(width)),
            n_features: None,
        }
    }

    /// The width as written, before any plausibility limit.
    ///
    /// `None` when neither field is present or the first present field does
    /// not coerce to a non-negative integer.
    #[must_use]
    pub fn declared_width(&self) -> Option<usize> {
        self.n_features_in
            .as_ref()
            .or(self.n_features.as_ref())
            .and_then(coerce_width)
    }

    /// Resolve the width the model was fitted on.
    ///
    /// Like [`declared_width`](Self::declared_width), but a width above
    /// [`MAX_FEATURE_WIDTH`] is unknown.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.declared_width()
            .filter(|width| *width <= MAX_FEATURE_WIDTH)
    }

    /// Reject a declared width above [`MAX_FEATURE_WIDTH`] at load time.
    pub(crate) fn check_limit(&self) -> Result<(), ArtifactError> {
        match self.declared_width() {
            Some(width) if width > MAX_FEATURE_WIDTH => Err(ArtifactError::WidthTooLarge {
                width,
                limit: MAX_FEATURE_WIDTH,
            }),
            _ => Ok(()),
        }
    }
}

fn coerce_width(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
            .and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(usize::from(*b)),
        _ => None,
    }
}
