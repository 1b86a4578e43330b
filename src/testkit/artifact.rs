//! Artifact directories for loader and end-to-end tests.
//!
//! [`write_linear_artifacts`] writes five identical mean-of-traits models.
//! [`write_mixed_artifacts`] writes one model per reconciliation path:
//!
//! | Risk                          | Model                          | Path exercised        |
//! |-------------------------------|--------------------------------|-----------------------|
//! | `phishing_risk`               | linear, width 5                | pass-through          |
//! | `weak_password_risk`          | linear, width 3                | truncation            |
//! | `oversharing_risk`            | linear, width 8                | zero padding          |
//! | `emotional_manipulation_risk` | tree on feature 6, no width    | message retry         |
//! | `update_ignorance_risk`       | linear, no width, large offset | clamping              |

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::domain::RiskKind;
use crate::infrastructure::bootstrap::artifact_path;

/// Write raw `contents` as the artifact for `risk`.
pub fn write_artifact(dir: &Path, risk: RiskKind, contents: &str) {
    fs::write(artifact_path(dir, risk), contents)
        .unwrap_or_else(|err| panic!("write artifact for {risk}: {err}"));
}

/// Write a mean-of-traits linear model for every risk.
pub fn write_linear_artifacts(dir: &Path) {
    let artifact = json!({
        "kind": "linear",
        "n_features_in": 5,
        "coefficients": [0.2, 0.2, 0.2, 0.2, 0.2],
        "intercept": 0.0
    });
    for risk in RiskKind::ALL {
        write_artifact(dir, risk, &artifact.to_string());
    }
}

/// Write one model per reconciliation path (see module docs).
pub fn write_mixed_artifacts(dir: &Path) {
    for risk in RiskKind::ALL {
        write_artifact(dir, risk, &mixed_artifact(risk).to_string());
    }
}

fn mixed_artifact(risk: RiskKind) -> serde_json::Value {
    match risk {
        RiskKind::Phishing => json!({
            "kind": "linear",
            "n_features_in": 5,
            "coefficients": [0.2, 0.1, 0.3, -0.1, 0.4],
            "intercept": 5.0
        }),
        RiskKind::WeakPassword => json!({
            "kind": "linear",
            "n_features_in": 3,
            "coefficients": [0.5, 0.5, 0.5],
            "intercept": 0.0
        }),
        RiskKind::Oversharing => json!({
            "kind": "linear",
            "n_features": 8,
            "coefficients": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0],
            "intercept": 0.0
        }),
        RiskKind::EmotionalManipulation => json!({
            "kind": "tree",
            "nodes": [
                {"feature": 6, "threshold": 0.5, "left": 1, "right": 2},
                {"feature": 4, "threshold": 50.0, "left": 3, "right": 4},
                {"value": 90.0},
                {"value": 20.0},
                {"value": 75.0}
            ]
        }),
        RiskKind::UpdateIgnorance => json!({
            "kind": "linear",
            "coefficients": [-1.0, -1.0, -1.0, -1.0, -1.0],
            "intercept": 150.0
        }),
    }
}
