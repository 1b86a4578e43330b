//! CLI integration tests.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use persona_risk::domain::RiskKind;
use persona_risk::infrastructure::bootstrap::artifact_path;
use persona_risk::testkit::artifact::{write_linear_artifacts, write_mixed_artifacts};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// The binary with service environment overrides cleared and a config path
/// that does not exist, so built-in defaults apply.
fn persona_risk(workdir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("persona-risk");
    cmd.current_dir(workdir)
        .env_remove("HOST")
        .env_remove("PORT")
        .env_remove("MODELS_DIR")
        .env_remove("ALLOWED_ORIGINS")
        .env_remove("RUST_LOG")
        .args(["--config", "absent.toml"]);
    cmd
}

const PROFILE_ARGS: [&str; 10] = [
    "--openness",
    "10",
    "--conscientiousness",
    "20",
    "--extraversion",
    "30",
    "--agreeableness",
    "40",
    "--neuroticism",
    "50",
];

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().expect("temp dir");
    persona_risk(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("predict"));
}

#[test]
fn test_check_passes_with_complete_models() {
    let dir = TempDir::new().expect("temp dir");
    write_mixed_artifacts(dir.path());

    persona_risk(dir.path())
        .arg("check")
        .arg("--models-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All models loaded"))
        .stdout(predicate::str::contains("weak_password_risk"))
        .stdout(predicate::str::contains("tree (width unknown)"));
}

#[test]
fn test_check_fails_on_missing_model() {
    let dir = TempDir::new().expect("temp dir");
    write_linear_artifacts(dir.path());
    std::fs::remove_file(artifact_path(dir.path(), RiskKind::UpdateIgnorance))
        .expect("remove artifact");

    persona_risk(dir.path())
        .arg("check")
        .arg("--models-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("model file not found for update_ignorance_risk"));
}

#[test]
fn test_models_dir_from_environment() {
    let dir = TempDir::new().expect("temp dir");
    let models = dir.path().join("artifacts");
    std::fs::create_dir(&models).expect("create models dir");
    write_linear_artifacts(&models);

    persona_risk(dir.path())
        .env("MODELS_DIR", "artifacts")
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_predict_json_output() {
    let dir = TempDir::new().expect("temp dir");
    write_mixed_artifacts(dir.path());

    let output = persona_risk(dir.path())
        .args(["--json", "predict"])
        .args(PROFILE_ARGS)
        .arg("--models-dir")
        .arg(dir.path())
        .output()
        .expect("run persona-risk");
    assert!(output.status.success(), "{output:?}");

    let line = String::from_utf8_lossy(&output.stdout);
    let value: Value = serde_json::from_str(line.trim()).expect("one JSON line");
    assert_eq!(value["type"], "prediction");

    let payload = value["payload"].as_object().expect("payload object");
    assert_eq!(payload.len(), 5);
    let oversharing = payload["oversharing_risk"].as_f64().expect("numeric");
    assert!((oversharing - 10.0).abs() < 1e-9);
    let emotional = payload["emotional_manipulation_risk"]
        .as_f64()
        .expect("numeric");
    assert!((emotional - 20.0).abs() < 1e-9);
}

#[test]
fn test_predict_human_output() {
    let dir = TempDir::new().expect("temp dir");
    write_linear_artifacts(dir.path());

    persona_risk(dir.path())
        .arg("predict")
        .args(PROFILE_ARGS)
        .arg("--models-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk Scores"))
        .stdout(predicate::str::contains("30.00"));
}

#[test]
fn test_predict_rejects_out_of_range_trait() {
    let dir = TempDir::new().expect("temp dir");
    write_linear_artifacts(dir.path());

    persona_risk(dir.path())
        .arg("predict")
        .args([
            "--openness",
            "10",
            "--conscientiousness",
            "20",
            "--extraversion",
            "30",
            "--agreeableness",
            "40",
            "--neuroticism",
            "140",
        ])
        .arg("--models-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("neuroticism must be between 0 and 100"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[server]\nport = \"eighty\"\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("persona-risk");
    cmd.current_dir(dir.path())
        .env_remove("PORT")
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
