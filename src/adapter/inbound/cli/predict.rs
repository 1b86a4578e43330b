//! Handler for the `predict` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::PredictArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::PersonalityProfile;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_predictor;
use crate::port::inbound::prediction::RiskPrediction;

/// Score one profile with the configured models and print every risk.
pub fn execute(config_path: &Path, args: &PredictArgs) -> Result<()> {
    let config = load_config(config_path, args.models_dir.as_deref())?;
    let profile = PersonalityProfile::try_new(
        args.openness,
        args.conscientiousness,
        args.extraversion,
        args.agreeableness,
        args.neuroticism,
    )?;

    let predictor = build_predictor(&config.models.directory)?;
    let scores = predictor.predict(&profile)?;

    if output::is_json() {
        let payload: serde_json::Map<String, serde_json::Value> = scores
            .iter()
            .map(|(risk, score)| (risk.name().to_string(), json!(score.value())))
            .collect();
        output::result("prediction", payload.into());
        return Ok(());
    }

    output::section("Risk Scores");
    for (risk, score) in scores.iter() {
        output::field(risk.name(), format!("{:.2}", score.value()));
    }
    Ok(())
}
