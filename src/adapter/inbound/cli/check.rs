//! Handler for the `check` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::adapter::outbound::model::load_model;
use crate::domain::RiskKind;
use crate::error::{Result, StartupError};
use crate::infrastructure::bootstrap::artifact_path;

/// Validate configuration and every model artifact without serving.
///
/// Every artifact is checked so one run reports all problems; the first
/// failure is returned.
pub fn execute(config_path: &Path, args: &CheckArgs) -> Result<()> {
    let config = load_config(config_path, args.models_dir.as_deref())?;

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::field("Listen", format!("{}:{}", config.server.host, config.server.port));
    output::field("Allowed origins", config.cors.allowed_origins.join(", "));
    output::success("Configuration is valid");

    output::section("Models");
    output::field("Directory", config.models.directory.display());

    let mut first_error: Option<StartupError> = None;
    for risk in RiskKind::ALL {
        let path = artifact_path(&config.models.directory, risk);
        let outcome = if path.is_file() {
            load_model(&path)
        } else {
            Err(StartupError::MissingArtifact { risk, path })
        };

        match outcome {
            Ok(model) => {
                let width = model
                    .expected_input_width()
                    .map_or_else(|| "unknown".to_string(), |w| w.to_string());
                output::field(risk.name(), format!("{} (width {width})", model.kind()));
            }
            Err(err) => {
                output::error(&err.to_string());
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => {
            output::success("All models loaded");
            Ok(())
        }
    }
}
