//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod predict;
pub mod serve;

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load configuration for a CLI command, falling back to defaults when the
/// file does not exist.
///
/// Logging is only initialised for one-shot commands when `-v` was given.
pub(crate) fn load_config(path: &Path, models_dir: Option<&Path>) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(dir) = models_dir {
        config.models.directory = dir.to_path_buf();
    }
    if output::verbosity() > 0 {
        config.init_logging();
    }
    Ok(config)
}
