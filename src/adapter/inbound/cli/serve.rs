//! Handler for the `serve` command.

use std::path::Path;

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::error::Result;
use crate::infrastructure::server;

/// Execute the serve command.
pub async fn execute(config_path: &Path, args: &ServeArgs) -> Result<()> {
    let mut config = load_config(config_path, args.models_dir.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config.init_logging();

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listen", format!("{}:{}", config.server.host, config.server.port));
    output::field("Models", config.models.directory.display());
    output::field("Allowed origins", config.cors.allowed_origins.join(", "));

    info!("persona-risk starting");
    server::run(config).await
}
