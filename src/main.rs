use anyhow::Context;
use clap::Parser;
use persona_risk::adapter::inbound::cli::command::{Cli, Commands, ServeArgs};
use persona_risk::adapter::inbound::cli::output::{self, OutputConfig};
use persona_risk::adapter::inbound::cli::{check, predict, serve};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_path();
    match cli.command {
        None => serve::execute(config, &ServeArgs::default())
            .await
            .context("service failed"),
        Some(Commands::Serve(args)) => serve::execute(config, &args)
            .await
            .context("service failed"),
        Some(Commands::Check(args)) => check::execute(config, &args).context("check failed"),
        Some(Commands::Predict(args)) => {
            predict::execute(config, &args).context("prediction failed")
        }
    }
}
