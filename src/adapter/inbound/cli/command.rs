//! Command-line interface definitions.
//!
//! Defines the CLI structure for the persona-risk service using `clap`.
//! Without a subcommand the service starts serving HTTP.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Personality-profile risk prediction service
#[derive(Parser, Debug)]
#[command(name = "persona-risk")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when absent)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the persona-risk CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load all models and serve the prediction API (default)
    Serve(ServeArgs),

    /// Validate configuration and model artifacts without serving
    Check(CheckArgs),

    /// Score a single profile offline and print the result
    Predict(PredictArgs),
}

/// Arguments for `persona-risk serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the model artifact directory
    #[arg(long)]
    pub models_dir: Option<PathBuf>,
}

/// Arguments for `persona-risk check`.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Override the model artifact directory
    #[arg(long)]
    pub models_dir: Option<PathBuf>,
}

/// Arguments for `persona-risk predict`.
///
/// Traits are percentiles in `0..=100`.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub openness: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub conscientiousness: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub extraversion: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub agreeableness: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub neuroticism: i64,

    /// Override the model artifact directory
    #[arg(long)]
    pub models_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["persona-risk"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn parses_predict_traits() {
        let cli = Cli::parse_from([
            "persona-risk",
            "predict",
            "--openness",
            "10",
            "--conscientiousness",
            "20",
            "--extraversion",
            "30",
            "--agreeableness",
            "40",
            "--neuroticism",
            "-5",
        ]);
        match cli.command {
            Some(Commands::Predict(args)) => {
                assert_eq!(args.openness, 10);
                assert_eq!(args.neuroticism, -5);
            }
            other => panic!("expected predict, got {other:?}"),
        }
    }
}
