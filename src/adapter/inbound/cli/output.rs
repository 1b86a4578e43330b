//! CLI output formatting.
//!
//! Human mode prints aligned, colored lines. `--json` mode prints one
//! `{"type": ..., "payload": ...}` object per line on stdout so scripts can
//! consume results. `--quiet` drops informational lines but never errors.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// How handlers render their output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Human,
    Quiet,
    Json,
}

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub mode: Mode,
    /// Number of `-v` flags given.
    pub verbose: u8,
}

impl OutputConfig {
    /// `json` wins over `quiet`.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        let mode = if json {
            Mode::Json
        } else if quiet {
            Mode::Quiet
        } else {
            Mode::Human
        };
        Self { mode, verbose }
    }
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

fn current() -> OutputConfig {
    OUTPUT.get().copied().unwrap_or_default()
}

/// Install the output settings. Only the first call takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT.set(config);
}

#[must_use]
pub fn is_json() -> bool {
    current().mode == Mode::Json
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Emit an informational event: JSON line, human line, or nothing when quiet.
fn info(kind: &str, payload: Value, human: impl FnOnce()) {
    match current().mode {
        Mode::Json => println!("{}", json!({ "type": kind, "payload": payload })),
        Mode::Human => human(),
        Mode::Quiet => {}
    }
}

/// Print the banner line with the service version.
pub fn header(version: &str) {
    info(
        "header",
        json!({ "app": "persona-risk", "version": version }),
        || {
            println!("{} {}", "persona-risk".bold(), version.dimmed());
            println!();
        },
    );
}

/// Print a section title.
pub fn section(title: &str) {
    info("section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold().underline());
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    info(
        "field",
        json!({ "label": label, "value": value }),
        || println!("  {:<30} {}", label.dimmed(), value),
    );
}

/// Print a success line.
pub fn success(message: &str) {
    info("success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

/// Emit a structured result. Only JSON mode prints anything; human callers
/// render the same data through [`field`].
pub fn result(kind: &str, payload: Value) {
    if is_json() {
        println!("{}", json!({ "type": kind, "payload": payload }));
    }
}

/// Print an error on stderr, regardless of quiet mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}
