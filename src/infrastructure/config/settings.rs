//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all service settings.
//! Configuration is loaded from an optional TOML file, then environment
//! variables override individual values:
//!
//! | Variable          | Overrides                 |
//! |-------------------|---------------------------|
//! | `HOST`            | `server.host`             |
//! | `PORT`            | `server.port`             |
//! | `MODELS_DIR`      | `models.directory`        |
//! | `ALLOWED_ORIGINS` | `cors.allowed_origins`    |
//!
//! # Example
//!
//! ```no_run
//! use persona_risk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Origin value that admits any cross-origin caller.
pub const ANY_ORIGIN: &str = "*";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where model artifacts live.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelsConfig {
    #[serde(default = "default_models_directory")]
    pub directory: PathBuf,
}

fn default_models_directory() -> PathBuf {
    PathBuf::from("models")
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            directory: default_models_directory(),
        }
    }
}

/// Cross-origin request policy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![ANY_ORIGIN.to_string()]
}

impl CorsConfig {
    /// Whether any origin is admitted.
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Main service configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub models: ModelsConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Split a comma-separated origin list, dropping blanks.
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override cannot be
    /// parsed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Apply environment overrides using `env` as the variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `PORT` is not a valid port.
    #[allow(clippy::result_large_err)]
    pub fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env("HOST") {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = env("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("'{port}' is not a valid port"),
            })?;
        }
        if let Some(dir) = env("MODELS_DIR") {
            self.models.directory = PathBuf::from(dir.trim());
        }
        if let Some(origins) = env("ALLOWED_ORIGINS") {
            self.cors.allowed_origins = parse_origins(&origins);
        }
        Ok(())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.models.directory.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "models.directory",
            }
            .into());
        }
        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "allowed_origins",
                reason: "must list at least one origin or '*'".to_string(),
            }
            .into());
        }
        for origin in &self.cors.allowed_origins {
            let valid = origin == ANY_ORIGIN
                || ((origin.starts_with("http://") || origin.starts_with("https://"))
                    && !origin.contains(char::is_whitespace));
            if !valid {
                return Err(ConfigError::InvalidValue {
                    field: "allowed_origins",
                    reason: format!("'{origin}' is not '*' or an http(s) origin"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the host is not an IP address.
    #[allow(clippy::result_large_err)]
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse::<SocketAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue {
                    field: "host",
                    reason: format!("'{}' is not an IP address", self.server.host),
                }
                .into()
            })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
