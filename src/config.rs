//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::loader::{HttpSourceConfig, DEFAULT_ENDPOINT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    pub fn http(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Config file locations searched by [`Config::load_default`], in order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("txboard").join("config.toml"));
        }
        paths.push(PathBuf::from("./txboard.toml"));
        paths
    }

    /// Load from default locations or environment
    ///
    /// Logging is not set up yet when this runs, so problems with a found
    /// file are returned as a warning string for the caller to log.
    pub fn load_default() -> (Self, Option<String>) {
        for path in Self::default_paths() {
            if path.exists() {
                return match Self::load_with_env(&path) {
                    Ok(config) => (config, None),
                    Err(e) => (Self::from_env(), Some(e.to_string())),
                };
            }
        }

        (Self::from_env(), None)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Source overrides
        if let Some(endpoint) = var("TXBOARD_ENDPOINT") {
            self.source.endpoint = endpoint;
        }
        if let Some(timeout) = var("TXBOARD_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.source.timeout_secs = Some(secs);
            }
        }

        // Logging overrides
        if let Some(level) = var("TXBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("TXBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# txboard configuration
#
# Environment variables override these settings:
# - TXBOARD_ENDPOINT
# - TXBOARD_TIMEOUT_SECS
# - TXBOARD_LOG_LEVEL
# - TXBOARD_LOG_FORMAT

[source]
# Endpoint serving {"customers": [...], "transactions": [...]}
endpoint = "http://localhost:4000/api/data"

# Request timeout in seconds (default: wait indefinitely)
# timeout_secs = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
