// src/config/file.rs
// File-based configuration from ~/.attune/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::OutputFormat;
use crate::error::Result;

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct AttuneConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// "text" or "json"
    pub format: Option<OutputFormat>,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

/// Logging section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// tracing level name (error, warn, info, debug, trace)
    pub level: Option<String>,
}

impl AttuneConfig {
    /// Load config from ~/.attune/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// ~/.attune, or ./.attune without a home directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".attune")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
