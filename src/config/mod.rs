// src/config/mod.rs
// Configuration: ~/.attune/config.toml, environment overrides, CLI flags

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::AttuneConfig;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{Level, warn};

/// Log level used when neither config nor environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How CLI results are written to stdout
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Whether `value` names a tracing level (error, warn, info, debug, trace)
pub fn is_valid_level(value: &str) -> bool {
    Level::from_str(value).is_ok()
}

/// Effective settings after layering CLI > environment > file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(
        file: &AttuneConfig,
        env: &EnvConfig,
        format_override: Option<OutputFormat>,
    ) -> Self {
        let format = format_override
            .or(env.output_format)
            .or(file.output.format)
            .unwrap_or_default();
        let file_level = file.logging.level.clone().filter(|value| {
            let valid = is_valid_level(value);
            if !valid {
                warn!(value = %value, "Unknown [logging] level in config file, ignoring");
            }
            valid
        });
        let log_level = env
            .log_level
            .clone()
            .or(file_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            format,
            pretty: file.output.pretty,
            log_level,
        }
    }
}
