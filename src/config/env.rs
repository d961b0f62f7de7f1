// src/config/env.rs
// Environment-based overrides (ATTUNE_OUTPUT_FORMAT, ATTUNE_LOG_LEVEL)

use std::str::FromStr;
use tracing::warn;

use super::{OutputFormat, is_valid_level};

/// Settings read from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// ATTUNE_OUTPUT_FORMAT
    pub output_format: Option<OutputFormat>,
    /// ATTUNE_LOG_LEVEL
    pub log_level: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, filtering empty values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let output_format = read("ATTUNE_OUTPUT_FORMAT").and_then(|value| {
            OutputFormat::from_str(&value)
                .inspect_err(|_| warn!(value = %value, "Unknown ATTUNE_OUTPUT_FORMAT, ignoring"))
                .ok()
        });

        let log_level = read("ATTUNE_LOG_LEVEL").filter(|value| {
            let valid = is_valid_level(value);
            if !valid {
                warn!(value = %value, "Unknown ATTUNE_LOG_LEVEL, ignoring");
            }
            valid
        });

        Self {
            output_format,
            log_level,
        }
    }
}
