// src/error.rs
// Error types for the fallible edges: config, input files, output

use thiserror::Error;

/// Main error type for the Attune library.
///
/// The analysis engine itself never fails; these cover loading input and config.
#[derive(Error, Debug)]
pub enum AttuneError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown error: {0}")]
    Other(String),
}

/// Convenience type alias for Result using AttuneError
pub type Result<T> = std::result::Result<T, AttuneError>;

impl From<String> for AttuneError {
    fn from(s: String) -> Self {
        AttuneError::Other(s)
    }
}

impl From<toml::de::Error> for AttuneError {
    fn from(err: toml::de::Error) -> Self {
        AttuneError::Config(err.to_string())
    }
}
