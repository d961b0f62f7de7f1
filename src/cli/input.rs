// src/cli/input.rs
// Reading conversation histories from files or stdin

use std::io::Read;
use std::path::Path;

use crate::error::{AttuneError, Result};
use crate::signals::ConversationTurn;

/// Parse a JSON array of `{sender, text}` turns. Blank input is an empty history.
pub fn parse_history(json: &str) -> Result<Vec<ConversationTurn>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(AttuneError::InvalidInput(
            "conversation must be a JSON array of turns".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Read a history from `path`, or from stdin when no path is given
pub fn read_history(path: Option<&Path>) -> Result<Vec<ConversationTurn>> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_history(&contents)
}
