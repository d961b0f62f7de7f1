// src/cli/commands.rs
// Handlers for `attune message`, `attune conversation` and `attune batch`

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::batch::analyze_batch;
use super::input::read_history;
use super::render::{render_batch_outcome, render_message, render_recommendation};
use crate::config::Settings;
use crate::signals::SignalEngine;

/// Analyze a single message on its own.
pub fn run_message(text: &str, settings: &Settings) -> Result<()> {
    let signals = SignalEngine::new().analyze_message(text);
    println!("{}", render_message(&signals, settings)?);
    Ok(())
}

/// Analyze a conversation history, optionally followed by a new message.
pub fn run_conversation(
    file: Option<&Path>,
    message: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let history = read_history(file).with_context(|| match file {
        Some(path) => format!("Failed to read conversation from {}", path.display()),
        None => "Failed to read conversation from stdin".to_string(),
    })?;

    let engine = SignalEngine::new();
    let rec = match message {
        Some(current) => engine.analyze(current, &history),
        None => engine.analyze_history(&history),
    };

    info!(turns = history.len(), crisis = rec.crisis.level.as_str(), "Conversation analyzed");
    println!("{}", render_recommendation(&rec, settings)?);
    Ok(())
}

/// Analyze one conversation per line of `file`. Malformed lines are reported, not fatal.
pub fn run_batch(file: &Path, settings: &Settings) -> Result<()> {
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file {}", file.display()))?;

    let outcomes = analyze_batch(&SignalEngine::new(), &input);
    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();

    for outcome in &outcomes {
        println!("{}", render_batch_outcome(outcome, settings)?);
    }

    info!(conversations = outcomes.len(), failed, "Batch complete");
    Ok(())
}
