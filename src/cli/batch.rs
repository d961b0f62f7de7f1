// src/cli/batch.rs
// Batch analysis: one conversation (JSON array of turns) per input line

use serde::Serialize;
use tracing::{debug, warn};

use super::input::parse_history;
use crate::signals::{IntegratedRecommendation, SignalEngine};

/// Result for one non-blank input line
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// 1-based line number in the input
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<IntegratedRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn analyze_line(engine: &SignalEngine, line: usize, text: &str) -> BatchOutcome {
    match parse_history(text) {
        Ok(history) => BatchOutcome {
            line,
            recommendation: Some(engine.analyze_history(&history)),
            error: None,
        },
        Err(e) => {
            warn!(line, error = %e, "Skipping malformed batch line");
            BatchOutcome {
                line,
                recommendation: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Analyze every non-blank line independently. Outcomes keep input order.
pub fn analyze_batch(engine: &SignalEngine, input: &str) -> Vec<BatchOutcome> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| (index + 1, text))
        .collect();

    debug!(conversations = lines.len(), "Starting batch analysis");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        lines
            .par_iter()
            .map(|(line, text)| analyze_line(engine, *line, text))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        lines
            .iter()
            .map(|(line, text)| analyze_line(engine, *line, text))
            .collect()
    }
}
