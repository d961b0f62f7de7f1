// src/cli/render.rs
// Text and JSON rendering of analysis results

use serde::Serialize;

use super::batch::BatchOutcome;
use crate::config::{OutputFormat, Settings};
use crate::error::Result;
use crate::signals::{IntegratedRecommendation, MessageSignals};

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn push_indicators(lines: &mut Vec<String>, indicators: &[String]) {
    if indicators.is_empty() {
        return;
    }
    lines.push("  Indicators:".to_string());
    for indicator in indicators {
        lines.push(format!("    - {}", indicator));
    }
}

pub fn render_message(signals: &MessageSignals, settings: &Settings) -> Result<String> {
    if settings.format == OutputFormat::Json {
        return to_json(signals, settings.pretty);
    }

    let mut lines = Vec::new();
    let crisis = &signals.crisis;
    lines.push("--- Crisis ---".to_string());
    lines.push(format!("  Level:      {} (score {})", crisis.level.as_str(), crisis.score));
    lines.push(format!("  Serious:    {}", yes_no(crisis.needs_professional_tone)));
    push_indicators(&mut lines, &crisis.matched_indicators);

    let humor = &signals.humor;
    lines.push("--- Humor ---".to_string());
    lines.push(format!(
        "  Level:      {} (humor {}, formality {})",
        humor.level.as_str(),
        humor.humor_score,
        humor.formality_score
    ));
    push_indicators(&mut lines, &humor.matched_indicators);

    let emotional = &signals.emotional;
    lines.push("--- Emotional ---".to_string());
    lines.push(format!(
        "  State:      {} (net {:.2}, intensity x{:.2})",
        emotional.state.as_str(),
        emotional.net_score,
        emotional.intensity_multiplier
    ));
    if let Some(emotion) = emotional.dominant_emotion {
        lines.push(format!("  Dominant:   {}", emotion.as_str()));
    }
    push_indicators(&mut lines, &emotional.matched_indicators);

    Ok(lines.join("\n"))
}

pub fn render_recommendation(
    rec: &IntegratedRecommendation,
    settings: &Settings,
) -> Result<String> {
    if settings.format == OutputFormat::Json {
        return to_json(rec, settings.pretty);
    }

    let mut lines = Vec::new();
    lines.push("--- Crisis ---".to_string());
    lines.push(format!("  Level:      {} (score {})", rec.crisis.level.as_str(), rec.crisis.score));
    lines.push(format!("  Escalating: {}", yes_no(rec.crisis.escalating)));
    push_indicators(&mut lines, &rec.crisis.matched_indicators);

    lines.push("--- Humor ---".to_string());
    lines.push(format!(
        "  Level:      {} (humor {}, formality {})",
        rec.humor.level.as_str(),
        rec.humor.humor_score,
        rec.humor.formality_score
    ));

    lines.push("--- Emotional ---".to_string());
    lines.push(format!(
        "  State:      {} (net {:.2}), trend {}",
        rec.emotional.state.as_str(),
        rec.emotional.net_score,
        rec.emotional.trend.as_str()
    ));
    if let Some(emotion) = rec.emotional.dominant_emotion {
        lines.push(format!("  Dominant:   {}", emotion.as_str()));
    }
    lines.push(format!("  Messages:   {}", rec.emotional.analyzed_count));

    lines.push("--- Recommendation ---".to_string());
    lines.push(format!("  {}", rec.overall_recommendation));
    let active = rec.flags.active();
    lines.push(format!(
        "  Flags:      {}",
        if active.is_empty() { "none".to_string() } else { active.join(", ") }
    ));

    Ok(lines.join("\n"))
}

/// One output line per batch outcome; JSON is always compact here
pub fn render_batch_outcome(outcome: &BatchOutcome, settings: &Settings) -> Result<String> {
    if settings.format == OutputFormat::Json {
        return to_json(outcome, false);
    }
    Ok(match (&outcome.recommendation, &outcome.error) {
        (Some(rec), _) => format!("line {}: {}", outcome.line, rec.summary()),
        (None, Some(error)) => format!("line {}: error: {}", outcome.line, error),
        (None, None) => format!("line {}: no result", outcome.line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalEngine;

    fn settings(format: OutputFormat) -> Settings {
        Settings {
            format,
            pretty: false,
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_render_message_text() {
        let signals = SignalEngine::new().analyze_message("I want to kill myself");
        let text = render_message(&signals, &settings(OutputFormat::Text)).unwrap();
        assert!(text.contains("Level:      medium (score 5)"));
        assert!(text.contains("'kill myself'"));
    }

    #[test]
    fn test_render_recommendation_json_roundtrips() {
        let rec = SignalEngine::new().analyze("lol that's hilarious 😂", &[]);
        let json = render_recommendation(&rec, &settings(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["humor"]["level"], "high");
        assert_eq!(value["flags"]["can_use_humor"], true);
    }

    #[test]
    fn test_render_recommendation_text_lists_flags() {
        let rec = SignalEngine::new().analyze("", &[]);
        let text = render_recommendation(&rec, &settings(OutputFormat::Text)).unwrap();
        assert!(text.contains("Flags:      none"));
        assert!(text.contains("Messages:   0"));
    }

    #[test]
    fn test_render_batch_error_line() {
        let outcome = BatchOutcome {
            line: 4,
            recommendation: None,
            error: Some("bad".to_string()),
        };
        let text = render_batch_outcome(&outcome, &settings(OutputFormat::Text)).unwrap();
        assert_eq!(text, "line 4: error: bad");
        let json = render_batch_outcome(&outcome, &settings(OutputFormat::Json)).unwrap();
        assert_eq!(json, r#"{"line":4,"error":"bad"}"#);
    }
}
