// src/signals/synthesis.rs
// Priority-ordered fusion of the three detectors into one recommendation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::crisis::{CrisisAssessment, CrisisConversationAssessment, CrisisDetector, CrisisLevel};
use super::emotional::{
    EmotionalAssessment, EmotionalJourney, EmotionalState, EmotionalStateDetector, Trend,
};
use super::history::{ConversationTurn, user_messages};
use super::humor::{HumorAssessment, HumorConversationAssessment, HumorDetector, HumorLevel};
use super::lexicon::is_blank;

/// Boolean gates steering the downstream dialogue agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseFlags {
    pub requires_crisis_protocol: bool,
    pub needs_professional_tone: bool,
    pub can_use_humor: bool,
    pub needs_emotional_support: bool,
    pub can_celebrate: bool,
    pub should_encourage_progress: bool,
}

impl ResponseFlags {
    pub fn from_assessments(
        crisis: &CrisisConversationAssessment,
        humor: &HumorConversationAssessment,
        emotional: &EmotionalJourney,
    ) -> Self {
        Self {
            requires_crisis_protocol: crisis.level >= CrisisLevel::Medium,
            needs_professional_tone: crisis.needs_professional_tone
                || emotional.state <= EmotionalState::Negative,
            can_use_humor: crisis.level <= CrisisLevel::Low
                && humor.level >= HumorLevel::Light
                && emotional.state >= EmotionalState::Neutral,
            needs_emotional_support: emotional.state <= EmotionalState::SlightlyNegative
                || crisis.level >= CrisisLevel::Low,
            can_celebrate: emotional.state >= EmotionalState::Positive
                && crisis.level == CrisisLevel::None,
            should_encourage_progress: emotional.trend == Trend::Improving,
        }
    }

    /// Names of the flags that are set, in declaration order
    pub fn active(&self) -> Vec<&'static str> {
        [
            ("requires_crisis_protocol", self.requires_crisis_protocol),
            ("needs_professional_tone", self.needs_professional_tone),
            ("can_use_humor", self.can_use_humor),
            ("needs_emotional_support", self.needs_emotional_support),
            ("can_celebrate", self.can_celebrate),
            ("should_encourage_progress", self.should_encourage_progress),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// The three conversation assessments fused into one behavioral recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedRecommendation {
    pub crisis: CrisisConversationAssessment,
    pub humor: HumorConversationAssessment,
    pub emotional: EmotionalJourney,
    pub overall_recommendation: String,
    pub flags: ResponseFlags,
    /// Informational only; never feeds scoring
    pub analyzed_at: DateTime<Utc>,
}

impl IntegratedRecommendation {
    /// One-line telemetry summary. Contains levels and flags, never message text.
    pub fn summary(&self) -> String {
        let active = self.flags.active();
        format!(
            "crisis={} humor={} emotion={} trend={} messages={} flags=[{}]",
            self.crisis.level.as_str(),
            self.humor.level.as_str(),
            self.emotional.state.as_str(),
            self.emotional.trend.as_str(),
            self.emotional.analyzed_count,
            active.join(",")
        )
    }
}

/// Per-message output of all three detectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSignals {
    pub crisis: CrisisAssessment,
    pub humor: HumorAssessment,
    pub emotional: EmotionalAssessment,
}

/// Recommendation text, first applicable branch wins: crisis, then
/// emotional state, then humor.
pub fn synthesize_recommendation(
    crisis: &CrisisConversationAssessment,
    humor: &HumorConversationAssessment,
    emotional: &EmotionalJourney,
) -> String {
    let state = emotional.state.label();

    if crisis.level >= CrisisLevel::Medium {
        return format!(
            "CRISIS PROTOCOL: {} Do not use humor. Current emotional state: {}.",
            crisis.recommended_approach, state
        );
    }

    if crisis.level == CrisisLevel::Low {
        return format!(
            "{} Use minimal humor only if appropriate. Current emotional state: {}.",
            crisis.recommended_approach, state
        );
    }

    let mut text = emotional.recommended_approach.clone();
    text.push(' ');
    if emotional.state <= EmotionalState::SlightlyNegative {
        text.push_str("Use very minimal humor, prioritize support.");
    } else if emotional.state >= EmotionalState::Positive {
        text.push_str(&humor.recommended_approach);
    } else {
        text.push_str(humor.level.neutral_approach());
    }

    match emotional.trend {
        Trend::Improving => text.push_str(" Acknowledge their improvement."),
        Trend::Declining => text.push_str(" Be extra supportive, mood is declining."),
        Trend::Stable => {}
    }
    text
}

/// Runs the three detectors and the synthesizer.
///
/// Stateless apart from references to the shared lexicons; one engine can
/// serve any number of concurrent analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    crisis: CrisisDetector,
    humor: HumorDetector,
    emotional: EmotionalStateDetector,
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crisis_detector(&self) -> &CrisisDetector {
        &self.crisis
    }

    pub fn humor_detector(&self) -> &HumorDetector {
        &self.humor
    }

    pub fn emotional_detector(&self) -> &EmotionalStateDetector {
        &self.emotional
    }

    /// All three per-message assessments for one message
    pub fn analyze_message(&self, text: &str) -> MessageSignals {
        MessageSignals {
            crisis: self.crisis.analyze_message(text),
            humor: self.humor.analyze_message(text),
            emotional: self.emotional.analyze_message(text),
        }
    }

    /// Integrated recommendation over the user turns of `history`, oldest first
    pub fn analyze_history(&self, history: &[ConversationTurn]) -> IntegratedRecommendation {
        self.analyze_user_messages(&user_messages(history))
    }

    /// Integrated recommendation with `current` appended as the newest user
    /// message. A blank `current` is ignored.
    pub fn analyze(&self, current: &str, history: &[ConversationTurn]) -> IntegratedRecommendation {
        let mut messages = user_messages(history);
        if !is_blank(current) {
            messages.push(current);
        }
        self.analyze_user_messages(&messages)
    }

    /// Integrated recommendation over plain user messages, oldest first
    pub fn analyze_user_messages(&self, messages: &[&str]) -> IntegratedRecommendation {
        let crisis = self.crisis.analyze_conversation(messages);
        let humor = self.humor.analyze_conversation(messages);
        let emotional = self.emotional.analyze_conversation(messages);
        self.synthesize(crisis, humor, emotional)
    }

    /// Fuse three conversation assessments
    pub fn synthesize(
        &self,
        crisis: CrisisConversationAssessment,
        humor: HumorConversationAssessment,
        emotional: EmotionalJourney,
    ) -> IntegratedRecommendation {
        let overall_recommendation = synthesize_recommendation(&crisis, &humor, &emotional);
        let flags = ResponseFlags::from_assessments(&crisis, &humor, &emotional);

        if flags.requires_crisis_protocol {
            info!(
                crisis = crisis.level.as_str(),
                emotion = emotional.state.as_str(),
                "Crisis protocol required"
            );
        }
        debug!(flags = ?flags.active(), "Signals synthesized");

        IntegratedRecommendation {
            crisis,
            humor,
            emotional,
            overall_recommendation,
            flags,
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crisis_at(level: CrisisLevel) -> CrisisConversationAssessment {
        CrisisConversationAssessment {
            level,
            recommended_approach: level.recommended_response().to_string(),
            needs_professional_tone: level >= CrisisLevel::Medium,
            ..Default::default()
        }
    }

    fn humor_at(level: HumorLevel) -> HumorConversationAssessment {
        HumorConversationAssessment {
            level,
            recommended_approach: level.approach().to_string(),
            ..Default::default()
        }
    }

    fn emotion_at(state: EmotionalState, trend: Trend) -> EmotionalJourney {
        EmotionalJourney {
            state,
            trend,
            recommended_approach: state.recommended_approach().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_crisis_dominates_recommendation() {
        let text = synthesize_recommendation(
            &crisis_at(CrisisLevel::High),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::VeryPositive, Trend::Improving),
        );
        assert!(text.starts_with("CRISIS PROTOCOL:"));
        assert!(text.contains("very positive"));
        assert!(!text.contains(HumorLevel::High.approach()));
        assert!(!text.contains("Acknowledge their improvement"));
    }

    #[test]
    fn test_low_crisis_allows_minimal_humor() {
        let text = synthesize_recommendation(
            &crisis_at(CrisisLevel::Low),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::Neutral, Trend::Stable),
        );
        assert!(text.starts_with(CrisisLevel::Low.recommended_response()));
        assert!(text.contains("Use minimal humor only if appropriate."));
        assert!(text.ends_with("Current emotional state: neutral."));
    }

    #[test]
    fn test_negative_state_prioritizes_support() {
        let text = synthesize_recommendation(
            &crisis_at(CrisisLevel::None),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::SlightlyNegative, Trend::Declining),
        );
        assert!(text.starts_with(EmotionalState::SlightlyNegative.recommended_approach()));
        assert!(text.contains("Use very minimal humor, prioritize support."));
        assert!(text.ends_with("Be extra supportive, mood is declining."));
    }

    #[test]
    fn test_positive_state_uses_humor_approach() {
        let text = synthesize_recommendation(
            &crisis_at(CrisisLevel::Mild),
            &humor_at(HumorLevel::Moderate),
            &emotion_at(EmotionalState::Positive, Trend::Improving),
        );
        assert!(text.contains(HumorLevel::Moderate.approach()));
        assert!(text.ends_with("Acknowledge their improvement."));
    }

    #[test]
    fn test_neutral_state_uses_neutral_framing() {
        let text = synthesize_recommendation(
            &crisis_at(CrisisLevel::None),
            &humor_at(HumorLevel::Light),
            &emotion_at(EmotionalState::SlightlyPositive, Trend::Stable),
        );
        assert!(text.ends_with(HumorLevel::Light.neutral_approach()));
    }

    #[test]
    fn test_flags_under_crisis() {
        let flags = ResponseFlags::from_assessments(
            &crisis_at(CrisisLevel::Medium),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::VeryPositive, Trend::Stable),
        );
        assert!(flags.requires_crisis_protocol);
        assert!(flags.needs_professional_tone);
        assert!(!flags.can_use_humor);
        assert!(flags.needs_emotional_support);
        assert!(!flags.can_celebrate);
    }

    #[test]
    fn test_flags_celebration() {
        let flags = ResponseFlags::from_assessments(
            &crisis_at(CrisisLevel::None),
            &humor_at(HumorLevel::Light),
            &emotion_at(EmotionalState::Positive, Trend::Improving),
        );
        assert!(flags.can_use_humor);
        assert!(flags.can_celebrate);
        assert!(flags.should_encourage_progress);
        assert!(!flags.needs_emotional_support);
        assert_eq!(
            flags.active(),
            vec!["can_use_humor", "can_celebrate", "should_encourage_progress"]
        );
    }

    #[test]
    fn test_flags_mild_crisis_blocks_celebration_only() {
        let flags = ResponseFlags::from_assessments(
            &crisis_at(CrisisLevel::Mild),
            &humor_at(HumorLevel::Light),
            &emotion_at(EmotionalState::Positive, Trend::Stable),
        );
        assert!(flags.can_use_humor);
        assert!(!flags.can_celebrate);
        assert!(!flags.needs_emotional_support);
    }

    #[test]
    fn test_flags_negative_state_professional_tone() {
        let flags = ResponseFlags::from_assessments(
            &crisis_at(CrisisLevel::None),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::Negative, Trend::Stable),
        );
        assert!(flags.needs_professional_tone);
        assert!(flags.needs_emotional_support);
        assert!(!flags.can_use_humor);

        let slightly = ResponseFlags::from_assessments(
            &crisis_at(CrisisLevel::None),
            &humor_at(HumorLevel::High),
            &emotion_at(EmotionalState::SlightlyNegative, Trend::Stable),
        );
        assert!(!slightly.needs_professional_tone);
    }

    #[test]
    fn test_analyze_appends_current_message() {
        let engine = SignalEngine::new();
        let history = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("I want to die laughing at that joke"),
        ];
        let result = engine.analyze("I'm happy today", &history);
        // assistant turns never reach the detectors
        assert_eq!(result.crisis.level, CrisisLevel::None);
        assert_eq!(result.emotional.analyzed_count, 2);

        let blank = engine.analyze("  ", &history);
        assert_eq!(blank.emotional.analyzed_count, 1);
    }

    #[test]
    fn test_summary_has_no_message_text() {
        let engine = SignalEngine::new();
        let result = engine.analyze("lol that's hilarious 😂", &[]);
        let summary = result.summary();
        assert!(summary.starts_with("crisis=none humor=high"));
        assert!(!summary.contains("hilarious"));
    }
}
