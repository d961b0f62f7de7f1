// tests/signals_integration.rs
// End-to-end behavior of the signal engine through the public API

use attune::signals::{
    CrisisConversationAssessment, CrisisLevel, EmotionalJourney, EmotionalState,
    HumorConversationAssessment, HumorLevel, Trend, synthesize_recommendation,
};
use attune::{ConversationTurn, SignalEngine};

fn history(messages: &[&str]) -> Vec<ConversationTurn> {
    messages
        .iter()
        .flat_map(|m| [ConversationTurn::user(*m), ConversationTurn::assistant("I hear you.")])
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn kill_myself_is_medium_crisis() {
    let signals = SignalEngine::new().analyze_message("I want to kill myself");
    assert_eq!(signals.crisis.score, 5);
    assert_eq!(signals.crisis.level, CrisisLevel::Medium);

    let rec = SignalEngine::new().analyze("I want to kill myself", &[]);
    assert!(rec.flags.requires_crisis_protocol);
    assert!(rec.overall_recommendation.starts_with("CRISIS PROTOCOL:"));
}

#[test]
fn laughing_message_is_high_humor() {
    let signals = SignalEngine::new().analyze_message("lol that's hilarious 😂");
    assert_eq!(signals.humor.humor_score, 14);
    assert_eq!(signals.humor.formality_score, 0);
    assert_eq!(signals.humor.level, HumorLevel::High);

    let rec = SignalEngine::new().analyze("lol that's hilarious 😂", &[]);
    assert!(rec.flags.can_use_humor);
}

#[test]
fn empty_message_is_neutral_everywhere() {
    let signals = SignalEngine::new().analyze_message("");
    assert_eq!(signals.crisis.level, CrisisLevel::None);
    assert_eq!(signals.crisis.score, 0);
    assert_eq!(signals.emotional.state, EmotionalState::Neutral);
    assert_eq!(signals.humor.level, HumorLevel::Unknown);

    let rec = SignalEngine::new().analyze("", &[]);
    assert_eq!(rec.crisis.level, CrisisLevel::None);
    assert_eq!(rec.humor.level, HumorLevel::Unknown);
    assert_eq!(rec.emotional.state, EmotionalState::Neutral);
    assert_eq!(rec.emotional.trend, Trend::Stable);
    assert!(rec.flags.active().is_empty());
}

#[test]
fn request_for_seriousness_overrides_engagement() {
    let signals = SignalEngine::new().analyze_message("please be serious, this isn't funny");
    assert!(signals.humor.formality_score >= 8);
    assert!(signals.humor.humor_score > 0, "'funny' still counts as engagement");
    assert_eq!(signals.humor.level, HumorLevel::Avoid);

    let rec = SignalEngine::new().analyze("please be serious, this isn't funny", &[]);
    assert!(!rec.flags.can_use_humor);
    assert!(rec.flags.needs_professional_tone);
}

#[test]
fn rising_crisis_scores_trigger_escalation_bonus() {
    let turns = history(&["hello", "hi", "I'm exhausted", "I feel hopeless", "I want to die"]);
    let rec = SignalEngine::new().analyze_history(&turns);

    assert!(rec.crisis.escalating);
    assert_eq!(rec.crisis.recent_scores, vec![1, 3, 5]);
    // trunc(1 * 0.6) + trunc(3 * 0.8) + 5 + bonus
    assert_eq!(rec.crisis.score, 9);
    assert_eq!(rec.crisis.level, CrisisLevel::High);
    assert!(
        rec.crisis
            .matched_indicators
            .iter()
            .any(|i| i.contains("escalating pattern"))
    );
    assert_eq!(rec.crisis.analyzed_count, 5, "assistant turns are not analyzed");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn analysis_is_deterministic() {
    let engine = SignalEngine::new();
    let turns = history(&["work has been awful", "kinda anxious all the time", "haha thanks"]);

    let first = engine.analyze("I feel a bit better today", &turns);
    let mut second = engine.analyze("I feel a bit better today", &turns);
    second.analyzed_at = first.analyzed_at;
    assert_eq!(first, second);
}

#[test]
fn extra_keywords_never_lower_base_scores() {
    let engine = SignalEngine::new();

    let base = engine.analyze_message("I feel hopeless");
    let more = engine.analyze_message("I feel hopeless and worthless");
    assert!(more.crisis.score >= base.crisis.score);

    let base = engine.analyze_message("haha");
    let more = engine.analyze_message("haha lol");
    assert!(more.humor.humor_score >= base.humor.humor_score);

    let base = engine.analyze_message("I am sad");
    let more = engine.analyze_message("I am sad and anxious");
    assert!(more.emotional.negative_score >= base.emotional.negative_score);
}

#[test]
fn every_score_maps_to_one_level() {
    for score in -50..=50 {
        let level = CrisisLevel::from_score(score);
        let expected = match score {
            s if s >= 8 => CrisisLevel::High,
            s if s >= 5 => CrisisLevel::Medium,
            s if s >= 3 => CrisisLevel::Low,
            s if s >= 1 => CrisisLevel::Mild,
            _ => CrisisLevel::None,
        };
        assert_eq!(level, expected, "crisis score {score}");
    }

    for (below, at, level) in [
        (7, 8, CrisisLevel::High),
        (4, 5, CrisisLevel::Medium),
        (2, 3, CrisisLevel::Low),
        (0, 1, CrisisLevel::Mild),
    ] {
        assert_eq!(CrisisLevel::from_score(at), level);
        assert!(CrisisLevel::from_score(below) < level);
    }

    assert_eq!(HumorLevel::classify(10, 0, None), HumorLevel::High);
    assert_eq!(HumorLevel::classify(9, 0, None), HumorLevel::Moderate);
    assert_eq!(HumorLevel::classify(6, 0, None), HumorLevel::Moderate);
    assert_eq!(HumorLevel::classify(5, 0, None), HumorLevel::Light);
    assert_eq!(HumorLevel::classify(3, 0, None), HumorLevel::Light);
    assert_eq!(HumorLevel::classify(2, 0, None), HumorLevel::Minimal);
    assert_eq!(HumorLevel::classify(0, 0, None), HumorLevel::Unknown);
    assert_eq!(HumorLevel::classify(20, 8, None), HumorLevel::Avoid);
    assert_eq!(HumorLevel::classify(20, 7, None), HumorLevel::Minimal);

    assert_eq!(EmotionalState::from_score(10.0), EmotionalState::VeryPositive);
    assert_eq!(EmotionalState::from_score(9.99), EmotionalState::Positive);
    assert_eq!(EmotionalState::from_score(-2.0), EmotionalState::Neutral);
    assert_eq!(EmotionalState::from_score(-2.01), EmotionalState::SlightlyNegative);
    assert_eq!(EmotionalState::from_score(-10.0), EmotionalState::Negative);
    assert_eq!(EmotionalState::from_score(-10.01), EmotionalState::VeryNegative);
}

#[test]
fn recent_signals_weigh_at_least_as_much_as_older_ones() {
    let engine = SignalEngine::new();

    let early = engine.analyze_history(&history(&["I feel hopeless", "hello"]));
    let late = engine.analyze_history(&history(&["hello", "I feel hopeless"]));
    assert!(late.crisis.score >= early.crisis.score);
    // two-message windows always carry the escalation bonus
    assert_eq!(early.crisis.score, 1 + 2);
    assert_eq!(late.crisis.score, 3 + 2);

    let early = engine.analyze_history(&history(&["lol", "ok", "ok", "ok", "ok"]));
    let late = engine.analyze_history(&history(&["ok", "ok", "ok", "ok", "lol"]));
    assert!(late.humor.humor_score >= early.humor.humor_score);
    assert_eq!(early.humor.humor_score, 2);
    assert_eq!(late.humor.humor_score, 4);
}

#[test]
fn easing_off_after_a_spike_still_escalates() {
    let turns = history(&["I feel hopeless", "I want to die", "ok"]);
    let rec = SignalEngine::new().analyze_history(&turns);

    assert_eq!(rec.crisis.recent_scores, vec![3, 5, 0]);
    assert!(rec.crisis.escalating);
    assert_eq!(rec.crisis.score, 6);
    assert_eq!(rec.crisis.level, CrisisLevel::Medium);
    assert!(rec.flags.requires_crisis_protocol);
    assert!(!rec.flags.can_use_humor);
}

#[test]
fn crisis_suppresses_humor_regardless_of_other_signals() {
    let rec = SignalEngine::new().analyze("lol I want to kill myself 😂 haha", &[]);
    assert!(rec.crisis.level >= CrisisLevel::Medium);
    assert!(!rec.flags.can_use_humor);

    let humor = HumorConversationAssessment {
        level: HumorLevel::High,
        humor_score: 20,
        ..Default::default()
    };
    let emotional = EmotionalJourney {
        state: EmotionalState::VeryPositive,
        trend: Trend::Improving,
        ..Default::default()
    };
    for level in [CrisisLevel::Medium, CrisisLevel::High] {
        let crisis = CrisisConversationAssessment {
            level,
            recommended_approach: level.recommended_response().to_string(),
            ..Default::default()
        };
        let text = synthesize_recommendation(&crisis, &humor, &emotional);
        assert!(text.contains("Do not use humor"));
        assert!(!text.contains(HumorLevel::High.approach()));
        assert!(!text.contains(HumorLevel::High.neutral_approach()));

        let rec = SignalEngine::new().synthesize(crisis, humor.clone(), emotional.clone());
        assert!(!rec.flags.can_use_humor);
        assert!(!rec.flags.can_celebrate);
        assert!(rec.flags.requires_crisis_protocol);
    }
}

#[test]
fn shared_engine_serves_concurrent_callers() {
    let engine = SignalEngine::new();
    let inputs = ["I want to kill myself", "lol that's hilarious 😂", "I'm so happy today", ""];
    let expected: Vec<_> = inputs.iter().map(|m| engine.analyze_message(m)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    inputs
                        .iter()
                        .map(|m| engine.analyze_message(m))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn improving_mood_encourages_progress() {
    let turns = history(&["I'm so sad and miserable", "feeling awful", "I am happy and grateful"]);
    let rec = SignalEngine::new().analyze_history(&turns);
    assert_eq!(rec.emotional.trend, Trend::Improving);
    assert!(rec.flags.should_encourage_progress);
    assert!(rec.overall_recommendation.ends_with("Acknowledge their improvement."));
}
