// src/signals/emotional.rs
// Emotional valence detection and conversation-level emotional journey

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::history::tiered_weight;
use super::lexicon::{ThresholdTable, is_blank, normalize};
use super::lexicons::{EMOTIONAL_LEXICONS, EmotionalLexicons};

/// Newest user messages weighted at full strength
pub const EMOTION_RECENT_WINDOW: usize = 3;

/// Weight of user messages older than the recent window
pub const EMOTION_OLDER_WEIGHT: f64 = 0.7;

/// Messages compared against everything earlier when deriving the trend
pub const TREND_RECENT_WINDOW: usize = 3;

/// Mean net-score shift that counts as a real change of mood
pub const TREND_DELTA: f64 = 2.0;

/// Ordinal emotional valence, most negative first
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmotionalState {
    VeryNegative = 0,
    Negative = 1,
    SlightlyNegative = 2,
    #[default]
    Neutral = 3,
    SlightlyPositive = 4,
    Positive = 5,
    VeryPositive = 6,
}

pub const EMOTIONAL_THRESHOLDS: ThresholdTable<f64, EmotionalState> = ThresholdTable::new(
    &[
        (10.0, EmotionalState::VeryPositive),
        (5.0, EmotionalState::Positive),
        (2.0, EmotionalState::SlightlyPositive),
        (-2.0, EmotionalState::Neutral),
        (-5.0, EmotionalState::SlightlyNegative),
        (-10.0, EmotionalState::Negative),
    ],
    EmotionalState::VeryNegative,
);

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn from_score(net_score: f64) -> Self {
        EMOTIONAL_THRESHOLDS.level_for(net_score)
    }

    /// Human-readable name for recommendation text
    pub fn label(&self) -> &'static str {
        match self {
            EmotionalState::VeryNegative => "very negative",
            EmotionalState::Negative => "negative",
            EmotionalState::SlightlyNegative => "slightly negative",
            EmotionalState::Neutral => "neutral",
            EmotionalState::SlightlyPositive => "slightly positive",
            EmotionalState::Positive => "positive",
            EmotionalState::VeryPositive => "very positive",
        }
    }

    pub fn recommended_approach(&self) -> &'static str {
        match self {
            EmotionalState::VeryNegative => {
                "They are in significant distress. Be calm, compassionate and fully present; gently suggest additional support."
            }
            EmotionalState::Negative => {
                "They are struggling. Lead with empathy, validate their feelings and keep the tone calm."
            }
            EmotionalState::SlightlyNegative => {
                "They seem a little low. Be gentle, acknowledge how they feel and offer support."
            }
            EmotionalState::Neutral => {
                "Their mood seems even. Be attentive and open, and invite them to share more."
            }
            EmotionalState::SlightlyPositive => {
                "They are doing okay. Be warm and encouraging."
            }
            EmotionalState::Positive => "They are in a good place. Be warm and affirming.",
            EmotionalState::VeryPositive => {
                "They are feeling great. Celebrate with them and reinforce what is going well."
            }
        }
    }
}

/// Direction of mood across a conversation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trend {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Emotion family of a lexicon entry. Declaration order breaks ties when
/// picking the dominant emotion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmotionFamily {
    Joy,
    Gratitude,
    Calm,
    Hope,
    Sadness,
    Anxiety,
    Anger,
    Loneliness,
    Exhaustion,
}

impl EmotionFamily {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Emotional analysis of one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAssessment {
    /// Matched positive weight, intensity-scaled
    pub positive_score: f64,
    /// Matched negative weight, intensity-scaled
    pub negative_score: f64,
    /// Product of all matched intensity modifiers, 1.0 if none
    pub intensity_multiplier: f64,
    /// Sum of matched context-cue weights (signed)
    pub context_score: f64,
    /// `positive - negative - context`
    pub net_score: f64,
    pub state: EmotionalState,
    /// Intensity-scaled weight per emotion family
    pub emotions: BTreeMap<EmotionFamily, f64>,
    pub dominant_emotion: Option<EmotionFamily>,
    pub matched_indicators: Vec<String>,
    pub recommended_approach: String,
}

impl EmotionalAssessment {
    fn neutral() -> Self {
        Self {
            positive_score: 0.0,
            negative_score: 0.0,
            intensity_multiplier: 1.0,
            context_score: 0.0,
            net_score: 0.0,
            state: EmotionalState::Neutral,
            emotions: BTreeMap::new(),
            dominant_emotion: None,
            matched_indicators: Vec::new(),
            recommended_approach: EmotionalState::Neutral.recommended_approach().to_string(),
        }
    }
}

/// Emotional state aggregated over a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalJourney {
    /// Recency-weighted sum of per-message positive scores
    pub positive_score: f64,
    /// Recency-weighted sum of per-message negative scores
    pub negative_score: f64,
    /// `positive_score - negative_score`
    pub net_score: f64,
    pub state: EmotionalState,
    pub trend: Trend,
    pub dominant_emotion: Option<EmotionFamily>,
    pub matched_indicators: Vec<String>,
    pub recommended_approach: String,
    pub analyzed_count: usize,
}

impl EmotionalJourney {
    fn neutral() -> Self {
        Self {
            positive_score: 0.0,
            negative_score: 0.0,
            net_score: 0.0,
            state: EmotionalState::Neutral,
            trend: Trend::Stable,
            dominant_emotion: None,
            matched_indicators: Vec::new(),
            recommended_approach: EmotionalState::Neutral.recommended_approach().to_string(),
            analyzed_count: 0,
        }
    }
}

impl Default for EmotionalJourney {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Scores emotional valence against the emotional lexicons
#[derive(Debug, Clone, Copy)]
pub struct EmotionalStateDetector {
    lexicons: &'static EmotionalLexicons,
}

impl Default for EmotionalStateDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionalStateDetector {
    pub fn new() -> Self {
        Self {
            lexicons: &EMOTIONAL_LEXICONS,
        }
    }

    /// Analyze a single message. Blank text yields `{state: Neutral}`.
    pub fn analyze_message(&self, text: &str) -> EmotionalAssessment {
        if is_blank(text) {
            return EmotionalAssessment::neutral();
        }

        let normalized = normalize(text);
        let mut matched_indicators = Vec::new();
        let mut emotions: BTreeMap<EmotionFamily, f64> = BTreeMap::new();

        let mut positive_score = 0.0;
        for (family, lexicon) in &self.lexicons.positive {
            for entry in lexicon.matches(&normalized) {
                positive_score += entry.weight;
                *emotions.entry(*family).or_default() += entry.weight;
                matched_indicators.push(format!(
                    "{}: '{}' (+{})",
                    lexicon.name(),
                    entry.phrase,
                    entry.weight
                ));
            }
        }

        let mut negative_score = 0.0;
        for (family, lexicon) in &self.lexicons.negative {
            for entry in lexicon.matches(&normalized) {
                negative_score += entry.weight;
                *emotions.entry(*family).or_default() += entry.weight;
                matched_indicators.push(format!(
                    "{}: '{}' (-{})",
                    lexicon.name(),
                    entry.phrase,
                    entry.weight
                ));
            }
        }

        let modifiers = &self.lexicons.intensity_modifiers;
        let mut intensity_multiplier = 1.0;
        for entry in modifiers.matches(&normalized) {
            intensity_multiplier *= entry.weight;
            matched_indicators.push(format!(
                "{}: '{}' (x{})",
                modifiers.name(),
                entry.phrase,
                entry.weight
            ));
        }
        positive_score *= intensity_multiplier;
        negative_score *= intensity_multiplier;
        for weight in emotions.values_mut() {
            *weight *= intensity_multiplier;
        }

        let cues = &self.lexicons.context_indicators;
        let mut context_score = 0.0;
        for entry in cues.matches(&normalized) {
            context_score += entry.weight;
            matched_indicators.push(format!(
                "{}: '{}' ({:+})",
                cues.name(),
                entry.phrase,
                entry.weight
            ));
        }

        let net_score = positive_score - negative_score - context_score;
        let state = EmotionalState::from_score(net_score);
        let dominant_emotion = dominant_family(&emotions);

        debug!(
            positive = positive_score,
            negative = negative_score,
            net = net_score,
            state = state.as_str(),
            "Emotional message analyzed"
        );

        EmotionalAssessment {
            positive_score,
            negative_score,
            intensity_multiplier,
            context_score,
            net_score,
            state,
            emotions,
            dominant_emotion,
            matched_indicators,
            recommended_approach: state.recommended_approach().to_string(),
        }
    }

    /// Aggregate over user messages, oldest first.
    ///
    /// The newest [`EMOTION_RECENT_WINDOW`] messages weigh 1.0, older ones
    /// [`EMOTION_OLDER_WEIGHT`]. The overall state comes from the weighted
    /// positive and negative sums; the trend from per-message net scores.
    pub fn analyze_conversation(&self, messages: &[&str]) -> EmotionalJourney {
        if messages.is_empty() {
            return EmotionalJourney::neutral();
        }

        let assessments: Vec<EmotionalAssessment> =
            messages.iter().map(|m| self.analyze_message(m)).collect();
        let total = assessments.len();

        let mut positive_score = 0.0;
        let mut negative_score = 0.0;
        let mut emotions: BTreeMap<EmotionFamily, f64> = BTreeMap::new();
        let mut matched_indicators: Vec<String> = Vec::new();
        for (index, assessment) in assessments.iter().enumerate() {
            let weight = tiered_weight(index, total, EMOTION_RECENT_WINDOW, EMOTION_OLDER_WEIGHT);
            positive_score += assessment.positive_score * weight;
            negative_score += assessment.negative_score * weight;
            for (family, score) in &assessment.emotions {
                *emotions.entry(*family).or_default() += score * weight;
            }
            for indicator in &assessment.matched_indicators {
                if !matched_indicators.contains(indicator) {
                    matched_indicators.push(indicator.clone());
                }
            }
        }

        let net_score = positive_score - negative_score;
        let state = EmotionalState::from_score(net_score);
        let net_scores: Vec<f64> = assessments.iter().map(|a| a.net_score).collect();
        let trend = trend_of(&net_scores);

        debug!(
            net = net_score,
            state = state.as_str(),
            trend = trend.as_str(),
            messages = total,
            "Emotional journey analyzed"
        );

        EmotionalJourney {
            positive_score,
            negative_score,
            net_score,
            state,
            trend,
            dominant_emotion: dominant_family(&emotions),
            matched_indicators,
            recommended_approach: state.recommended_approach().to_string(),
            analyzed_count: total,
        }
    }
}

/// Mood direction from per-message net scores, oldest first.
///
/// Compares the mean of the newest [`TREND_RECENT_WINDOW`] scores with the
/// mean of everything before them. Short histories shrink the recent window
/// so at least one earlier score remains.
pub fn trend_of(net_scores: &[f64]) -> Trend {
    if net_scores.len() < 2 {
        return Trend::Stable;
    }

    let recent_len = TREND_RECENT_WINDOW.min(net_scores.len() - 1);
    let (earlier, recent) = net_scores.split_at(net_scores.len() - recent_len);
    let delta = mean(recent) - mean(earlier);

    if delta >= TREND_DELTA {
        Trend::Improving
    } else if delta <= -TREND_DELTA {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Family with the largest weight; ties go to the earlier-declared family
fn dominant_family(emotions: &BTreeMap<EmotionFamily, f64>) -> Option<EmotionFamily> {
    let mut best: Option<(EmotionFamily, f64)> = None;
    for (family, weight) in emotions {
        if *weight <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if *weight <= top => {}
            _ => best = Some((*family, *weight)),
        }
    }
    best.map(|(family, _)| family)
}
