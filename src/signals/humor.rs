// src/signals/humor.rs
// Humor receptivity detection for single messages and conversation histories

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::history::{tiered_weight, truncate_weighted};
use super::lexicon::{Lexicon, ThresholdTable, is_blank, normalize};
use super::lexicons::{HUMOR_LEXICONS, HumorLexicons};

/// Newest user messages weighted at full strength
pub const HUMOR_RECENT_WINDOW: usize = 3;

/// Weight of user messages older than the recent window
pub const HUMOR_OLDER_WEIGHT: f64 = 0.6;

/// Messages shorter than this many characters count as quick, casual exchanges
pub const SHORT_MESSAGE_CHARS: usize = 10;

/// Ordinal receptivity to humor, lowest first
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
pub enum HumorLevel {
    #[default]
    Unknown = 0,
    Avoid = 1,
    Minimal = 2,
    Light = 3,
    Moderate = 4,
    High = 5,
}

/// Formality strong enough to override any engagement
const FORMALITY_GATES: ThresholdTable<i32, HumorLevel> = ThresholdTable::new(
    &[(8, HumorLevel::Avoid), (5, HumorLevel::Minimal)],
    HumorLevel::Unknown,
);

pub const HUMOR_THRESHOLDS: ThresholdTable<i32, HumorLevel> = ThresholdTable::new(
    &[
        (10, HumorLevel::High),
        (6, HumorLevel::Moderate),
        (3, HumorLevel::Light),
        (1, HumorLevel::Minimal),
    ],
    HumorLevel::Unknown,
);

/// Applies only when there is no humor signal at all
const FORMALITY_FALLBACK: ThresholdTable<i32, HumorLevel> = ThresholdTable::new(
    &[(3, HumorLevel::Minimal), (1, HumorLevel::Light)],
    HumorLevel::Unknown,
);

impl HumorLevel {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Level from adjusted humor/formality scores, first rule wins.
    ///
    /// `message_length` enables the short-message shortcut; pass `None` when
    /// aggregating, where no single length applies.
    pub fn classify(humor: i32, formality: i32, message_length: Option<usize>) -> Self {
        if let Some(level) = FORMALITY_GATES.find(formality) {
            return level;
        }
        if let Some(length) = message_length
            && length > 0
            && length < SHORT_MESSAGE_CHARS
            && humor > 0
        {
            return HumorLevel::Light;
        }
        HUMOR_THRESHOLDS
            .find(humor)
            .unwrap_or_else(|| FORMALITY_FALLBACK.level_for(formality))
    }

    /// Guidance for a user in a good mood
    pub fn approach(&self) -> &'static str {
        match self {
            HumorLevel::Unknown => {
                "Humor preference unknown: start conservative and follow their lead."
            }
            HumorLevel::Avoid => "Avoid humor entirely; they want a serious conversation.",
            HumorLevel::Minimal => "Use humor sparingly, a light touch only if it fits.",
            HumorLevel::Light => "Light, warm humor is welcome; share in their good mood.",
            HumorLevel::Moderate => {
                "They enjoy playful banter; match their humor while staying supportive."
            }
            HumorLevel::High => {
                "They are in a playful mood; feel free to be funny and celebrate with them."
            }
        }
    }

    /// Guidance when their mood is even
    pub fn neutral_approach(&self) -> &'static str {
        match self {
            HumorLevel::Unknown => {
                "Humor preference unknown: keep any levity gentle and conservative."
            }
            HumorLevel::Avoid => "Keep the tone serious; they have asked for no jokes.",
            HumorLevel::Minimal => {
                "Stay mostly sincere; a brief light remark is fine if they invite it."
            }
            HumorLevel::Light => "Gentle humor is okay if it fits naturally.",
            HumorLevel::Moderate => "Some playful humor is fine, but keep the focus on them.",
            HumorLevel::High => {
                "They enjoy humor; be playful but check in on how they are really doing."
            }
        }
    }
}

/// Humor analysis of one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumorAssessment {
    /// Engagement after context adjustment, never negative
    pub humor_score: i32,
    /// Formality plus heavy-topic weight
    pub formality_score: i32,
    pub level: HumorLevel,
    pub matched_indicators: Vec<String>,
    pub recommended_approach: String,
    /// Length in characters of the trimmed message
    pub message_length: usize,
}

impl HumorAssessment {
    fn neutral() -> Self {
        Self {
            humor_score: 0,
            formality_score: 0,
            level: HumorLevel::Unknown,
            matched_indicators: Vec::new(),
            recommended_approach: HumorLevel::Unknown.approach().to_string(),
            message_length: 0,
        }
    }
}

/// Humor receptivity aggregated over the user messages of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumorConversationAssessment {
    pub humor_score: i32,
    pub formality_score: i32,
    pub level: HumorLevel,
    pub matched_indicators: Vec<String>,
    pub recommended_approach: String,
    /// Mean length in characters of the analyzed messages
    pub average_message_length: f64,
    pub analyzed_count: usize,
}

impl HumorConversationAssessment {
    fn neutral() -> Self {
        Self {
            humor_score: 0,
            formality_score: 0,
            level: HumorLevel::Unknown,
            matched_indicators: Vec::new(),
            recommended_approach: HumorLevel::Unknown.approach().to_string(),
            average_message_length: 0.0,
            analyzed_count: 0,
        }
    }
}

impl Default for HumorConversationAssessment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Scores humor receptivity against the humor lexicons
#[derive(Debug, Clone, Copy)]
pub struct HumorDetector {
    lexicons: &'static HumorLexicons,
}

impl Default for HumorDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HumorDetector {
    pub fn new() -> Self {
        Self {
            lexicons: &HUMOR_LEXICONS,
        }
    }

    /// Analyze a single message. Blank text yields `{level: Unknown}`.
    pub fn analyze_message(&self, text: &str) -> HumorAssessment {
        if is_blank(text) {
            return HumorAssessment::neutral();
        }

        let normalized = normalize(text);
        let mut matched_indicators = Vec::new();
        let mut sum = |lexicon: &Lexicon<i32>| -> i32 {
            lexicon
                .matches(&normalized)
                .map(|entry| {
                    matched_indicators.push(format!(
                        "{}: '{}' ({:+})",
                        lexicon.name(),
                        entry.phrase,
                        entry.weight
                    ));
                    entry.weight
                })
                .sum()
        };

        let humor = sum(&self.lexicons.engagement);
        let formality = sum(&self.lexicons.formality);
        let amplifier = sum(&self.lexicons.context_amplifiers);
        let inhibitor = sum(&self.lexicons.context_inhibitors);

        let humor_score = (humor + amplifier - inhibitor).max(0);
        let formality_score = formality + inhibitor;
        let message_length = text.trim().chars().count();
        let level = HumorLevel::classify(humor_score, formality_score, Some(message_length));

        debug!(
            humor = humor_score,
            formality = formality_score,
            level = level.as_str(),
            "Humor message analyzed"
        );

        HumorAssessment {
            humor_score,
            formality_score,
            level,
            matched_indicators,
            recommended_approach: level.approach().to_string(),
            message_length,
        }
    }

    /// Aggregate over user messages, oldest first.
    ///
    /// The newest [`HUMOR_RECENT_WINDOW`] messages weigh 1.0, older ones
    /// [`HUMOR_OLDER_WEIGHT`]; each weighted term is truncated before summing.
    pub fn analyze_conversation(&self, messages: &[&str]) -> HumorConversationAssessment {
        if messages.is_empty() {
            return HumorConversationAssessment::neutral();
        }

        let assessments: Vec<HumorAssessment> =
            messages.iter().map(|m| self.analyze_message(m)).collect();
        let total = assessments.len();

        let mut humor_score = 0;
        let mut formality_score = 0;
        let mut total_length = 0usize;
        let mut matched_indicators: Vec<String> = Vec::new();
        for (index, assessment) in assessments.iter().enumerate() {
            let weight = tiered_weight(index, total, HUMOR_RECENT_WINDOW, HUMOR_OLDER_WEIGHT);
            humor_score += truncate_weighted(assessment.humor_score, weight);
            formality_score += truncate_weighted(assessment.formality_score, weight);
            total_length += assessment.message_length;
            for indicator in &assessment.matched_indicators {
                if !matched_indicators.contains(indicator) {
                    matched_indicators.push(indicator.clone());
                }
            }
        }

        let level = HumorLevel::classify(humor_score, formality_score, None);
        debug!(
            humor = humor_score,
            formality = formality_score,
            level = level.as_str(),
            messages = total,
            "Humor conversation analyzed"
        );

        HumorConversationAssessment {
            humor_score,
            formality_score,
            level,
            matched_indicators,
            recommended_approach: level.approach().to_string(),
            average_message_length: total_length as f64 / total as f64,
            analyzed_count: total,
        }
    }
}
