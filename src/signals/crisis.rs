// src/signals/crisis.rs
// Crisis risk detection for single messages and conversation histories

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::{linear_weight, truncate_weighted};
use super::lexicon::{ThresholdTable, is_blank, normalize};
use super::lexicons::{CRISIS_LEXICONS, CrisisLexicons};

/// Flat bonus added when recent messages show an escalating pattern
pub const ESCALATION_BONUS: i32 = 2;

/// Number of trailing messages inspected for escalation
pub const ESCALATION_WINDOW: usize = 3;

/// Ordinal crisis risk, lowest first
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
pub enum CrisisLevel {
    #[default]
    None = 0,
    Mild = 1,
    Low = 2,
    Medium = 3,
    High = 4,
}

pub const CRISIS_THRESHOLDS: ThresholdTable<i32, CrisisLevel> = ThresholdTable::new(
    &[
        (8, CrisisLevel::High),
        (5, CrisisLevel::Medium),
        (3, CrisisLevel::Low),
        (1, CrisisLevel::Mild),
    ],
    CrisisLevel::None,
);

impl CrisisLevel {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn from_score(score: i32) -> Self {
        CRISIS_THRESHOLDS.level_for(score)
    }

    /// Fixed response guidance for this level
    pub fn recommended_response(&self) -> &'static str {
        match self {
            CrisisLevel::None => "No crisis indicators. Respond naturally.",
            CrisisLevel::Mild => {
                "Mild distress signals. Check in gently about how they are coping."
            }
            CrisisLevel::Low => {
                "Some distress signals. Be attentive, ask how they are doing and mention that support is available."
            }
            CrisisLevel::Medium => {
                "Significant risk signals. Respond with calm, serious care, ask directly about their safety and encourage reaching out to a crisis line or someone they trust."
            }
            CrisisLevel::High => {
                "Severe risk signals. Prioritize their safety: express direct, compassionate concern, urge contacting emergency services or a crisis line (call or text 988 in the US) now, and stay engaged."
            }
        }
    }
}

/// Crisis analysis of one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisAssessment {
    pub score: i32,
    pub level: CrisisLevel,
    pub matched_indicators: Vec<String>,
    /// The user asked to be taken seriously, or the level is Medium or above
    pub needs_professional_tone: bool,
    /// True if a seriousness-request phrase matched
    pub seriousness_requested: bool,
    pub recommended_approach: String,
}

impl CrisisAssessment {
    fn neutral() -> Self {
        Self {
            score: 0,
            level: CrisisLevel::None,
            matched_indicators: Vec::new(),
            needs_professional_tone: false,
            seriousness_requested: false,
            recommended_approach: CrisisLevel::None.recommended_response().to_string(),
        }
    }
}

/// Crisis analysis aggregated over the user messages of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisConversationAssessment {
    pub score: i32,
    pub level: CrisisLevel,
    pub matched_indicators: Vec<String>,
    pub needs_professional_tone: bool,
    pub recommended_approach: String,
    /// Escalation bonus was applied
    pub escalating: bool,
    /// Per-message scores of the trailing escalation window, oldest first
    pub recent_scores: Vec<i32>,
    pub analyzed_count: usize,
}

impl CrisisConversationAssessment {
    fn neutral() -> Self {
        Self {
            score: 0,
            level: CrisisLevel::None,
            matched_indicators: Vec::new(),
            needs_professional_tone: false,
            recommended_approach: CrisisLevel::None.recommended_response().to_string(),
            escalating: false,
            recent_scores: Vec::new(),
            analyzed_count: 0,
        }
    }
}

impl Default for CrisisConversationAssessment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Scores crisis risk against the crisis lexicons
#[derive(Debug, Clone, Copy)]
pub struct CrisisDetector {
    lexicons: &'static CrisisLexicons,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    pub fn new() -> Self {
        Self {
            lexicons: &CRISIS_LEXICONS,
        }
    }

    /// Analyze a single message. Blank text yields `{level: None, score: 0}`.
    pub fn analyze_message(&self, text: &str) -> CrisisAssessment {
        if is_blank(text) {
            return CrisisAssessment::neutral();
        }

        let normalized = normalize(text);
        let mut score = 0;
        let mut matched_indicators = Vec::new();

        for lexicon in [
            &self.lexicons.primary,
            &self.lexicons.amplifiers,
            &self.lexicons.positive_indicators,
        ] {
            for entry in lexicon.matches(&normalized) {
                score += entry.weight;
                matched_indicators.push(format!(
                    "{}: '{}' ({:+})",
                    lexicon.name(),
                    entry.phrase,
                    entry.weight
                ));
            }
        }

        let seriousness_requested = self.lexicons.seriousness_requests.contains_any(&normalized);
        if seriousness_requested {
            matched_indicators.push("asked to be taken seriously".to_string());
        }

        let level = CrisisLevel::from_score(score);
        if level >= CrisisLevel::Medium {
            info!(score, level = level.as_str(), "Crisis signal in message");
        } else {
            debug!(score, level = level.as_str(), "Crisis message analyzed");
        }

        CrisisAssessment {
            score,
            level,
            matched_indicators,
            needs_professional_tone: seriousness_requested || level >= CrisisLevel::Medium,
            seriousness_requested,
            recommended_approach: level.recommended_response().to_string(),
        }
    }

    /// Aggregate over user messages, oldest first.
    ///
    /// Message `i` of `n` contributes `trunc(score * (i + 1) / n)`; an
    /// escalating tail adds [`ESCALATION_BONUS`]. Empty input is neutral.
    pub fn analyze_conversation(&self, messages: &[&str]) -> CrisisConversationAssessment {
        if messages.is_empty() {
            return CrisisConversationAssessment::neutral();
        }

        let assessments: Vec<CrisisAssessment> =
            messages.iter().map(|m| self.analyze_message(m)).collect();
        let total = assessments.len();

        let mut score = 0;
        let mut matched_indicators: Vec<String> = Vec::new();
        let mut seriousness_requested = false;
        for (index, assessment) in assessments.iter().enumerate() {
            score += truncate_weighted(assessment.score, linear_weight(index, total));
            seriousness_requested |= assessment.seriousness_requested;
            for indicator in &assessment.matched_indicators {
                if !matched_indicators.contains(indicator) {
                    matched_indicators.push(indicator.clone());
                }
            }
        }

        let recent_scores: Vec<i32> = assessments[total.saturating_sub(ESCALATION_WINDOW)..]
            .iter()
            .map(|a| a.score)
            .collect();
        let escalating = is_escalating(&recent_scores);
        if escalating {
            score += ESCALATION_BONUS;
            matched_indicators.push(format!(
                "escalating pattern across recent messages ({:+})",
                ESCALATION_BONUS
            ));
        }

        let level = CrisisLevel::from_score(score);
        if level >= CrisisLevel::Medium {
            info!(
                score,
                level = level.as_str(),
                escalating,
                messages = total,
                "Crisis risk in conversation"
            );
        } else {
            debug!(
                score,
                level = level.as_str(),
                escalating,
                messages = total,
                "Crisis conversation analyzed"
            );
        }

        CrisisConversationAssessment {
            score,
            level,
            matched_indicators,
            needs_professional_tone: seriousness_requested || level >= CrisisLevel::Medium,
            recommended_approach: level.recommended_response().to_string(),
            escalating,
            recent_scores,
            analyzed_count: total,
        }
    }
}

/// Escalation test over the trailing window of per-message scores.
///
/// Strict increases must reach `transitions / 2` (floor division), so a
/// two-score window always escalates and a three-score window needs one rise.
pub fn is_escalating(recent_scores: &[i32]) -> bool {
    if recent_scores.len() < 2 {
        return false;
    }

    let transitions = recent_scores.len() - 1;
    let increases = recent_scores.windows(2).filter(|pair| pair[1] > pair[0]).count();
    increases >= transitions / 2
}
