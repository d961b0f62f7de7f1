// src/signals/history.rs
// Conversation turns and positional recency weighting

use serde::{Deserialize, Serialize};

/// Who sent a conversation turn
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One turn of a conversation, oldest first in any history slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Texts of the user turns, in conversation order
pub fn user_messages(history: &[ConversationTurn]) -> Vec<&str> {
    history
        .iter()
        .filter(|turn| turn.is_user())
        .map(|turn| turn.text.as_str())
        .collect()
}

/// Linear ramp: message `index` of `total` weighs `(index + 1) / total`,
/// so the newest message weighs 1.0.
pub fn linear_weight(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 / total as f64
}

/// Two-tier weighting: the newest `recent_window` messages weigh 1.0, older ones `older_weight`.
pub fn tiered_weight(index: usize, total: usize, recent_window: usize, older_weight: f64) -> f64 {
    if index >= total.saturating_sub(recent_window) {
        1.0
    } else {
        older_weight
    }
}

/// Weighted score truncated toward zero.
///
/// Aggregates sum these truncated terms, not the full-precision products;
/// borderline conversations land on a different level otherwise.
pub fn truncate_weighted(score: i32, weight: f64) -> i32 {
    (f64::from(score) * weight).trunc() as i32
}
