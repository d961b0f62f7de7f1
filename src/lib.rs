// src/lib.rs
// Attune - conversational signal analysis for support chat

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod signals;

pub use error::{AttuneError, Result};
pub use signals::{
    ConversationTurn, IntegratedRecommendation, MessageSignals, ResponseFlags, SignalEngine,
};
