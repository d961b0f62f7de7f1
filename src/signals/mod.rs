// src/signals/mod.rs
// Conversational signal analysis: crisis risk, humor receptivity and
// emotional valence, fused into one recommendation for the dialogue agent.
//
// Data flows one way: text -> per-message analyzers -> conversation
// aggregation -> synthesis. Every operation is a pure function of its input
// plus the process-wide lexicons.

pub mod crisis;
pub mod emotional;
pub mod history;
pub mod humor;
pub mod lexicon;
pub mod lexicons;
pub mod synthesis;

pub use crisis::{CrisisAssessment, CrisisConversationAssessment, CrisisDetector, CrisisLevel};
pub use emotional::{
    EmotionFamily, EmotionalAssessment, EmotionalJourney, EmotionalState, EmotionalStateDetector,
    Trend,
};
pub use history::{ConversationTurn, Sender, user_messages};
pub use humor::{HumorAssessment, HumorConversationAssessment, HumorDetector, HumorLevel};
pub use lexicon::{KeywordEntry, Lexicon, ThresholdTable};
pub use synthesis::{
    IntegratedRecommendation, MessageSignals, ResponseFlags, SignalEngine,
    synthesize_recommendation,
};
