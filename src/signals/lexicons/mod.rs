// src/signals/lexicons/mod.rs
// Process-wide phrase tables, built once on first use and never written again

mod crisis;
mod emotional;
mod humor;

pub use crisis::{CRISIS_LEXICONS, CrisisLexicons};
pub use emotional::{EMOTIONAL_LEXICONS, EmotionalLexicons};
pub use humor::{HUMOR_LEXICONS, HumorLexicons};
