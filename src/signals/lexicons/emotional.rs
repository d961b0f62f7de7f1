// src/signals/lexicons/emotional.rs
// Emotional valence phrase tables

use std::sync::LazyLock;

use crate::signals::emotional::EmotionFamily;
use crate::signals::lexicon::Lexicon;

/// Phrase tables used by the emotional state detector
#[derive(Debug)]
pub struct EmotionalLexicons {
    /// Positive emotion words, grouped by family
    pub positive: Vec<(EmotionFamily, Lexicon<f64>)>,
    /// Negative emotion words, grouped by family
    pub negative: Vec<(EmotionFamily, Lexicon<f64>)>,
    /// Multiplicative intensity factors
    pub intensity_modifiers: Lexicon<f64>,
    /// Temporal / progression cues. Subtracted from the net score, so a
    /// positive weight pulls the message toward negative.
    pub context_indicators: Lexicon<f64>,
}

pub static EMOTIONAL_LEXICONS: LazyLock<EmotionalLexicons> = LazyLock::new(|| EmotionalLexicons {
    positive: vec![
        (
            EmotionFamily::Joy,
            Lexicon::new(
                "positive emotion",
                &[
                    ("happy", 3.0),
                    ("excited", 3.0),
                    ("amazing", 3.0),
                    ("wonderful", 3.0),
                    ("joy", 3.0),
                    ("great", 2.0),
                    ("love", 2.0),
                    ("good", 1.0),
                ],
            ),
        ),
        (
            EmotionFamily::Gratitude,
            Lexicon::new(
                "positive emotion",
                &[("grateful", 3.0), ("thankful", 3.0), ("proud", 3.0), ("appreciate", 2.0)],
            ),
        ),
        (
            EmotionFamily::Calm,
            Lexicon::new(
                "positive emotion",
                &[("peaceful", 2.0), ("relaxed", 2.0), ("relieved", 2.0), ("calm", 2.0)],
            ),
        ),
        (
            EmotionFamily::Hope,
            Lexicon::new(
                "positive emotion",
                &[("hopeful", 3.0), ("optimistic", 3.0), ("motivated", 2.0), ("better", 2.0)],
            ),
        ),
    ],
    negative: vec![
        (
            EmotionFamily::Sadness,
            Lexicon::new(
                "negative emotion",
                &[
                    ("depressed", 4.0),
                    ("hopeless", 4.0),
                    ("miserable", 4.0),
                    ("worthless", 4.0),
                    ("crying", 3.0),
                    ("sad", 3.0),
                    ("terrible", 3.0),
                    ("awful", 3.0),
                    ("hurt", 2.0),
                    ("upset", 2.0),
                    ("bad", 1.0),
                ],
            ),
        ),
        (
            EmotionFamily::Anxiety,
            Lexicon::new(
                "negative emotion",
                &[
                    ("panic", 4.0),
                    ("anxious", 3.0),
                    ("scared", 3.0),
                    ("overwhelmed", 3.0),
                    ("stressed", 2.0),
                    ("worried", 2.0),
                    ("nervous", 2.0),
                ],
            ),
        ),
        (
            EmotionFamily::Anger,
            Lexicon::new(
                "negative emotion",
                &[("furious", 4.0), ("angry", 3.0), ("frustrated", 2.0), ("annoyed", 1.0)],
            ),
        ),
        (
            EmotionFamily::Loneliness,
            Lexicon::new(
                "negative emotion",
                &[("lonely", 3.0), ("isolated", 3.0), ("alone", 2.0), ("left out", 2.0)],
            ),
        ),
        (
            EmotionFamily::Exhaustion,
            Lexicon::new(
                "negative emotion",
                &[("exhausted", 3.0), ("drained", 3.0), ("burnt out", 3.0), ("tired", 1.0)],
            ),
        ),
    ],
    intensity_modifiers: Lexicon::new(
        "intensity modifier",
        &[
            ("extremely", 2.0),
            ("incredibly", 2.0),
            ("completely", 1.8),
            ("so much", 1.5),
            ("totally", 1.5),
            ("really", 1.3),
            ("somewhat", 0.8),
            ("kind of", 0.8),
            ("kinda", 0.8),
            ("a little", 0.7),
            ("a bit", 0.7),
            ("slightly", 0.7),
        ],
    ),
    context_indicators: Lexicon::new(
        "context cue",
        &[
            ("getting worse", 2.0),
            ("worse than", 1.5),
            ("all the time", 1.5),
            ("every day", 1.0),
            ("again", 1.0),
            ("still", 0.5),
            ("getting better", -2.0),
            ("improving", -2.0),
            ("for once", -1.0),
            ("finally", -1.0),
        ],
    ),
});
