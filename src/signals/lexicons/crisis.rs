// src/signals/lexicons/crisis.rs
// Crisis risk phrase tables

use std::sync::LazyLock;

use crate::signals::lexicon::Lexicon;

/// Phrase tables used by the crisis detector
#[derive(Debug)]
pub struct CrisisLexicons {
    /// Direct risk language, weighted by severity
    pub primary: Lexicon<i32>,
    /// Immediacy and planning cues that add to the risk score
    pub amplifiers: Lexicon<i32>,
    /// Protective factors; weights are negative
    pub positive_indicators: Lexicon<i32>,
    /// The user asking to be taken seriously
    pub seriousness_requests: Lexicon<()>,
}

pub static CRISIS_LEXICONS: LazyLock<CrisisLexicons> = LazyLock::new(|| CrisisLexicons {
    primary: Lexicon::new(
        "crisis keyword",
        &[
            // severe (5)
            ("kill myself", 5),
            ("killing myself", 5),
            ("end my life", 5),
            ("take my own life", 5),
            ("suicide", 5),
            ("suicidal", 5),
            ("want to die", 5),
            ("better off dead", 5),
            ("no reason to live", 5),
            ("end it all", 5),
            // serious (3)
            ("hurt myself", 3),
            ("self harm", 3),
            ("self-harm", 3),
            ("cutting myself", 3),
            ("hopeless", 3),
            ("can't go on", 3),
            ("no way out", 3),
            ("worthless", 3),
            ("burden to everyone", 3),
            ("nobody would care", 3),
            // distress (1-2)
            ("depressed", 2),
            ("can't cope", 2),
            ("empty inside", 2),
            ("falling apart", 2),
            ("giving up", 2),
            ("overwhelmed", 1),
            ("so alone", 1),
            ("numb", 1),
            ("exhausted", 1),
        ],
    ),
    amplifiers: Lexicon::new(
        "amplifier",
        &[
            ("i have a plan", 3),
            ("have the pills", 3),
            ("goodbye forever", 3),
            ("wrote a note", 2),
            ("no one would miss me", 2),
            ("can't take it anymore", 2),
            ("nothing matters", 2),
            ("tonight", 1),
            ("right now", 1),
            ("every single day", 1),
        ],
    ),
    positive_indicators: Lexicon::new(
        "protective factor",
        &[
            ("just kidding", -3),
            ("feeling better", -2),
            ("getting help", -2),
            ("talked to my therapist", -2),
            ("not serious", -2),
            ("hopeful", -2),
            ("my therapist", -1),
            ("support group", -1),
            ("reached out", -1),
        ],
    ),
    seriousness_requests: Lexicon::phrases(
        "seriousness request",
        &[
            "be serious",
            "i'm serious",
            "i am serious",
            "this is serious",
            "not joking",
            "not a joke",
            "no jokes",
            "stop joking",
            "take me seriously",
        ],
    ),
});
