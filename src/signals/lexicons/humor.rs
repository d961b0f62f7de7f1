// src/signals/lexicons/humor.rs
// Humor receptivity phrase tables

use std::sync::LazyLock;

use crate::signals::lexicon::Lexicon;

/// Phrase tables used by the humor detector
#[derive(Debug)]
pub struct HumorLexicons {
    /// Laughter, playfulness, joke talk
    pub engagement: Lexicon<i32>,
    /// Requests for a serious or formal register
    pub formality: Lexicon<i32>,
    /// Light topics that make humor more welcome
    pub context_amplifiers: Lexicon<i32>,
    /// Heavy topics; subtract from humor and add to formality
    pub context_inhibitors: Lexicon<i32>,
}

pub static HUMOR_LEXICONS: LazyLock<HumorLexicons> = LazyLock::new(|| HumorLexicons {
    engagement: Lexicon::new(
        "humor signal",
        &[
            ("lol", 4),
            ("haha", 4),
            ("hehe", 3),
            ("lmao", 5),
            ("rofl", 5),
            ("hilarious", 5),
            ("funny", 3),
            ("joke", 3),
            ("made me laugh", 4),
            ("😂", 5),
            ("🤣", 5),
            ("😆", 3),
            ("😄", 3),
            ("😜", 3),
            ("😉", 2),
        ],
    ),
    formality: Lexicon::new(
        "formality signal",
        &[
            ("be serious", 5),
            ("stop joking", 5),
            ("no jokes", 5),
            ("isn't funny", 4),
            ("not funny", 4),
            ("not in the mood", 4),
            ("serious question", 3),
            ("professional", 3),
            ("respectfully", 2),
            ("formal", 2),
        ],
    ),
    context_amplifiers: Lexicon::new(
        "light topic",
        &[
            ("birthday", 2),
            ("vacation", 2),
            ("party", 2),
            ("meme", 2),
            ("weekend", 1),
            ("movie", 1),
            ("video game", 1),
            ("my dog", 1),
            ("my cat", 1),
        ],
    ),
    context_inhibitors: Lexicon::new(
        "heavy topic",
        &[
            ("funeral", 5),
            ("passed away", 5),
            ("grief", 4),
            ("cancer", 4),
            ("abuse", 4),
            ("died", 4),
            ("diagnosis", 3),
            ("hospital", 3),
            ("divorce", 3),
            ("lost my job", 3),
            ("trauma", 3),
        ],
    ),
});
