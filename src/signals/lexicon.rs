// src/signals/lexicon.rs
// Weighted phrase tables and ordered score -> level threshold tables

/// A single weighted phrase.
///
/// Phrases are stored normalized (see [`normalize`]) and match by substring
/// containment against normalized message text.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordEntry<W> {
    pub phrase: String,
    pub weight: W,
}

/// An immutable set of weighted phrases for one detector category.
#[derive(Debug, Clone)]
pub struct Lexicon<W> {
    name: &'static str,
    entries: Vec<KeywordEntry<W>>,
}

impl<W: Copy> Lexicon<W> {
    /// Build a lexicon from a static `(phrase, weight)` table
    pub fn new(name: &'static str, table: &[(&str, W)]) -> Self {
        let entries = table
            .iter()
            .map(|(phrase, weight)| KeywordEntry {
                phrase: normalize(phrase),
                weight: *weight,
            })
            .collect();
        Self { name, entries }
    }

    /// Category name, used in explainability strings
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry<W>> {
        self.entries.iter()
    }

    /// Entries whose phrase occurs in `normalized`.
    ///
    /// `normalized` must already have gone through [`normalize`].
    pub fn matches<'a>(
        &'a self,
        normalized: &'a str,
    ) -> impl Iterator<Item = &'a KeywordEntry<W>> + 'a {
        self.entries
            .iter()
            .filter(move |entry| normalized.contains(entry.phrase.as_str()))
    }

    /// True if any phrase occurs in `normalized`
    pub fn contains_any(&self, normalized: &str) -> bool {
        self.matches(normalized).next().is_some()
    }
}

impl Lexicon<()> {
    /// Build an unweighted phrase set
    pub fn phrases(name: &'static str, phrases: &[&str]) -> Self {
        let entries = phrases
            .iter()
            .map(|phrase| KeywordEntry {
                phrase: normalize(phrase),
                weight: (),
            })
            .collect();
        Self { name, entries }
    }
}

/// Ordered `(min_score, level)` rows evaluated top-down; the first row whose
/// minimum the score reaches wins, otherwise `floor` applies.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<S: 'static, L: 'static> {
    rows: &'static [(S, L)],
    floor: L,
}

impl<S: PartialOrd + Copy, L: Copy> ThresholdTable<S, L> {
    pub const fn new(rows: &'static [(S, L)], floor: L) -> Self {
        Self { rows, floor }
    }

    /// First matching row, if any
    pub fn find(&self, score: S) -> Option<L> {
        self.rows
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, level)| *level)
    }

    /// Level for `score`. Total: anything below every row (NaN included) maps to the floor.
    pub fn level_for(&self, score: S) -> L {
        self.find(score).unwrap_or(self.floor)
    }

    pub fn rows(&self) -> &'static [(S, L)] {
        self.rows
    }

    pub fn floor(&self) -> L {
        self.floor
    }
}

/// Normalize text for phrase matching: lowercase, typographic apostrophes folded to `'`
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(&['\u{2019}', '\u{2018}'][..], "'")
}

/// Null-equivalent input: empty or whitespace only
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Band {
        Low,
        Mid,
        High,
    }

    const BANDS: ThresholdTable<i32, Band> =
        ThresholdTable::new(&[(10, Band::High), (5, Band::Mid)], Band::Low);

    #[test]
    fn test_matches_substring_case_insensitive() {
        let lexicon = Lexicon::new("test", &[("Kill Myself", 5), ("lol", 4)]);
        let text = normalize("I want to KILL MYSELF");
        let matched: Vec<_> = lexicon.matches(&text).map(|e| e.phrase.as_str()).collect();
        assert_eq!(matched, vec!["kill myself"]);
    }

    #[test]
    fn test_normalize_folds_curly_apostrophes() {
        assert_eq!(normalize("This ISN\u{2019}T funny"), "this isn't funny");
        assert_eq!(normalize("\u{2018}quoted\u{2019}"), "'quoted'");
    }

    #[test]
    fn test_contains_any_on_empty_text() {
        let lexicon = Lexicon::phrases("seriousness", &["be serious"]);
        assert!(!lexicon.contains_any(""));
        assert!(lexicon.contains_any("please be serious"));
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(BANDS.level_for(10), Band::High);
        assert_eq!(BANDS.level_for(9), Band::Mid);
        assert_eq!(BANDS.level_for(5), Band::Mid);
        assert_eq!(BANDS.level_for(4), Band::Low);
        assert_eq!(BANDS.level_for(i32::MIN), Band::Low);
        assert_eq!(BANDS.find(4), None);
    }

    #[test]
    fn test_nan_maps_to_floor() {
        const FLOAT_BANDS: ThresholdTable<f64, Band> =
            ThresholdTable::new(&[(1.0, Band::High)], Band::Low);
        assert_eq!(FLOAT_BANDS.level_for(f64::NAN), Band::Low);
        assert_eq!(FLOAT_BANDS.level_for(1.0), Band::High);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" 😂 "));
    }
}
