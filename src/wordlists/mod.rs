//! Word sources for answer selection
//!
//! A word source is either a flat list of answers or a dictionary mapping each
//! answer to a descriptive hint. The slang dictionary is embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Answer;
use rustc_hash::FxHashSet;
use std::fmt;

/// One candidate answer with its optional description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub answer: Answer,
    pub hint: Option<String>,
}

/// Error type for unusable word sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    Empty,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word source contains no valid answers"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Candidate answers, unique by answer text, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSource {
    entries: Vec<Entry>,
}

impl WordSource {
    /// Build a source from entries, dropping later duplicates of the same answer
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut seen = FxHashSet::default();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.answer.text().to_string()))
            .collect();
        Self { entries }
    }

    /// Flat list of answers without hints, skipping invalid ones
    ///
    /// # Examples
    /// ```
    /// use brainrot_wordle::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(&["crane", "no cap", "l33t"]);
    /// assert_eq!(source.len(), 2);
    /// assert!(!source.has_hints());
    /// ```
    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self::from_entries(words.iter().filter_map(|&w| {
            Answer::new(w).ok().map(|answer| Entry { answer, hint: None })
        }))
    }

    /// Answer to hint mapping, skipping invalid answers
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::from_entries(pairs.iter().filter_map(|&(w, hint)| {
            Answer::new(w).ok().map(|answer| Entry {
                answer,
                hint: Some(hint.to_string()),
            })
        }))
    }

    /// The built-in slang dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(DICTIONARY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// True if any entry carries a description
    #[must_use]
    pub fn has_hints(&self) -> bool {
        self.entries.iter().any(|e| e.hint.is_some())
    }

    /// Description for an answer, matched case-insensitively
    #[must_use]
    pub fn hint_for(&self, answer: &str) -> Option<&str> {
        let wanted = answer.trim().to_ascii_uppercase();
        self.entries
            .iter()
            .find(|e| e.answer.text() == wanted)
            .and_then(|e| e.hint.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_answers_are_valid() {
        for &(word, hint) in DICTIONARY {
            let answer = Answer::new(word).unwrap_or_else(|e| panic!("'{word}': {e}"));
            assert_eq!(answer.text(), word, "'{word}' is not normalized");
            assert!(!hint.is_empty(), "'{word}' has an empty hint");
        }
    }

    #[test]
    fn embedded_source_keeps_every_entry() {
        let source = WordSource::embedded();
        assert_eq!(source.len(), DICTIONARY_COUNT);
        assert!(source.has_hints());
    }

    #[test]
    fn from_entries_drops_duplicates() {
        let source = WordSource::from_pairs(&[("rizz", "first"), ("RIZZ", "second"), ("aura", "x")]);
        assert_eq!(source.len(), 2);
        assert_eq!(source.hint_for("rizz"), Some("first"));
    }

    #[test]
    fn hint_for_missing_answer() {
        let source = WordSource::from_words(&["crane"]);
        assert_eq!(source.hint_for("CRANE"), None);
        assert_eq!(source.hint_for("slate"), None);
    }

    #[test]
    fn empty_source() {
        let source = WordSource::from_words(&[]);
        assert!(source.is_empty());
        assert!(source.get(0).is_none());
    }
}
