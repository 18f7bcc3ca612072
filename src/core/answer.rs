//! Hidden answer representation
//!
//! An Answer stores an uppercase word or phrase along with the positions of its
//! guessable (non-space) slots.

use rustc_hash::FxHashSet;
use std::fmt;

/// A validated Wordle answer, possibly a multi-word phrase
///
/// Spaces are part of the answer text but are never guessed; the board fills
/// them in automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
    slots: Vec<usize>,
    letters: FxHashSet<u8>,
}

/// Error type for invalid answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Answer must contain at least one letter"),
            Self::NonAscii => write!(f, "Answer must contain only ASCII characters"),
            Self::InvalidCharacters => {
                write!(f, "Answer may only contain letters and spaces")
            }
        }
    }
}

impl std::error::Error for AnswerError {}

impl Answer {
    /// Create a new Answer from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `AnswerError` if:
    /// - No letters remain after trimming
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters and spaces
    ///
    /// # Examples
    /// ```
    /// use brainrot_wordle::core::Answer;
    ///
    /// let answer = Answer::new("fanum tax").unwrap();
    /// assert_eq!(answer.text(), "FANUM TAX");
    /// assert_eq!(answer.target_len(), 8);
    ///
    /// assert!(Answer::new("   ").is_err());
    /// assert!(Answer::new("l33t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, AnswerError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(AnswerError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase() || b == b' ') {
            return Err(AnswerError::InvalidCharacters);
        }

        let slots: Vec<usize> = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b != b' ')
            .map(|(i, _)| i)
            .collect();

        if slots.is_empty() {
            return Err(AnswerError::Empty);
        }

        let letters = text.bytes().filter(|&b| b != b' ').collect();

        Ok(Self {
            text,
            slots,
            letters,
        })
    }

    /// Get the answer as a string slice, spaces included
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Full length of the answer, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a valid answer has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of guessable (non-space) positions
    #[inline]
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.slots.len()
    }

    /// Get the byte at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check whether a position holds a space
    #[inline]
    #[must_use]
    pub fn is_space(&self, position: usize) -> bool {
        self.text.as_bytes().get(position) == Some(&b' ')
    }

    /// Check if the answer contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Board position of the `n`th guessable slot
    #[inline]
    #[must_use]
    pub fn slot(&self, n: usize) -> Option<usize> {
        self.slots.get(n).copied()
    }

    /// Letter expected at the `n`th guessable slot
    #[must_use]
    pub fn slot_letter(&self, n: usize) -> Option<char> {
        self.slot(n).map(|pos| char::from(self.char_at(pos)))
    }

    /// Rebuild a full-length row from the guessable letters of an attempt
    ///
    /// Attempt characters fill the non-space positions in order and spaces are
    /// kept where the answer has them. Returns `None` unless the attempt has
    /// exactly `target_len()` characters.
    ///
    /// # Examples
    /// ```
    /// use brainrot_wordle::core::Answer;
    ///
    /// let answer = Answer::new("NO CAP").unwrap();
    /// assert_eq!(answer.interleave("NOCAP").as_deref(), Some("NO CAP"));
    /// assert_eq!(answer.interleave("NOCA"), None);
    /// ```
    #[must_use]
    pub fn interleave(&self, attempt: &str) -> Option<String> {
        if attempt.chars().count() != self.target_len() {
            return None;
        }

        let mut letters = attempt.chars();
        let row = self
            .text
            .bytes()
            .map(|b| {
                if b == b' ' {
                    Some(' ')
                } else {
                    letters.next()
                }
            })
            .collect::<Option<String>>()?;

        Some(row)
    }

    /// Guessable letters of a row, with the answer's space positions removed
    #[must_use]
    pub fn strip_spaces(&self, row: &str) -> String {
        row.chars()
            .enumerate()
            .filter(|&(i, _)| !self.is_space(i))
            .map(|(_, c)| c)
            .collect()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_creation_valid() {
        let answer = Answer::new("crane").unwrap();
        assert_eq!(answer.text(), "CRANE");
        assert_eq!(answer.len(), 5);
        assert_eq!(answer.target_len(), 5);
    }

    #[test]
    fn answer_creation_trims_and_uppercases() {
        let answer = Answer::new("  No Cap \n").unwrap();
        assert_eq!(answer.text(), "NO CAP");
        assert_eq!(answer.len(), 6);
        assert_eq!(answer.target_len(), 5);
    }

    #[test]
    fn answer_creation_invalid() {
        assert_eq!(Answer::new(""), Err(AnswerError::Empty));
        assert_eq!(Answer::new("    "), Err(AnswerError::Empty));
        assert_eq!(Answer::new("caf\u{e9}"), Err(AnswerError::NonAscii));
        assert_eq!(Answer::new("rizz!"), Err(AnswerError::InvalidCharacters));
        assert_eq!(Answer::new("no\tcap"), Err(AnswerError::InvalidCharacters));
    }

    #[test]
    fn answer_slots_skip_spaces() {
        let answer = Answer::new("BOMBO CLAUT").unwrap();
        assert_eq!(answer.len(), 11);
        assert_eq!(answer.target_len(), 10);
        assert_eq!(answer.slot(4), Some(4));
        assert_eq!(answer.slot(5), Some(6));
        assert_eq!(answer.slot(10), None);
        assert_eq!(answer.slot_letter(5), Some('C'));
        assert!(answer.is_space(5));
        assert!(!answer.is_space(4));
        assert!(!answer.is_space(99));
    }

    #[test]
    fn answer_has_letter_ignores_spaces() {
        let answer = Answer::new("FR FR").unwrap();
        assert!(answer.has_letter(b'F'));
        assert!(answer.has_letter(b'R'));
        assert!(!answer.has_letter(b' '));
        assert!(!answer.has_letter(b'Z'));
    }

    #[test]
    fn interleave_preserves_space_positions() {
        let answer = Answer::new("BOMBO CLAUT").unwrap();
        let row = answer.interleave("BOMBOCLAUT").unwrap();
        assert_eq!(row, "BOMBO CLAUT");
        assert_eq!(row.len(), 11);
        assert_eq!(row.as_bytes()[5], b' ');
    }

    #[test]
    fn interleave_rejects_wrong_length() {
        let answer = Answer::new("VIBE CHECK").unwrap();
        assert_eq!(answer.interleave("VIBECHEC"), None);
        assert_eq!(answer.interleave("VIBECHECKS"), None);
        assert_eq!(answer.interleave(""), None);
    }

    #[test]
    fn interleave_then_strip_spaces_round_trips() {
        for (phrase, attempt) in [
            ("TOUCH GRASS", "ABCDEFGHIJ"),
            ("BOMBASTIC SIDE EYE", "QWERTYUIOPASDFGH"),
            ("FR FR", "ZZZZ"),
            ("RIZZ", "LMAO"),
        ] {
            let answer = Answer::new(phrase).unwrap();
            let row = answer.interleave(attempt).unwrap();
            assert_eq!(row.len(), answer.len());
            assert_eq!(answer.strip_spaces(&row), attempt);
        }
    }

    #[test]
    fn answer_display() {
        let answer = Answer::new("ohio").unwrap();
        assert_eq!(format!("{answer}"), "OHIO");
    }
}
