//! Per-cell and per-letter feedback
//!
//! Cells are scored position by position against the answer:
//! - Correct = same letter at the same position
//! - Present = letter appears anywhere in the answer
//! - Absent = letter not in the answer
//!
//! Space positions are never scored. The keyboard map keeps the best status
//! seen for each letter, with Correct > Present > Absent.

use super::Answer;
use rustc_hash::FxHashMap;

/// Feedback for a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Correct,
    Present,
    Absent,
    /// A space in a multi-word answer
    Space,
}

impl CellStatus {
    /// Score the character at `position` of a finalized row
    ///
    /// # Examples
    /// ```
    /// use brainrot_wordle::core::{Answer, CellStatus};
    ///
    /// let answer = Answer::new("CRANE").unwrap();
    /// assert_eq!(CellStatus::score(&answer, b'E', 4), CellStatus::Correct);
    /// assert_eq!(CellStatus::score(&answer, b'A', 3), CellStatus::Present);
    /// assert_eq!(CellStatus::score(&answer, b'S', 0), CellStatus::Absent);
    /// ```
    #[must_use]
    pub fn score(answer: &Answer, letter: u8, position: usize) -> Self {
        if answer.is_space(position) {
            Self::Space
        } else if position < answer.len() && answer.char_at(position) == letter {
            Self::Correct
        } else if answer.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Keyboard status carried by this cell, if it is a scored letter
    #[inline]
    #[must_use]
    pub const fn letter_status(self) -> Option<LetterStatus> {
        match self {
            Self::Correct => Some(LetterStatus::Correct),
            Self::Present => Some(LetterStatus::Present),
            Self::Absent => Some(LetterStatus::Absent),
            Self::Space => None,
        }
    }

    /// Emoji tile for share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Space => ' ',
        }
    }
}

/// Best known status of a keyboard letter
///
/// Ordered so that `max` yields the dominant status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Score every position of a finalized row
#[must_use]
pub fn score_row(answer: &Answer, row: &str) -> Vec<CellStatus> {
    row.bytes()
        .enumerate()
        .map(|(i, b)| CellStatus::score(answer, b, i))
        .collect()
}

/// Letter to best-status map derived from finalized rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatuses {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl LetterStatuses {
    /// Recompute the map from scratch for the given finalized rows
    #[must_use]
    pub fn compute<'r>(answer: &Answer, rows: impl IntoIterator<Item = &'r str>) -> Self {
        let mut map = Self::default();
        for row in rows {
            map.record_row(answer, row);
        }
        map
    }

    /// Fold one finalized row into the map, upgrading statuses only
    pub fn record_row(&mut self, answer: &Answer, row: &str) {
        for (i, letter) in row.bytes().enumerate() {
            if let Some(status) = CellStatus::score(answer, letter, i).letter_status() {
                self.upgrade(letter, status);
            }
        }
    }

    fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        let entry = self.statuses.entry(letter).or_insert(status);
        if status > *entry {
            *entry = status;
        }
    }

    /// Status of a letter, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|b| self.statuses.get(&b).copied())
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// True if no letter has been guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellStatus::{Absent, Correct, Present, Space};

    #[test]
    fn score_row_slate_against_crane() {
        let answer = Answer::new("CRANE").unwrap();
        assert_eq!(
            score_row(&answer, "SLATE"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_row_all_correct() {
        let answer = Answer::new("CRANE").unwrap();
        assert!(score_row(&answer, "CRANE").iter().all(|&s| s == Correct));
    }

    #[test]
    fn score_row_present_ignores_duplicate_counts() {
        // Every extra copy of a letter in the answer still counts as present
        let answer = Answer::new("RIZZ").unwrap();
        assert_eq!(score_row(&answer, "ZZZI"), vec![Present, Present, Correct, Present]);
    }

    #[test]
    fn score_row_marks_spaces() {
        let answer = Answer::new("NO CAP").unwrap();
        assert_eq!(
            score_row(&answer, "ON PAC"),
            vec![Present, Present, Space, Present, Correct, Present]
        );
    }

    #[test]
    fn letter_status_ordering() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert_eq!(Space.letter_status(), None);
    }

    #[test]
    fn letter_statuses_take_best_across_rows() {
        let answer = Answer::new("CRANE").unwrap();
        let map = LetterStatuses::compute(&answer, ["SLATE", "TRACE"]);

        assert_eq!(map.get('S'), Some(LetterStatus::Absent));
        assert_eq!(map.get('a'), Some(LetterStatus::Correct));
        assert_eq!(map.get('C'), Some(LetterStatus::Present));
        assert_eq!(map.get('E'), Some(LetterStatus::Correct));
        assert_eq!(map.get('Q'), None);
    }

    #[test]
    fn letter_statuses_never_downgrade() {
        let answer = Answer::new("CRANE").unwrap();
        let mut map = LetterStatuses::default();

        map.record_row(&answer, "CRANE");
        assert_eq!(map.get('C'), Some(LetterStatus::Correct));

        // C is present-only here, must stay correct
        map.record_row(&answer, "ACRNE");
        assert_eq!(map.get('C'), Some(LetterStatus::Correct));
        assert_eq!(map.get('A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn letter_statuses_skip_spaces() {
        let answer = Answer::new("FR FR").unwrap();
        let map = LetterStatuses::compute(&answer, ["RF RF"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(' '), None);
    }

    #[test]
    fn emoji_tiles() {
        assert_eq!(Correct.to_emoji(), '🟩');
        assert_eq!(Present.to_emoji(), '🟨');
        assert_eq!(Absent.to_emoji(), '⬛');
        assert_eq!(Space.to_emoji(), ' ');
    }
}
