//! Six-row guess board

/// Number of guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Finalized guess rows plus the index of the next row to fill
///
/// Rows at or beyond the cursor are always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Option<String>; MAX_ATTEMPTS],
    cursor: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next row to fill, in `0..=MAX_ATTEMPTS`
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every row has been used
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.cursor >= MAX_ATTEMPTS
    }

    /// Row at `index`, if it has been finalized
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(Option::as_deref)
    }

    /// All six slots in order
    pub fn rows(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(Option::as_deref)
    }

    /// Finalized rows, oldest first
    pub fn finalized(&self) -> impl Iterator<Item = &str> {
        self.rows[..self.cursor].iter().filter_map(Option::as_deref)
    }

    /// Write a row at the cursor and advance it
    ///
    /// Returns the index written, or `None` if the board is full.
    pub fn push(&mut self, row: String) -> Option<usize> {
        let index = self.cursor;
        let slot = self.rows.get_mut(index)?;
        *slot = Some(row);
        self.cursor += 1;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_empty() {
        let board = Board::new();
        assert_eq!(board.cursor(), 0);
        assert!(!board.is_full());
        assert!(board.rows().all(|r| r.is_none()));
        assert_eq!(board.finalized().count(), 0);
    }

    #[test]
    fn board_push_advances_cursor() {
        let mut board = Board::new();
        assert_eq!(board.push("SLATE".to_string()), Some(0));
        assert_eq!(board.push("CRANE".to_string()), Some(1));

        assert_eq!(board.cursor(), 2);
        assert_eq!(board.row(0), Some("SLATE"));
        assert_eq!(board.row(1), Some("CRANE"));
        assert_eq!(board.row(2), None);
        assert_eq!(board.finalized().collect::<Vec<_>>(), ["SLATE", "CRANE"]);
    }

    #[test]
    fn board_rejects_seventh_row() {
        let mut board = Board::new();
        for _ in 0..MAX_ATTEMPTS {
            assert!(board.push("AAAAA".to_string()).is_some());
        }
        assert!(board.is_full());
        assert_eq!(board.push("BBBBB".to_string()), None);
        assert_eq!(board.cursor(), MAX_ATTEMPTS);
    }
}
