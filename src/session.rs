//! In-session statistics
//!
//! Kept in memory for the lifetime of the process only.

use crate::core::MAX_ATTEMPTS;
use crate::engine::{Effects, GuessEngine, IndexPicker};

/// Games played since launch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempt count; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished game; unfinished games are ignored
    ///
    /// Returns true if the game was counted.
    pub fn record<P: IndexPicker, E: Effects>(&mut self, engine: &GuessEngine<P, E>) -> bool {
        if !engine.is_over() {
            return false;
        }

        self.total_games += 1;
        if engine.is_won() {
            self.games_won += 1;
            self.guess_distribution[engine.cursor()] += 1;
        }
        true
    }

    /// Win percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
