//! Core domain types for the game
//!
//! Pure, deterministic types: the validated answer, the board, and feedback scoring.

mod answer;
mod board;
mod feedback;

pub use answer::{Answer, AnswerError};
pub use board::{Board, MAX_ATTEMPTS};
pub use feedback::{CellStatus, LetterStatus, LetterStatuses, score_row};
