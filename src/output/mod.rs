//! Terminal output formatting
//!
//! Display utilities for the line-based mode and share grids.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_summary, print_keyboard, print_session_stats};
pub use formatters::share_grid;
