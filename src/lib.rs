//! Brainrot Wordle
//!
//! A Wordle-style guessing game over slang words and phrases. Answers may contain
//! spaces, which are shown on the board but never typed, and each game offers a
//! staged hint: first a letter, then a short description.
//!
//! # Quick Start
//!
//! ```rust
//! use brainrot_wordle::engine::{EngineConfig, GuessEngine, Key, NoEffects, SequencePicker};
//! use brainrot_wordle::wordlists::WordSource;
//!
//! let source = WordSource::from_words(&["no cap"]);
//! let mut engine = GuessEngine::new(
//!     source,
//!     EngineConfig::default(),
//!     SequencePicker::new(vec![0]),
//!     NoEffects,
//! )
//! .unwrap();
//!
//! for c in "NOCAP".chars() {
//!     engine.apply_input(Key::Letter(c));
//! }
//! engine.apply_input(Key::Enter);
//!
//! assert!(engine.is_won());
//! assert_eq!(engine.board().row(0), Some("NO CAP"));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Per-session statistics
pub mod session;

// Interactive TUI interface
pub mod interactive;
