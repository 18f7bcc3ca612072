//! Guess engine
//!
//! Holds the hidden answer and board, turns key presses into state changes,
//! and derives per-cell and per-key feedback.

mod config;
mod effects;
mod game;
mod input;
mod picker;

pub use config::{EngineConfig, HintBannerPolicy, HintMode, HintStage, RevealTiming};
pub use effects::{Effects, EventQueue, GameEvent, NoEffects};
pub use game::{GuessEngine, Reveal};
pub use input::Key;
pub use picker::{IndexPicker, RngPicker, SequencePicker};
