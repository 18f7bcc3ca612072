//! Interactive TUI interface
//!
//! Full-screen board with reveal animation, on-screen keyboard, and hint banners.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, RevealAnimation, run_tui};
pub use rendering::{cell_style, key_style, ui};
