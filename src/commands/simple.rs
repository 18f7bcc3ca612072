//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::engine::{EventQueue, GuessEngine, IndexPicker, Key};
use crate::output::formatters::event_message;
use crate::output::{print_board, print_game_summary, print_keyboard, print_session_stats};
use crate::session::Statistics;
use std::io::{self, Write};

/// What a line of player input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    New,
    Quit,
}

impl Command {
    /// Parse a line; anything that is not a `:` command is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":hint" | ":h" | "?" => Self::Hint,
            ":new" | ":n" => Self::New,
            ":quit" | ":q" | ":exit" => Self::Quit,
            other => Self::Guess(other.to_string()),
        }
    }
}

/// Letters the attempt would hold after typing `line`
fn typed_len<P: IndexPicker>(engine: &GuessEngine<P, EventQueue>, line: &str) -> usize {
    engine.attempt().len() + line.chars().filter(char::is_ascii_alphabetic).count()
}

/// Type a whole line after the current attempt, then press Enter
///
/// Characters that are not letters (spaces included) are skipped, so phrases
/// can be typed with or without their spaces. A line that would not fill the
/// attempt exactly is rejected untouched, and earlier letters (such as a hint
/// letter) are kept. Returns true if a row was submitted.
pub fn feed_line<P: IndexPicker>(engine: &mut GuessEngine<P, EventQueue>, line: &str) -> bool {
    if engine.is_over() || typed_len(engine, line) != engine.target_len() {
        return false;
    }

    let before = engine.cursor();
    for key in line.chars().filter_map(Key::from_char) {
        engine.apply_input(key);
    }
    engine.apply_input(Key::Enter);
    engine.cursor() > before
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<P: IndexPicker>(engine: &mut GuessEngine<P, EventQueue>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Brainrot Wordle - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type your guess and press Enter. Spaces are filled in for you.");
    println!("Commands: ':hint' for a hint, ':new' for a new game, ':quit' to exit\n");

    let mut stats = Statistics::default();

    loop {
        flush_messages(engine);
        print_board(engine);

        if engine.is_over() {
            stats.record(engine);
            print_game_summary(engine);
            print_session_stats(&stats);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine.reset();
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_keyboard(engine);
        if let Some(banner) = engine.hint_banner() {
            println!("💡 {banner}\n");
        }

        let prompt = if engine.attempt().is_empty() {
            format!("Guess {} ({} letters)", engine.cursor() + 1, engine.target_len())
        } else {
            format!(
                "Guess {} ({} letters, {} already typed)",
                engine.cursor() + 1,
                engine.target_len(),
                engine.attempt()
            )
        };

        match Command::parse(&get_user_input(&prompt)?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                if !engine.is_over() {
                    println!("Giving up on this one.");
                }
                engine.reset();
            }
            Command::Hint => {
                if engine.hints_remaining() {
                    engine.apply_hint();
                } else {
                    println!("❌ No hints left!\n");
                }
            }
            Command::Guess(line) => {
                let typed = typed_len(engine, &line);
                if !feed_line(engine, &line) {
                    println!(
                        "❌ Need exactly {} letters, got {typed}\n",
                        engine.target_len()
                    );
                }
            }
        }
    }
}

fn flush_messages<P: IndexPicker>(engine: &mut GuessEngine<P, EventQueue>) {
    for event in engine.effects_mut().drain() {
        if let Some(message) = event_message(&event) {
            println!("{message}");
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
