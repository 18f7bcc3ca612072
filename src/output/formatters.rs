//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;
use crate::engine::{Effects, GameEvent, GuessEngine, HintStage, IndexPicker};

/// On-screen keyboard layout, `Enter` and `Backspace` on the last row
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Enter", "Z", "X", "C", "V", "B", "N", "M", "Backspace"],
];

/// Label shown for a keyboard key
#[must_use]
pub fn key_label(key: &str) -> &str {
    match key {
        "Backspace" => "⌫",
        other => other,
    }
}

/// Emoji grid of the finalized rows, with a score header
///
/// Space positions stay blank so multi-word answers keep their shape.
#[must_use]
pub fn share_grid<P: IndexPicker, E: Effects>(engine: &GuessEngine<P, E>) -> String {
    let score = if engine.is_won() {
        engine.cursor().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("Brainrot Wordle {score}/{MAX_ATTEMPTS}");
    for row in 0..engine.cursor() {
        if let Some(statuses) = engine.row_statuses(row) {
            grid.push('\n');
            grid.extend(statuses.iter().map(|s| s.to_emoji()));
        }
    }
    grid
}

/// Player-facing message for an engine event, if it deserves one
#[must_use]
pub fn event_message(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::NewGame { target_len } => {
            format!("New game! {target_len} letters to find. Good luck, you'll need it.")
        }
        GameEvent::HintUsed(HintStage::LetterRevealed) => {
            "LOL is it that hard to guess the word? ok here is a letter, but only 1 :)".to_string()
        }
        GameEvent::HintUsed(HintStage::DescriptionRevealed) => {
            "Hm? You still need more help? fine... here is a short hint".to_string()
        }
        GameEvent::Won { attempts } => match attempts {
            1 => "🎯 FIRST TRY?! Certified rizzler! 🌟",
            2 => "🔥 Two guesses. Aura +1000 🔥",
            3 => "✨ Three guesses, you ate that ✨",
            4 => "👏 Four guesses, solid W 👏",
            5 => "🎉 Five guesses, a little cooked but you made it 🎉",
            _ => "😅 PHEW! Clutched it on the last row 😅",
        }
        .to_string(),
        GameEvent::Lost => "💀 Out of tries. You're cooked.".to_string(),
        GameEvent::HintUsed(HintStage::Unused)
        | GameEvent::LetterTyped(_)
        | GameEvent::LetterErased
        | GameEvent::Submitted { .. } => return None,
    };
    Some(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Answer;
    use crate::engine::{EngineConfig, Key, NoEffects, SequencePicker};
    use crate::wordlists::Entry;

    fn play(answer: &str, guesses: &[&str]) -> GuessEngine<SequencePicker, NoEffects> {
        let entry = Entry {
            answer: Answer::new(answer).unwrap(),
            hint: None,
        };
        let mut engine = GuessEngine::with_entry(
            entry,
            EngineConfig::default(),
            SequencePicker::new(vec![0]),
            NoEffects,
        );
        for guess in guesses {
            for c in guess.chars() {
                engine.apply_input(Key::Letter(c));
            }
            engine.apply_input(Key::Enter);
        }
        engine
    }

    #[test]
    fn share_grid_for_win() {
        let engine = play("CRANE", &["SLATE", "CRANE"]);
        assert_eq!(
            share_grid(&engine),
            "Brainrot Wordle 2/6\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_keeps_spaces() {
        let engine = play("NO CAP", &["NOCAP"]);
        assert_eq!(share_grid(&engine), "Brainrot Wordle 1/6\n🟩🟩 🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let engine = play("RIZZ", &["AAAA"; 6]);
        let grid = share_grid(&engine);
        assert!(grid.starts_with("Brainrot Wordle X/6"));
        assert_eq!(grid.lines().count(), 7);
    }

    #[test]
    fn event_messages() {
        assert!(event_message(&GameEvent::LetterTyped('A')).is_none());
        assert!(event_message(&GameEvent::Lost).unwrap().contains("Out of tries"));
        assert!(
            event_message(&GameEvent::NewGame { target_len: 8 })
                .unwrap()
                .contains("8 letters")
        );
        assert_ne!(
            event_message(&GameEvent::Won { attempts: 1 }),
            event_message(&GameEvent::Won { attempts: 6 })
        );
    }

    #[test]
    fn key_labels() {
        assert_eq!(key_label("Backspace"), "⌫");
        assert_eq!(key_label("Enter"), "Enter");
        assert_eq!(key_label("Q"), "Q");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
