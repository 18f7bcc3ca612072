//! Colored terminal rendering for the line-based mode

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, share_grid};
use crate::core::{CellStatus, LetterStatus, MAX_ATTEMPTS};
use crate::engine::{Effects, GuessEngine, IndexPicker};
use crate::session::Statistics;
use colored::{ColoredString, Colorize};

fn tile(letter: char, status: Option<CellStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(CellStatus::Correct) => text.black().on_green().bold(),
        Some(CellStatus::Present) => text.black().on_yellow().bold(),
        Some(CellStatus::Absent) => text.white().on_bright_black(),
        Some(CellStatus::Space) => "   ".normal(),
        None if letter == ' ' => "   ".normal(),
        None => text.bright_white().on_black(),
    }
}

/// Format one finalized row with colored tiles
#[must_use]
pub fn colored_row(row: &str, statuses: &[CellStatus]) -> String {
    row.chars()
        .zip(statuses)
        .map(|(c, &s)| tile(c, Some(s)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the board: finalized rows, the row being typed, then empty rows
pub fn print_board<P: IndexPicker, E: Effects>(engine: &GuessEngine<P, E>) {
    println!();
    for row in 0..MAX_ATTEMPTS {
        let line = if let (Some(text), Some(statuses)) =
            (engine.board().row(row), engine.row_statuses(row))
        {
            colored_row(text, &statuses)
        } else if row == engine.cursor() {
            engine
                .pending_cells()
                .into_iter()
                .map(|cell| tile(cell.unwrap_or('_'), None).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            (0..engine.answer_len())
                .map(|col| {
                    let blank = if engine.is_space(col) { ' ' } else { '·' };
                    tile(blank, None).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  {line}");
    }
    println!();
}

/// Print the keyboard colored by best-known letter status
pub fn print_keyboard<P: IndexPicker, E: Effects>(engine: &GuessEngine<P, E>) {
    let statuses = engine.letter_statuses();

    for keys in KEYBOARD_ROWS {
        let line = keys
            .iter()
            .filter(|key| key.len() == 1)
            .map(|&label| {
                let status = label.chars().next().and_then(|c| statuses.get(c));
                match status {
                    Some(LetterStatus::Correct) => label.black().on_green().to_string(),
                    Some(LetterStatus::Present) => label.black().on_yellow().to_string(),
                    Some(LetterStatus::Absent) => label.bright_black().to_string(),
                    None => label.bright_white().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner, description, and share grid
pub fn print_game_summary<P: IndexPicker, E: Effects>(engine: &GuessEngine<P, E>) {
    println!("{}", "═".repeat(60).bright_cyan());
    if engine.is_won() {
        let attempts = engine.cursor();
        println!(
            "{}",
            format!(
                "🎉 Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else if let Some(answer) = engine.revealed_answer() {
        println!(
            "{} {}",
            "💀 Out of tries. Solution:".red().bold(),
            answer.bright_yellow().bold()
        );
    }

    if let Some(banner) = engine.hint_banner() {
        println!("💡 {}", banner.italic());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n{}\n", share_grid(engine));
}

/// Print session statistics with a distribution chart
pub fn print_session_stats(stats: &Statistics) {
    println!("\n📈 {}", "Session:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {attempts}: {} {count}", bar.green());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_row_keeps_letters_and_spaces() {
        colored::control::set_override(false);
        let row = colored_row(
            "NO CAP",
            &[
                CellStatus::Correct,
                CellStatus::Present,
                CellStatus::Space,
                CellStatus::Absent,
                CellStatus::Correct,
                CellStatus::Correct,
            ],
        );
        let expected = [" N ", " O ", "   ", " C ", " A ", " P "].join(" ");
        assert_eq!(row, expected);
    }
}
