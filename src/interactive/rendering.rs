//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, banners, and status bar.

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, LetterStatus, LetterStatuses, MAX_ATTEMPTS};
use crate::engine::{HintStage, IndexPicker};
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar, key_label};
use crate::session::Statistics;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Board rows plus spacers and borders
const BOARD_HEIGHT: u16 = 14;

/// Main UI rendering function
pub fn ui<P: IndexPicker>(f: &mut Frame, app: &App<P>) {
    let hint_banner = app.engine.hint_banner();
    let solution = if app.engine.is_lost() {
        app.engine.revealed_answer()
    } else {
        None
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                      // Header
            Constraint::Length(if hint_banner.is_some() { 3 } else { 0 }), // Hint banner
            Constraint::Length(if solution.is_some() { 3 } else { 0 }), // Loss banner
            Constraint::Min(BOARD_HEIGHT),                              // Board
            Constraint::Length(5),                                      // Keyboard
            Constraint::Length(8),                                      // Messages + stats
            Constraint::Length(3),                                      // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    if let Some(text) = hint_banner {
        render_banner(f, chunks[1], "💡", text, Color::Magenta);
    }
    if let Some(answer) = solution {
        render_banner(f, chunks[2], "Out of tries. Solution:", answer, Color::Red);
    }
    render_board(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[5]);
    render_messages(f, app, bottom[0]);
    render_distribution(f, app, bottom[1]);
    render_status(f, app, chunks[6]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧠 BRAINROT WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, area: Rect, label: &str, text: &str, color: Color) {
    let line = Line::from(vec![
        Span::raw(format!("{label} ")),
        Span::styled(
            text.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    let banner = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

/// Style for a scored cell
pub fn cell_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Space => Style::default(),
    }
}

fn unscored_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Black)
}

/// Build one board line for `row`
fn board_line<P: IndexPicker>(app: &App<P>, row: usize) -> Line<'static> {
    let engine = &app.engine;
    let width = engine.answer_len();

    let cells: Vec<Span<'static>> = if let Some(text) = engine.board().row(row) {
        let flipped = app.revealed_cells(row);
        text.chars()
            .enumerate()
            .map(|(col, c)| {
                let style = match engine.cell_status(row, col) {
                    Some(CellStatus::Space) | None => Style::default(),
                    Some(status) if col < flipped => cell_style(status),
                    Some(_) => unscored_style().add_modifier(Modifier::BOLD),
                };
                Span::styled(format!(" {c} "), style)
            })
            .collect()
    } else if row == engine.cursor() && !engine.is_over() {
        engine
            .pending_cells()
            .into_iter()
            .map(|cell| match cell {
                Some(' ') => Span::raw("   "),
                Some(c) => Span::styled(
                    format!(" {c} "),
                    unscored_style().add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", unscored_style().fg(Color::Gray)),
            })
            .collect()
    } else {
        (0..width)
            .map(|col| {
                if engine.is_space(col) {
                    Span::raw("   ")
                } else {
                    Span::styled(" · ", unscored_style().fg(Color::DarkGray))
                }
            })
            .collect()
    };

    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell);
    }
    Line::from(spans)
}

fn render_board<P: IndexPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let mut lines = Vec::with_capacity(2 * MAX_ATTEMPTS);
    for row in 0..MAX_ATTEMPTS {
        lines.push(board_line(app, row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} letters ", app.engine.target_len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

/// Style for a keyboard key
pub fn key_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn keyboard_line(keys: &[&str], statuses: &LetterStatuses) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let status = if key.len() == 1 {
            key.chars().next().and_then(|c| statuses.get(c))
        } else {
            None
        };
        spans.push(Span::styled(
            format!(" {} ", key_label(key)),
            key_style(status).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn render_keyboard<P: IndexPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let statuses = app.engine.letter_statuses();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| keyboard_line(keys, &statuses))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_messages<P: IndexPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// One line per attempt count with a bar scaled to the most common count
fn distribution_lines(stats: &Statistics) -> Vec<Line<'static>> {
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(attempts, &count)| {
            Line::from(vec![
                Span::raw(format!("{attempts} ")),
                Span::styled(
                    create_progress_bar(count as f64, most as f64, 12),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect()
}

fn render_distribution<P: IndexPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let title = format!(" Wins {}/{} ", app.stats.games_won, app.stats.total_games);
    let chart = Paragraph::new(distribution_lines(&app.stats))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(chart, area);
}

/// Status bar text for the hint key
#[must_use]
pub fn hint_label<P: IndexPicker>(app: &App<P>) -> &'static str {
    if !app.engine.hints_remaining() {
        "Hints used"
    } else if app.engine.hint_stage() == HintStage::LetterRevealed {
        "Tab: reveal description"
    } else {
        "Tab: reveal one letter"
    }
}

fn render_status<P: IndexPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let hint = Paragraph::new(hint_label(app))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(hint, chunks[1]);

    let help_text = if app.engine.is_over() {
        "Ctrl-N: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
