//! TUI application state and logic

use crate::engine::{EventQueue, GameEvent, GuessEngine, IndexPicker, Key, RngPicker};
use crate::output::formatters::event_message;
use crate::session::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Poll interval while a row is being revealed
const ANIMATION_TICK: Duration = Duration::from_millis(30);
/// Poll interval when idle
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Reveal animation in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAnimation {
    pub row: usize,
    pub started: Instant,
    pub duration: Duration,
}

/// Application state
pub struct App<P: IndexPicker = RngPicker> {
    pub engine: GuessEngine<P, EventQueue>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub animation: Option<RevealAnimation>,
    /// Clock reading used for rendering
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<P: IndexPicker> App<P> {
    #[must_use]
    pub fn new(engine: GuessEngine<P, EventQueue>) -> Self {
        let mut app = Self {
            engine,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            animation: None,
            now: Instant::now(),
        };
        app.add_message(
            "Welcome! Guess the brainrot in 6 tries. Tab for a hint.",
            MessageStyle::Info,
        );
        app.process_events(app.now);
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Char('?') => {
                if self.engine.hints_remaining() {
                    self.engine.apply_hint();
                } else if !self.engine.is_over() {
                    self.add_message("No hints left!", MessageStyle::Error);
                }
            }
            KeyCode::Enter => {
                let before = self.engine.cursor();
                self.engine.apply_input(Key::Enter);
                if self.engine.cursor() == before && !self.engine.is_over() {
                    self.add_message(
                        &format!("Need {} letters!", self.engine.target_len()),
                        MessageStyle::Error,
                    );
                }
            }
            KeyCode::Backspace => self.engine.apply_input(Key::Backspace),
            KeyCode::Char(c) => {
                if let Some(key) = Key::from_char(c) {
                    self.engine.apply_input(key);
                }
            }
            _ => {}
        }

        self.process_events(now);
    }

    /// Start a new game, only once the current one has ended
    pub fn new_game(&mut self) {
        if !self.engine.is_over() {
            self.add_message("Finish this one first!", MessageStyle::Error);
            return;
        }
        self.animation = None;
        self.messages.clear();
        self.engine.reset();
    }

    /// Turn drained engine events into messages, stats, and animation state
    pub fn process_events(&mut self, now: Instant) {
        for event in self.engine.effects_mut().drain() {
            match event {
                GameEvent::Submitted { row, reveal } => {
                    self.animation = Some(RevealAnimation {
                        row,
                        started: now,
                        duration: reveal,
                    });
                }
                GameEvent::Won { .. } | GameEvent::Lost => {
                    self.stats.record(&self.engine);
                }
                _ => {}
            }

            if let Some(text) = event_message(&event) {
                let style = match event {
                    GameEvent::Won { .. } => MessageStyle::Success,
                    GameEvent::Lost => MessageStyle::Error,
                    _ => MessageStyle::Info,
                };
                self.add_message(&text, style);
            }
        }
        self.now = now;
    }

    /// Advance the clock and expire a finished reveal
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if let Some(animation) = self.animation
            && now.duration_since(animation.started) >= animation.duration
        {
            self.engine.clear_reveal(animation.row);
            self.animation = None;
        }
    }

    /// Cells of `row` that have flipped so far; every cell for settled rows
    #[must_use]
    pub fn revealed_cells(&self, row: usize) -> usize {
        let len = self.engine.answer_len();
        match (self.animation, self.engine.reveal()) {
            (Some(animation), Some(reveal)) if animation.row == row && reveal.row == row => {
                let per_cell = self.engine.config().reveal.per_cell.as_millis();
                if per_cell == 0 {
                    return len;
                }
                let elapsed = self.now.saturating_duration_since(animation.started);
                let flipped = (elapsed.as_millis() / per_cell) as usize + 1;
                flipped.min(len)
            }
            _ => len,
        }
    }

    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        if self.animation.is_some() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: IndexPicker>(app: App<P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, P: IndexPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout())?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Answer;
    use crate::engine::{EngineConfig, HintStage, SequencePicker};
    use crate::wordlists::{Entry, WordSource};

    fn app(answer: &str) -> App<SequencePicker> {
        let entry = Entry {
            answer: Answer::new(answer).unwrap(),
            hint: Some("Charm".to_string()),
        };
        App::new(GuessEngine::with_entry(
            entry,
            EngineConfig::default(),
            SequencePicker::new(vec![0]),
            EventQueue::new(),
        ))
    }

    fn press(app: &mut App<SequencePicker>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App<SequencePicker>, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app("RIZZ");
        let now = Instant::now();
        type_word(&mut app, "razz", now);

        assert_eq!(app.engine.cursor(), 1);
        assert!(app.animation.is_some());
    }

    #[test]
    fn short_enter_reports_error() {
        let mut app = app("RIZZ");
        let now = Instant::now();
        press(&mut app, KeyCode::Char('r'), now);
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(app.engine.cursor(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("4 letters"));
    }

    #[test]
    fn digits_and_other_keys_ignored() {
        let mut app = app("RIZZ");
        let now = Instant::now();
        press(&mut app, KeyCode::Char('7'), now);
        press(&mut app, KeyCode::Left, now);
        assert!(app.engine.attempt().is_empty());
    }

    #[test]
    fn tab_takes_hints() {
        let mut app = app("RIZZ");
        let now = Instant::now();
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.engine.attempt(), "R");
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.engine.hint_stage(), HintStage::DescriptionRevealed);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.messages.last().unwrap().text, "No hints left!");
    }

    #[test]
    fn win_records_stats() {
        let mut app = app("RIZZ");
        let now = Instant::now();
        type_word(&mut app, "rizz", now);

        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn new_game_only_after_game_end() {
        let source = WordSource::from_words(&["rizz", "aura"]);
        let engine = GuessEngine::new(
            source,
            EngineConfig::default(),
            SequencePicker::new(vec![0, 1]),
            EventQueue::new(),
        )
        .unwrap();
        let mut app = App::new(engine);
        let now = Instant::now();

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL), now);
        assert_eq!(app.engine.revealed_answer(), None);

        type_word(&mut app, "rizz", now);
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL), now);

        assert_eq!(app.engine.cursor(), 0);
        assert!(!app.engine.is_over());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn reveal_progresses_then_expires() {
        let mut app = app("RIZZ");
        let start = Instant::now();
        type_word(&mut app, "razz", start);

        app.tick(start);
        assert_eq!(app.revealed_cells(0), 1);

        app.tick(start + Duration::from_millis(200));
        assert_eq!(app.revealed_cells(0), 3);
        assert_eq!(app.poll_timeout(), ANIMATION_TICK);

        // 600 + 90 × 4
        app.tick(start + Duration::from_millis(960));
        assert!(app.animation.is_none());
        assert!(app.engine.reveal().is_none());
        assert_eq!(app.revealed_cells(0), 4);
        assert_eq!(app.poll_timeout(), IDLE_TICK);
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut app = app("RIZZ");
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);

        let mut app2 = self::app("RIZZ");
        press(&mut app2, KeyCode::Esc, Instant::now());
        assert!(app2.should_quit);
    }
}
