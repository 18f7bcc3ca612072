//! Guess engine: answer, board, in-progress attempt, and hints

use super::config::{EngineConfig, HintBannerPolicy, HintMode, HintStage};
use super::effects::{Effects, GameEvent, NoEffects};
use super::input::Key;
use super::picker::{IndexPicker, RngPicker};
use crate::core::{Answer, Board, CellStatus, LetterStatuses, score_row};
use crate::wordlists::{Entry, WordSource, WordSourceError};
use std::time::Duration;

/// Transient marker on the most recently submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub row: usize,
    pub duration: Duration,
}

/// Game state for a single hidden answer
///
/// All state changes go through [`apply_input`](Self::apply_input),
/// [`apply_hint`](Self::apply_hint) and [`reset`](Self::reset). Inputs that are
/// not valid in the current state are ignored.
pub struct GuessEngine<P: IndexPicker = RngPicker, E: Effects = NoEffects> {
    source: WordSource,
    picker: P,
    effects: E,
    config: EngineConfig,
    answer: Answer,
    description: Option<String>,
    board: Board,
    attempt: String,
    hint_stage: HintStage,
    reveal: Option<Reveal>,
}

impl<P: IndexPicker, E: Effects> GuessEngine<P, E> {
    /// Create an engine and draw the first answer from `source`
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Empty` if the source has no entries.
    pub fn new(
        source: WordSource,
        config: EngineConfig,
        mut picker: P,
        effects: E,
    ) -> Result<Self, WordSourceError> {
        let entry = draw(&source, &mut picker).ok_or(WordSourceError::Empty)?;

        let mut engine = Self {
            source,
            picker,
            effects,
            config,
            answer: entry.answer,
            description: entry.hint,
            board: Board::new(),
            attempt: String::new(),
            hint_stage: HintStage::Unused,
            reveal: None,
        };
        engine.start();
        Ok(engine)
    }

    /// Create an engine whose only possible answer is `entry`
    pub fn with_entry(entry: Entry, config: EngineConfig, picker: P, effects: E) -> Self {
        let answer = entry.answer.clone();
        let description = entry.hint.clone();

        let mut engine = Self {
            source: WordSource::from_entries([entry]),
            picker,
            effects,
            config,
            answer,
            description,
            board: Board::new(),
            attempt: String::new(),
            hint_stage: HintStage::Unused,
            reveal: None,
        };
        engine.start();
        engine
    }

    /// Draw a new answer and clear all game state
    pub fn reset(&mut self) {
        if let Some(entry) = draw(&self.source, &mut self.picker) {
            self.answer = entry.answer;
            self.description = entry.hint;
        }
        self.board = Board::new();
        self.attempt.clear();
        self.hint_stage = HintStage::Unused;
        self.reveal = None;
        self.start();
    }

    fn start(&mut self) {
        log::debug!("New game, answer: {}", self.answer);
        self.emit(&GameEvent::NewGame {
            target_len: self.answer.target_len(),
        });
    }

    fn emit(&mut self, event: &GameEvent) {
        self.effects.on_event(event);
    }

    /// Apply one key press
    pub fn apply_input(&mut self, key: Key) {
        if self.is_over() {
            return;
        }

        match key {
            Key::Letter(c) => {
                if c.is_ascii_alphabetic() && self.attempt.len() < self.target_len() {
                    let c = c.to_ascii_uppercase();
                    self.attempt.push(c);
                    self.emit(&GameEvent::LetterTyped(c));
                }
            }
            Key::Backspace => {
                if self.attempt.pop().is_some() {
                    self.emit(&GameEvent::LetterErased);
                }
            }
            Key::Enter => self.submit(),
        }
    }

    fn submit(&mut self) {
        let Some(row) = self.answer.interleave(&self.attempt) else {
            return;
        };
        let won = row == self.answer.text();
        let Some(index) = self.board.push(row) else {
            return;
        };

        self.attempt.clear();
        let duration = self.config.reveal.duration(self.answer.len());
        self.reveal = Some(Reveal {
            row: index,
            duration,
        });

        log::debug!(
            "Row {} submitted: {}",
            index,
            self.board.row(index).unwrap_or_default()
        );
        self.emit(&GameEvent::Submitted {
            row: index,
            reveal: duration,
        });

        if won {
            log::info!("Won in {} attempts", index + 1);
            self.emit(&GameEvent::Won {
                attempts: index + 1,
            });
        } else if self.board.is_full() {
            log::info!("Lost, answer was {}", self.answer);
            self.emit(&GameEvent::Lost);
        }
    }

    /// Take the next available hint
    ///
    /// The first hint types the next answer letter into the attempt; the second
    /// (full mode, answers with a description) shows the description.
    pub fn apply_hint(&mut self) {
        if self.is_over() || !self.hints_remaining() {
            return;
        }

        match self.hint_stage {
            HintStage::Unused => {
                let Some(letter) = self.answer.slot_letter(self.attempt.len()) else {
                    return;
                };
                self.attempt.push(letter);
                self.hint_stage = HintStage::LetterRevealed;
            }
            HintStage::LetterRevealed => {
                self.hint_stage = HintStage::DescriptionRevealed;
            }
            HintStage::DescriptionRevealed => return,
        }

        log::debug!("Hint stage {} used", self.hint_stage.index());
        self.emit(&GameEvent::HintUsed(self.hint_stage));
    }

    /// Highest hint stage reachable for this answer
    #[must_use]
    pub const fn max_hint_stage(&self) -> HintStage {
        match self.config.hint_mode {
            HintMode::Full if self.description.is_none() => HintStage::LetterRevealed,
            mode => mode.max_stage(),
        }
    }

    /// True if a hint could still be taken at some point in this game
    #[must_use]
    pub fn hints_remaining(&self) -> bool {
        !self.is_over() && self.hint_stage < self.max_hint_stage()
    }

    /// True iff a finalized row equals the answer, spaces included
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.finalized().any(|row| row == self.answer.text())
    }

    /// True iff every row is used and none matched
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.board.is_full() && !self.is_won()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_full() || self.is_won()
    }

    /// Status of a finalized cell; `None` for unfinalized rows or out of range
    #[must_use]
    pub fn cell_status(&self, row: usize, col: usize) -> Option<CellStatus> {
        let letter = *self.board.row(row)?.as_bytes().get(col)?;
        Some(CellStatus::score(&self.answer, letter, col))
    }

    /// Statuses of every cell of a finalized row
    #[must_use]
    pub fn row_statuses(&self, row: usize) -> Option<Vec<CellStatus>> {
        self.board.row(row).map(|r| score_row(&self.answer, r))
    }

    /// Keyboard map, recomputed from the finalized rows
    #[must_use]
    pub fn letter_statuses(&self) -> LetterStatuses {
        LetterStatuses::compute(&self.answer, self.board.finalized())
    }

    /// Cells of the row being typed: spaces as `' '`, typed letters, `None` for blanks
    #[must_use]
    pub fn pending_cells(&self) -> Vec<Option<char>> {
        let mut typed = self.attempt.chars();
        (0..self.answer.len())
            .map(|col| {
                if self.answer.is_space(col) {
                    Some(' ')
                } else {
                    typed.next()
                }
            })
            .collect()
    }

    /// Description banner text, if the banner is currently visible
    #[must_use]
    pub fn hint_banner(&self) -> Option<&str> {
        let visible = self.hint_stage == HintStage::DescriptionRevealed
            || (self.config.banner_policy == HintBannerPolicy::StageOrGameOver && self.is_over());
        if visible {
            self.description.as_deref()
        } else {
            None
        }
    }

    /// The answer once the game has ended
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        self.is_over().then(|| self.answer.text())
    }

    /// Forget the reveal marker if it still names `row`
    pub fn clear_reveal(&mut self, row: usize) {
        if self.reveal.is_some_and(|r| r.row == row) {
            self.reveal = None;
        }
    }

    #[must_use]
    pub const fn reveal(&self) -> Option<Reveal> {
        self.reveal
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Letters typed so far in the current row, spaces excluded
    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    /// Index of the next row to fill
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.board.cursor()
    }

    /// Number of letters a complete attempt needs
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.answer.target_len()
    }

    /// Row width, spaces included
    #[must_use]
    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }

    /// True if the answer has a space at `col`
    #[must_use]
    pub fn is_space(&self, col: usize) -> bool {
        self.answer.is_space(col)
    }

    #[must_use]
    pub const fn hint_stage(&self) -> HintStage {
        self.hint_stage
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }

    #[must_use]
    pub const fn effects(&self) -> &E {
        &self.effects
    }

    pub const fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }
}

fn draw<P: IndexPicker>(source: &WordSource, picker: &mut P) -> Option<Entry> {
    if source.is_empty() {
        return None;
    }
    let index = picker.pick(source.len()) % source.len();
    source.get(index).cloned()
}
