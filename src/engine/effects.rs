//! Side-effect hooks
//!
//! The engine reports each transition to an `Effects` collaborator so a front
//! end can play sounds, schedule animations, or log messages. Game state never
//! depends on what the collaborator does.

use super::HintStage;
use std::time::Duration;

/// Transitions reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new answer was drawn
    NewGame { target_len: usize },
    LetterTyped(char),
    LetterErased,
    /// A row was finalized; `reveal` is how long its reveal animation runs
    Submitted { row: usize, reveal: Duration },
    Won { attempts: usize },
    Lost,
    HintUsed(HintStage),
}

/// Receiver for engine transitions
pub trait Effects {
    fn on_event(&mut self, event: &GameEvent);
}

/// Effects that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Buffers events for the caller to drain
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received since the last drain
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all buffered events, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Effects for EventQueue {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
