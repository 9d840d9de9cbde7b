//! Output contract between the turn controller and whatever draws the game

use super::state::Outcome;
use crate::core::{Evaluation, Verdict, WORD_LENGTH, Word};

/// Why a submitted row was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Incomplete,
    Invalid,
}

/// Display callbacks invoked by the turn controller
///
/// Rows and columns are 1-based. Every method defaults to doing nothing so
/// presenters only implement what they draw.
#[allow(unused_variables)]
pub trait Presenter {
    fn on_letter_placed(&mut self, row: usize, column: usize, letter: char) {}

    fn on_letter_removed(&mut self, row: usize, column: usize) {}

    fn on_guess_rejected(&mut self, row: usize, reason: Rejection) {}

    fn on_guess_evaluated(&mut self, row: usize, guess: &Word, evaluation: &Evaluation) {}

    /// Accumulated key color for a letter of the last guess
    fn on_key_verdict(&mut self, letter: char, verdict: Verdict) {}

    fn on_game_ended(&mut self, outcome: Outcome, secret: &Word) {}

    /// Transient message for the player
    fn on_notice(&mut self, message: &str) {}

    fn on_modal_closed(&mut self) {}
}

/// A recorded presenter callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LetterPlaced {
        row: usize,
        column: usize,
        letter: char,
    },
    LetterRemoved {
        row: usize,
        column: usize,
    },
    GuessRejected {
        row: usize,
        reason: Rejection,
    },
    GuessEvaluated {
        row: usize,
        guess: String,
        verdicts: [Verdict; WORD_LENGTH],
    },
    KeyVerdict {
        letter: char,
        verdict: Verdict,
    },
    GameEnded {
        outcome: Outcome,
        secret: String,
    },
    Notice(String),
    ModalClosed,
}

/// Presenter that records every callback in order
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain recorded events
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Notice(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for EventLog {
    fn on_letter_placed(&mut self, row: usize, column: usize, letter: char) {
        self.events.push(GameEvent::LetterPlaced {
            row,
            column,
            letter,
        });
    }

    fn on_letter_removed(&mut self, row: usize, column: usize) {
        self.events.push(GameEvent::LetterRemoved { row, column });
    }

    fn on_guess_rejected(&mut self, row: usize, reason: Rejection) {
        self.events.push(GameEvent::GuessRejected { row, reason });
    }

    fn on_guess_evaluated(&mut self, row: usize, guess: &Word, evaluation: &Evaluation) {
        self.events.push(GameEvent::GuessEvaluated {
            row,
            guess: guess.text().to_string(),
            verdicts: *evaluation.verdicts(),
        });
    }

    fn on_key_verdict(&mut self, letter: char, verdict: Verdict) {
        self.events.push(GameEvent::KeyVerdict { letter, verdict });
    }

    fn on_game_ended(&mut self, outcome: Outcome, secret: &Word) {
        self.events.push(GameEvent::GameEnded {
            outcome,
            secret: secret.text().to_string(),
        });
    }

    fn on_notice(&mut self, message: &str) {
        self.events.push(GameEvent::Notice(message.to_string()));
    }

    fn on_modal_closed(&mut self) {
        self.events.push(GameEvent::ModalClosed);
    }
}
