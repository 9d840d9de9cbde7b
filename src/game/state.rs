//! Session state for one game
//!
//! Rows and columns are 1-based to match what the player sees on the board.

use crate::core::{Evaluation, WORD_LENGTH, Word};

/// Number of attempts per game
pub const MAX_ROWS: usize = 6;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Notice shown when input arrives after the game is over
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Won => "Nice, you completed the Wordle!",
            Self::Lost => "Sorry, you're out of turns!",
        }
    }
}

/// Observable position in the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    RowFull,
    GameOverWin,
    GameOverLoss,
}

/// Exactly one of these holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Guessing,
    Won,
    Lost,
}

/// An accepted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    current_guess: Vec<char>,
    current_column: usize,
    current_row: usize,
    game_ended: bool,
    completed: bool,
    history: Vec<GuessRecord>,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            current_guess: Vec::with_capacity(WORD_LENGTH),
            current_column: 1,
            current_row: 1,
            game_ended: false,
            completed: false,
            history: Vec::with_capacity(MAX_ROWS),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.current_guess
    }

    /// Column of the next letter to write or erase (1-5)
    #[must_use]
    pub const fn current_column(&self) -> usize {
        self.current_column
    }

    /// Active attempt (1-6)
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        match (self.game_ended, self.completed) {
            (_, true) => Status::Won,
            (true, false) => Status::Lost,
            (false, false) => Status::Guessing,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            Status::Won => Some(Outcome::Won),
            Status::Lost => Some(Outcome::Lost),
            Status::Guessing => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.status() {
            Status::Won => Phase::GameOverWin,
            Status::Lost => Phase::GameOverLoss,
            Status::Guessing if self.current_guess.len() == WORD_LENGTH => Phase::RowFull,
            Status::Guessing => Phase::AwaitingInput,
        }
    }

    pub(super) fn push_letter(&mut self, letter: char) {
        debug_assert!(self.current_guess.len() < WORD_LENGTH);
        self.current_guess.push(letter);
        self.current_column = (self.current_column + 1).min(WORD_LENGTH);
    }

    /// Replace the letter in the last slot of a full row
    pub(super) fn overwrite_last(&mut self, letter: char) {
        if let Some(last) = self.current_guess.last_mut() {
            *last = letter;
        }
    }

    /// Remove the last letter, returning the column it occupied
    pub(super) fn pop_letter(&mut self) -> Option<usize> {
        let column = self.current_guess.len();
        self.current_guess.pop()?;
        self.current_column = column;
        Some(column)
    }

    /// Store an accepted guess and clear the row
    pub(super) fn record(&mut self, word: Word, evaluation: Evaluation) {
        self.history.push(GuessRecord { word, evaluation });
        self.current_guess.clear();
    }

    pub(super) fn advance_row(&mut self) {
        debug_assert!(self.current_row < MAX_ROWS);
        self.current_row += 1;
        self.current_column = 1;
    }

    pub(super) fn end(&mut self, outcome: Outcome) {
        self.game_ended = true;
        self.completed = outcome == Outcome::Won;
    }
}
