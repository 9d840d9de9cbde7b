//! Turn controller
//!
//! Owns the session state and is the only thing that mutates it. Every
//! operation completes synchronously and reports what changed through a
//! [`Presenter`].

use super::events::{Presenter, Rejection};
use super::input::{Input, TurnError};
use super::keyboard::{KeyColorPolicy, KeyboardState};
use super::state::{GameState, MAX_ROWS, Outcome};
use crate::core::{Evaluation, WORD_LENGTH, Word};
use crate::wordlists::WordPool;
use log::{debug, info, trace};
use rand::Rng;

pub struct TurnController<'a> {
    state: GameState,
    pool: &'a WordPool,
    keyboard: KeyboardState,
    modal_open: bool,
}

impl<'a> TurnController<'a> {
    #[must_use]
    pub fn new(secret: Word, pool: &'a WordPool, policy: KeyColorPolicy) -> Self {
        debug!("secret word: {secret}");
        Self {
            state: GameState::new(secret),
            pool,
            keyboard: KeyboardState::new(policy),
            modal_open: false,
        }
    }

    /// Start a session with a secret drawn from the pool's candidates
    ///
    /// Returns `None` if the pool has no candidates.
    pub fn start<R: Rng + ?Sized>(
        pool: &'a WordPool,
        rng: &mut R,
        policy: KeyColorPolicy,
    ) -> Option<Self> {
        let secret = pool.choose_secret(rng)?.clone();
        Some(Self::new(secret, pool, policy))
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// True while the end-of-game dialog is showing
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Route one input event
    ///
    /// Errors are reported to the presenter as a notice, except input
    /// suppressed by the open dialog, which is dropped silently.
    ///
    /// # Errors
    /// Returns the `TurnError` that refused the input.
    pub fn handle<P: Presenter + ?Sized>(
        &mut self,
        input: Input,
        out: &mut P,
    ) -> Result<Option<Evaluation>, TurnError> {
        trace!("input {input:?} in phase {:?}", self.state.phase());
        let result = match input {
            Input::Letter(letter) => self.append_letter(letter, out).map(|()| None),
            Input::Backspace => self.remove_letter(out).map(|()| None),
            Input::Submit => self.submit_guess(out).map(Some),
            Input::CancelModal => {
                self.close_modal(out);
                Ok(None)
            }
        };
        result.map_err(|err| Self::report(err, out))
    }

    /// Route a named key, as produced by a keyboard or an on-screen key
    ///
    /// Once the game is over the game-over notice takes precedence over an
    /// unknown key.
    ///
    /// # Errors
    /// Returns the `TurnError` that refused the key.
    pub fn handle_key<P: Presenter + ?Sized>(
        &mut self,
        name: &str,
        out: &mut P,
    ) -> Result<Option<Evaluation>, TurnError> {
        match Input::from_key_name(name) {
            Ok(input) => self.handle(input, out),
            Err(err) => {
                let err = match self.ensure_playing() {
                    Ok(()) => err,
                    Err(ended) => ended,
                };
                Err(Self::report(err, out))
            }
        }
    }

    /// Write a letter into the active row
    ///
    /// A full row keeps accepting letters: each one overwrites the last slot.
    ///
    /// # Errors
    /// Fails if the game is over or `letter` is not an ASCII letter.
    pub fn append_letter<P: Presenter + ?Sized>(
        &mut self,
        letter: char,
        out: &mut P,
    ) -> Result<(), TurnError> {
        self.ensure_playing()?;
        if !letter.is_ascii_alphabetic() {
            return Err(TurnError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_lowercase();
        let row = self.state.current_row();

        if self.state.current_guess().len() < WORD_LENGTH {
            let column = self.state.current_column();
            self.state.push_letter(letter);
            out.on_letter_placed(row, column, letter);
        } else {
            self.state.overwrite_last(letter);
            out.on_letter_placed(row, WORD_LENGTH, letter);
        }
        Ok(())
    }

    /// Erase the last letter of the active row; no-op on an empty row
    ///
    /// # Errors
    /// Fails if the game is over.
    pub fn remove_letter<P: Presenter + ?Sized>(&mut self, out: &mut P) -> Result<(), TurnError> {
        self.ensure_playing()?;
        if let Some(column) = self.state.pop_letter() {
            out.on_letter_removed(self.state.current_row(), column);
        }
        Ok(())
    }

    /// Submit the active row
    ///
    /// # Errors
    /// - `IncompleteGuess` if the row has fewer than 5 letters
    /// - `InvalidWord` if the row is not an accepted word
    /// - `InputAfterGameEnd` / `InputWhileModalOpen` once the game is over
    ///
    /// No state changes on error.
    pub fn submit_guess<P: Presenter + ?Sized>(
        &mut self,
        out: &mut P,
    ) -> Result<Evaluation, TurnError> {
        self.ensure_playing()?;
        let row = self.state.current_row();

        if self.state.current_guess().len() < WORD_LENGTH {
            out.on_guess_rejected(row, Rejection::Incomplete);
            return Err(TurnError::IncompleteGuess);
        }

        let guess = match Word::from_letters(self.state.current_guess()) {
            Ok(word) if self.pool.contains(&word) => word,
            _ => {
                let text: String = self.state.current_guess().iter().collect();
                debug!("row {row}: rejected '{text}', not in accepted list");
                out.on_guess_rejected(row, Rejection::Invalid);
                return Err(TurnError::InvalidWord(text));
            }
        };

        let evaluation = Evaluation::calculate(&guess, self.state.secret());
        debug!("row {row}: {guess} {}", evaluation.to_emoji());

        out.on_guess_evaluated(row, &guess, &evaluation);
        for (letter, verdict) in self.keyboard.record(&guess, &evaluation) {
            out.on_key_verdict(letter, verdict);
        }
        self.state.record(guess, evaluation);

        if evaluation.is_completed() {
            self.finish(Outcome::Won, out);
        } else if row >= MAX_ROWS {
            self.finish(Outcome::Lost, out);
        } else {
            self.state.advance_row();
        }

        Ok(evaluation)
    }

    /// Close the end-of-game dialog; returns whether it was open
    pub fn close_modal<P: Presenter + ?Sized>(&mut self, out: &mut P) -> bool {
        if !self.modal_open {
            return false;
        }
        self.modal_open = false;
        out.on_modal_closed();
        true
    }

    fn ensure_playing(&self) -> Result<(), TurnError> {
        match self.state.outcome() {
            None => Ok(()),
            Some(_) if self.modal_open => Err(TurnError::InputWhileModalOpen),
            Some(outcome) => Err(TurnError::InputAfterGameEnd(outcome)),
        }
    }

    fn finish<P: Presenter + ?Sized>(&mut self, outcome: Outcome, out: &mut P) {
        self.state.end(outcome);
        self.modal_open = true;
        info!(
            "game {} after {} guesses, secret was {}",
            outcome.name(),
            self.state.history().len(),
            self.state.secret()
        );
        out.on_game_ended(outcome, self.state.secret());
    }

    fn report<P: Presenter + ?Sized>(err: TurnError, out: &mut P) -> TurnError {
        if err != TurnError::InputWhileModalOpen {
            out.on_notice(&err.to_string());
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};
    use crate::game::events::{EventLog, GameEvent};
    use crate::game::state::{Phase, Status};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const GUESSES: &[&str] = &[
        "stale", "beast", "crane", "house", "roses", "eerie", "alert", "erase", "geese", "robot",
    ];

    fn pool() -> WordPool {
        WordPool::new(
            words_from_slice(&["slate", "speed", "those"]),
            words_from_slice(GUESSES),
        )
    }

    fn controller<'a>(pool: &'a WordPool, secret: &str) -> TurnController<'a> {
        TurnController::new(Word::new(secret).unwrap(), pool, KeyColorPolicy::Best)
    }

    fn type_word(controller: &mut TurnController<'_>, word: &str, out: &mut EventLog) {
        for letter in word.chars() {
            controller.append_letter(letter, out).unwrap();
        }
    }

    fn guess(
        controller: &mut TurnController<'_>,
        word: &str,
        out: &mut EventLog,
    ) -> Result<Evaluation, TurnError> {
        type_word(controller, word, out);
        controller.submit_guess(out)
    }

    #[test]
    fn append_letter_places_and_advances() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        game.append_letter('C', &mut log).unwrap();
        game.append_letter('r', &mut log).unwrap();

        assert_eq!(game.state().current_guess(), &['c', 'r']);
        assert_eq!(game.state().current_column(), 3);
        assert_eq!(
            log.events(),
            &[
                GameEvent::LetterPlaced {
                    row: 1,
                    column: 1,
                    letter: 'c'
                },
                GameEvent::LetterPlaced {
                    row: 1,
                    column: 2,
                    letter: 'r'
                },
            ]
        );
    }

    #[test]
    fn append_letter_rejects_non_letters() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        assert_eq!(
            game.append_letter('3', &mut log),
            Err(TurnError::InvalidLetter('3'))
        );
        assert!(game.state().current_guess().is_empty());
        assert!(log.events().is_empty());
    }

    #[test]
    fn sixth_letter_overwrites_last_slot() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        type_word(&mut game, "cranx", &mut log);
        log.take();
        game.append_letter('e', &mut log).unwrap();

        assert_eq!(game.state().current_guess(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(game.state().current_column(), 5);
        assert_eq!(game.state().phase(), Phase::RowFull);
        assert_eq!(
            log.events(),
            &[GameEvent::LetterPlaced {
                row: 1,
                column: 5,
                letter: 'e'
            }]
        );
    }

    #[test]
    fn type_then_erase_round_trip() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        type_word(&mut game, "crane", &mut log);
        for expected_column in (1..=5).rev() {
            game.remove_letter(&mut log).unwrap();
            assert_eq!(game.state().current_column(), expected_column);
        }

        assert!(game.state().current_guess().is_empty());
        assert_eq!(game.state().current_column(), 1);
        assert_eq!(game.state().phase(), Phase::AwaitingInput);
        assert!(log.events().contains(&GameEvent::LetterRemoved { row: 1, column: 5 }));
        assert!(log.events().contains(&GameEvent::LetterRemoved { row: 1, column: 1 }));
    }

    #[test]
    fn remove_letter_on_empty_row_is_silent() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        game.remove_letter(&mut log).unwrap();
        assert!(log.events().is_empty());
        assert_eq!(game.state().current_column(), 1);
    }

    #[test]
    fn incomplete_guess_changes_nothing() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        type_word(&mut game, "cra", &mut log);
        let column = game.state().current_column();

        assert_eq!(game.submit_guess(&mut log), Err(TurnError::IncompleteGuess));
        assert_eq!(game.state().current_row(), 1);
        assert_eq!(game.state().current_column(), column);
        assert_eq!(game.state().current_guess(), &['c', 'r', 'a']);
        assert!(!game.state().is_game_ended());
        assert!(log.events().contains(&GameEvent::GuessRejected {
            row: 1,
            reason: Rejection::Incomplete
        }));
    }

    #[test]
    fn word_outside_pool_is_rejected() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        // A real word, but not in this pool
        assert_eq!(
            guess(&mut game, "table", &mut log),
            Err(TurnError::InvalidWord("table".into()))
        );
        assert_eq!(game.state().current_row(), 1);
        assert_eq!(game.state().current_guess().len(), 5);
        assert!(game.state().history().is_empty());
        assert!(log.events().contains(&GameEvent::GuessRejected {
            row: 1,
            reason: Rejection::Invalid
        }));
    }

    #[test]
    fn accepted_guess_advances_row() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        let evaluation = guess(&mut game, "CRANE", &mut log).unwrap();

        assert_eq!(
            evaluation.verdicts(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
        assert_eq!(game.state().current_row(), 2);
        assert_eq!(game.state().current_column(), 1);
        assert!(game.state().current_guess().is_empty());
        assert_eq!(game.state().history().len(), 1);
        assert_eq!(game.state().status(), Status::Guessing);
        assert!(log.events().contains(&GameEvent::GuessEvaluated {
            row: 1,
            guess: "crane".into(),
            verdicts: [Absent, Absent, Correct, Absent, Correct],
        }));
        assert!(log.events().contains(&GameEvent::KeyVerdict {
            letter: 'a',
            verdict: Correct
        }));
    }

    #[test]
    fn winning_guess_ends_game() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        guess(&mut game, "stale", &mut log).unwrap();
        let evaluation = guess(&mut game, "slate", &mut log).unwrap();

        assert!(evaluation.is_completed());
        assert!(game.state().is_completed());
        assert!(game.state().is_game_ended());
        assert_eq!(game.state().phase(), Phase::GameOverWin);
        assert_eq!(game.state().current_row(), 2);
        assert!(game.is_modal_open());
        assert_eq!(
            log.events().last(),
            Some(&GameEvent::GameEnded {
                outcome: Outcome::Won,
                secret: "slate".into()
            })
        );
    }

    #[test]
    fn six_misses_lose_the_game() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        for (i, word) in ["crane", "house", "roses", "eerie", "robot", "geese"]
            .iter()
            .enumerate()
        {
            assert_eq!(game.state().current_row(), i + 1);
            guess(&mut game, word, &mut log).unwrap();
        }

        assert!(game.state().is_game_ended());
        assert!(!game.state().is_completed());
        assert_eq!(game.state().phase(), Phase::GameOverLoss);
        assert_eq!(game.state().current_row(), MAX_ROWS);
        assert_eq!(game.state().history().len(), MAX_ROWS);
        assert_eq!(
            log.events().last(),
            Some(&GameEvent::GameEnded {
                outcome: Outcome::Lost,
                secret: "slate".into()
            })
        );
    }

    #[test]
    fn input_after_win_is_refused() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();
        guess(&mut game, "slate", &mut log).unwrap();

        // Dialog open: input suppressed without a notice
        log.take();
        assert_eq!(
            game.handle(Input::Letter('a'), &mut log),
            Err(TurnError::InputWhileModalOpen)
        );
        assert!(log.events().is_empty());

        assert_eq!(game.handle(Input::CancelModal, &mut log), Ok(None));
        assert!(!game.is_modal_open());
        assert_eq!(log.take(), [GameEvent::ModalClosed]);

        for input in [Input::Letter('a'), Input::Backspace, Input::Submit] {
            assert_eq!(
                game.handle(input, &mut log),
                Err(TurnError::InputAfterGameEnd(Outcome::Won))
            );
        }
        assert_eq!(log.notices(), ["Nice, you completed the Wordle!"; 3]);
        assert!(game.state().current_guess().is_empty());
        assert_eq!(game.state().current_row(), 1);
        assert!(game.state().is_completed());
    }

    #[test]
    fn input_after_loss_reports_out_of_turns() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();
        for word in ["crane", "house", "roses", "eerie", "robot", "geese"] {
            guess(&mut game, word, &mut log).unwrap();
        }
        game.close_modal(&mut log);
        log.take();

        assert_eq!(
            game.handle_key("x", &mut log),
            Err(TurnError::InputAfterGameEnd(Outcome::Lost))
        );
        // Unknown keys get the game-over notice too
        assert_eq!(
            game.handle_key("F5", &mut log),
            Err(TurnError::InputAfterGameEnd(Outcome::Lost))
        );
        assert_eq!(log.notices(), ["Sorry, you're out of turns!"; 2]);
    }

    #[test]
    fn handle_reports_notices() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        assert_eq!(
            game.handle(Input::Submit, &mut log),
            Err(TurnError::IncompleteGuess)
        );
        assert_eq!(
            game.handle_key("7", &mut log),
            Err(TurnError::InvalidKey("7".into()))
        );
        for key in ["t", "a", "b", "l", "e", "Enter"] {
            let _ = game.handle_key(key, &mut log);
        }
        assert_eq!(
            log.notices(),
            ["Not enough letters", "Sorry that key isn't valid", "Not a word"]
        );
    }

    #[test]
    fn handle_key_plays_a_full_turn() {
        let pool = pool();
        let mut game = controller(&pool, "speed");
        let mut log = EventLog::new();

        for key in ["E", "R", "A", "S", "E"] {
            assert_eq!(game.handle_key(key, &mut log), Ok(None));
        }
        let evaluation = game.handle_key("enter", &mut log).unwrap().unwrap();
        assert_eq!(
            evaluation.verdicts(),
            &[Present, Absent, Absent, Present, Present]
        );
        assert_eq!(game.state().current_row(), 2);
    }

    #[test]
    fn cancel_modal_while_playing_is_noop() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        assert_eq!(game.handle(Input::CancelModal, &mut log), Ok(None));
        assert!(log.events().is_empty());
    }

    #[test]
    fn key_verdicts_keep_best_color() {
        let pool = pool();
        let mut game = controller(&pool, "slate");
        let mut log = EventLog::new();

        guess(&mut game, "stale", &mut log).unwrap();
        log.take();
        guess(&mut game, "beast", &mut log).unwrap();

        assert!(log.events().contains(&GameEvent::KeyVerdict {
            letter: 's',
            verdict: Correct
        }));
        assert_eq!(game.keyboard().get('s'), Some(Correct));
    }

    #[test]
    fn key_verdicts_latest_policy_downgrades() {
        let pool = pool();
        let mut game =
            TurnController::new(Word::new("slate").unwrap(), &pool, KeyColorPolicy::Latest);
        let mut log = EventLog::new();

        guess(&mut game, "stale", &mut log).unwrap();
        guess(&mut game, "beast", &mut log).unwrap();

        assert_eq!(game.keyboard().get('s'), Some(Present));
    }

    #[test]
    fn start_draws_secret_from_candidates() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(3);
        let game = TurnController::start(&pool, &mut rng, KeyColorPolicy::Best).unwrap();
        assert!(pool.candidates().contains(game.state().secret()));

        let empty = WordPool::new(Vec::new(), words_from_slice(&[]));
        assert!(TurnController::start(&empty, &mut rng, KeyColorPolicy::Best).is_none());
    }
}
