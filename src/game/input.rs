//! Discrete input events and turn errors

use super::state::Outcome;
use thiserror::Error;

/// One keypress or click on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Submit,
    Backspace,
    CancelModal,
}

impl Input {
    /// Map a key name to an input
    ///
    /// Accepts `enter`, `backspace`, `escape` (any case) and single ASCII letters.
    ///
    /// # Errors
    /// Returns `TurnError::InvalidKey` for anything else.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::Input;
    ///
    /// assert_eq!(Input::from_key_name("Enter").unwrap(), Input::Submit);
    /// assert_eq!(Input::from_key_name("Q").unwrap(), Input::Letter('q'));
    /// assert!(Input::from_key_name("7").is_err());
    /// ```
    pub fn from_key_name(name: &str) -> Result<Self, TurnError> {
        let key = name.to_ascii_lowercase();
        match key.as_str() {
            "enter" => Ok(Self::Submit),
            "backspace" => Ok(Self::Backspace),
            "escape" | "esc" => Ok(Self::CancelModal),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_ascii_lowercase() => Ok(Self::Letter(letter)),
                    _ => Err(TurnError::InvalidKey(name.to_string())),
                }
            }
        }
    }
}

/// Recoverable input errors; `Display` is the notice shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not a word")]
    InvalidWord(String),
    #[error("{}", .0.notice())]
    InputAfterGameEnd(Outcome),
    #[error("Close the dialog first")]
    InputWhileModalOpen,
    #[error("Sorry that key isn't valid")]
    InvalidKey(String),
    #[error("Sorry that key isn't valid")]
    InvalidLetter(char),
}
