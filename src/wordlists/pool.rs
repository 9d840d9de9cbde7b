//! Word source for a game session
//!
//! Pairs the candidate secrets with the set of words accepted as guesses.

use super::loader::words_from_slice;
use super::{ACCEPTED, CANDIDATES};
use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Candidate secrets plus the accepted-guess set
///
/// Candidates are always accepted, so a drawn secret can be guessed.
#[derive(Debug, Clone)]
pub struct WordPool {
    candidates: Vec<Word>,
    accepted: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordPool {
    #[must_use]
    pub fn new(candidates: Vec<Word>, accepted: impl IntoIterator<Item = Word>) -> Self {
        let mut accepted: FxHashSet<[u8; WORD_LENGTH]> =
            accepted.into_iter().map(|w| *w.chars()).collect();
        accepted.extend(candidates.iter().map(|w| *w.chars()));

        Self {
            candidates,
            accepted,
        }
    }

    /// Pool built from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(CANDIDATES), words_from_slice(ACCEPTED))
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Check whether `text` is an accepted guess
    ///
    /// Case-insensitive; anything that is not exactly 5 letters is rejected.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::wordlists::WordPool;
    ///
    /// let pool = WordPool::embedded();
    /// assert!(pool.is_accepted("CRANE"));
    /// assert!(!pool.is_accepted("crn"));
    /// assert!(!pool.is_accepted("zzzzz"));
    /// ```
    #[must_use]
    pub fn is_accepted(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.accepted.contains(word.chars())
    }

    /// Draw a secret uniformly at random from the candidates
    ///
    /// Returns `None` if there are no candidates.
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.candidates.choose(rng)
    }
}
