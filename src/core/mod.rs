//! Core domain types for Wordle
//!
//! Pure types with no display dependency: words, verdicts and the guess evaluator.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
