//! Formatting utilities for terminal output

use crate::core::{Evaluation, Verdict, Word};
use crate::game::{GuessRecord, KeyboardState, MAX_ROWS, Outcome, QWERTY_ROWS};
use colored::{ColoredString, Colorize};

/// Color one letter cell by its verdict
#[must_use]
pub fn colored_letter(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => cell.black().on_green().bold(),
        Some(Verdict::Present) => cell.black().on_yellow().bold(),
        Some(Verdict::Absent) => cell.white().on_bright_black(),
        None => cell.normal(),
    }
}

/// Format a guess as a row of colored tiles
#[must_use]
pub fn colored_tiles(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .iter()
        .zip(evaluation.verdicts())
        .map(|(&letter, &verdict)| colored_letter(letter as char, Some(verdict)).to_string())
        .collect()
}

/// Format the keyboard, one line per row, colored by known verdicts
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| colored_letter(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Share header such as "Wordle 3/6" or "Wordle X/6"
#[must_use]
pub fn share_header(outcome: Outcome, guesses: usize) -> String {
    match outcome {
        Outcome::Won => format!("Wordle {guesses}/{MAX_ROWS}"),
        Outcome::Lost => format!("Wordle X/{MAX_ROWS}"),
    }
}

/// Emoji grid of every accepted guess, one row per line
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.evaluation.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
