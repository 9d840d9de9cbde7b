//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation_report, print_game_over, print_guess_row, print_keyboard};
