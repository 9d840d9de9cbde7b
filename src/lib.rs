//! Wordle Clone
//!
//! A single-player Wordle for the terminal: guess the secret 5-letter word in
//! six tries, with colored tiles and an on-screen keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Evaluation, Verdict, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &secret);
//! assert_eq!(evaluation.verdicts()[2], Verdict::Correct);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Turn controller and game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
