//! Interactive TUI
//!
//! Presents a game as a tile board with an on-screen keyboard.

pub mod app;
pub mod rendering;

pub use app::{App, Board, run_tui};
