//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, CANDIDATES, CANDIDATES_COUNT};
pub use pool::WordPool;
