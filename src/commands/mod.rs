//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluationReport, evaluate_words};
pub use simple::run_simple;
