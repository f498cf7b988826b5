//! Command implementations

pub mod auto;
pub mod evaluate;
pub mod simple;

pub use auto::{AutoStatistics, GameOutcome, play_game, run_auto};
pub use evaluate::{EvaluateResult, evaluate_words};
pub use simple::run_simple;
