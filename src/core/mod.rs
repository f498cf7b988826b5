//! Core domain types for Wordle
//!
//! Guess evaluation, word normalization and feedback aggregation. Everything
//! here is pure and synchronous.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, evaluate, is_solved, try_evaluate};
pub use letters::used_letter_colors;
pub use word::{WordList, letter_count, normalize_guess, validate_word};
