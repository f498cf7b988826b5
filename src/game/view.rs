//! Render-ready snapshot of a session

use super::session::Status;
use crate::core::Feedback;
use std::collections::BTreeMap;

/// Everything a front end needs to draw the game
///
/// The target word is only included once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub target_revealed: bool,
    pub target: Option<String>,
    pub guesses: Vec<String>,
    pub feedback: Vec<Vec<Feedback>>,
    pub status: Status,
    pub message: String,
    pub used_letters: BTreeMap<char, Feedback>,
    pub word_length: usize,
    pub max_guesses: usize,
}

impl GameView {
    /// Number of guesses still available
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Submitted guesses paired with their feedback rows
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Feedback])> {
        self.guesses
            .iter()
            .map(String::as_str)
            .zip(self.feedback.iter().map(Vec::as_slice))
    }

    /// Best feedback seen for `letter`, if it was ever guessed
    #[must_use]
    pub fn letter_state(&self, letter: char) -> Option<Feedback> {
        self.used_letters
            .get(&letter.to_lowercase().next().unwrap_or(letter))
            .copied()
    }
}
