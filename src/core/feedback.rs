//! Guess evaluation
//!
//! Each position of a guess is classified as:
//! - Gray (letter not in the target, or all its occurrences already used)
//! - Yellow (letter in the target, wrong position)
//! - Green (letter in the correct position)

use crate::error::GuessError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single letter position
///
/// Variants are ordered by priority, so `Gray < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Gray,
    Yellow,
    Green,
}

impl Feedback {
    /// Priority used when aggregating feedback across guesses
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Lowercase color name, as used by styling layers
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Emoji square for this classification
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether a feedback row is a win
#[must_use]
pub fn is_solved(row: &[Feedback]) -> bool {
    !row.is_empty() && row.iter().all(|&fb| fb == Feedback::Green)
}

/// Evaluate `guess` against `target`
///
/// Both words are lowercased before comparison. If the lengths differ the
/// result is an all-gray row as long as the guess; callers that need to know
/// about the mismatch should use [`try_evaluate`].
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact matches green and use up their letters
/// 3. Second pass, left to right: mark yellow while the letter still has
///    unused occurrences in the target, otherwise gray
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, evaluate};
///
/// let row = evaluate("ababa", "aabbb");
/// assert_eq!(
///     row,
///     vec![
///         Feedback::Green,
///         Feedback::Yellow,
///         Feedback::Yellow,
///         Feedback::Green,
///         Feedback::Gray,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> Vec<Feedback> {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    let target: Vec<char> = target.to_lowercase().chars().collect();

    if guess.len() != target.len() {
        return vec![Feedback::Gray; guess.len()];
    }

    let mut result: Vec<Option<Feedback>> = vec![None; guess.len()];
    let mut remaining = letter_counts(&target);

    // First pass: greens
    for (i, (g, t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = Some(Feedback::Green);
            if let Some(count) = remaining.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows and grays
    for (i, letter) in guess.iter().enumerate() {
        if result[i].is_some() {
            continue;
        }
        result[i] = match remaining.get_mut(letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Some(Feedback::Yellow)
            }
            _ => Some(Feedback::Gray),
        };
    }

    result
        .into_iter()
        .map(|fb| fb.unwrap_or(Feedback::Gray))
        .collect()
}

/// Evaluate `guess` against `target`, rejecting mismatched lengths
///
/// Lengths are compared after lowercasing, which can change the letter count
/// of some characters.
///
/// # Errors
/// Returns [`GuessError::InvalidLength`] when the two words differ in length.
pub fn try_evaluate(guess: &str, target: &str) -> Result<Vec<Feedback>, GuessError> {
    let guess = guess.to_lowercase();
    let target = target.to_lowercase();
    let guess_len = guess.chars().count();
    let target_len = target.chars().count();
    if guess_len != target_len {
        return Err(GuessError::InvalidLength {
            guess: guess_len,
            target: target_len,
        });
    }
    Ok(evaluate(&guess, &target))
}

fn letter_counts(word: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in word {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
