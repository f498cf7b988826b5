//! Evaluate a single guess against a target

use crate::core::{Feedback, normalize_guess, try_evaluate};
use crate::error::GuessError;

/// Feedback for one guess/target pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluateResult {
    pub guess: String,
    pub target: String,
    pub feedback: Vec<Feedback>,
}

/// Normalize both words and evaluate them
///
/// # Errors
///
/// Returns [`GuessError::InvalidLength`] if the words differ in length.
pub fn evaluate_words(guess: &str, target: &str) -> Result<EvaluateResult, GuessError> {
    let guess = normalize_guess(guess);
    let target = normalize_guess(target);
    let feedback = try_evaluate(&guess, &target)?;

    Ok(EvaluateResult {
        guess,
        target,
        feedback,
    })
}
