//! Word lists for the game
//!
//! Provides the embedded default list and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordList;
use crate::error::ConfigError;

/// Embedded words of `word_length` letters as a validated list
///
/// # Errors
/// Returns [`ConfigError::EmptyWordList`] when no embedded word has that
/// length.
pub fn embedded_list(word_length: usize) -> Result<WordList, ConfigError> {
    WordList::new(loader::words_from_slice(WORDS, word_length), word_length)
}
