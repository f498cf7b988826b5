//! Game configuration

use crate::core::WordList;
use crate::error::ConfigError;
use crate::wordlists;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Validated configuration shared by every session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    word_list: WordList,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a configuration from an already validated word list
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroMaxGuesses`] if `max_guesses` is zero.
    pub fn new(word_list: WordList, max_guesses: usize) -> Result<Self, ConfigError> {
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        Ok(Self {
            word_list,
            max_guesses,
        })
    }

    /// Embedded word list with the default length and guess limit
    ///
    /// # Errors
    /// Only fails if the embedded list itself is broken.
    pub fn embedded() -> Result<Self, ConfigError> {
        let word_list = wordlists::embedded_list(DEFAULT_WORD_LENGTH)?;
        Self::new(word_list, DEFAULT_MAX_GUESSES)
    }

    /// Replace the guess limit
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroMaxGuesses`] if `max_guesses` is zero.
    pub fn with_max_guesses(self, max_guesses: usize) -> Result<Self, ConfigError> {
        Self::new(self.word_list, max_guesses)
    }

    /// Replace the word list (and with it the word length)
    #[must_use]
    pub fn with_word_list(self, word_list: WordList) -> Self {
        Self { word_list, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_list.word_length()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.word_list
    }
}
