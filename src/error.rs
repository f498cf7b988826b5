//! Error types
//!
//! Only configuration problems are real errors. Bad guesses are turned into
//! session messages by [`GameSession`](crate::game::GameSession) and never
//! reach the caller as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the game configuration or word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word length must be at least 1")]
    ZeroWordLength,

    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,

    /// An entry does not match the configured word length.
    #[error("word \"{word}\" has {actual} letters, expected {expected}")]
    WordLengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("word \"{0}\" contains non-alphabetic characters")]
    InvalidCharacters(String),
}

/// Rejection from the strict evaluator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess has {guess} letters but the target has {target}")]
    InvalidLength { guess: usize, target: usize },
}

/// Failure while reading a word list from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} is unusable")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}
