//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{WordList, letter_count};
use crate::error::LoadError;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// One word per line. Blank lines and `#` comments are ignored; entries of
/// the wrong length or with non-letters are skipped with a warning.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Config`] if no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, word_length);
    info!("Loaded {} words from {}", words.len(), path.display());

    WordList::new(words, word_length).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse word-per-line text, keeping only usable entries
#[must_use]
pub fn parse_words(content: &str, word_length: usize) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = line.to_lowercase();
            if is_usable(&word, word_length) {
                Some(word)
            } else {
                warn!("Skipping word list entry {line:?}");
                None
            }
        })
        .collect()
}

/// Keep the entries of an embedded slice that have `word_length` letters
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|w| is_usable(w, word_length))
        .collect()
}

fn is_usable(word: &str, word_length: usize) -> bool {
    letter_count(word) == word_length && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "SLATE", "irate"];
        let words = words_from_slice(input, 5);
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input, 5);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let content = "# header\ncrane\n\n  SLATE  \ncat\n";
        assert_eq!(parse_words(content, 5), vec!["crane", "slate"]);
        assert_eq!(parse_words(content, 3), vec!["cat"]);
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("wordle_game_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Crane\nslate\nbad\n").unwrap();
        }

        let list = load_from_file(&path, 5).unwrap();
        assert_eq!(list.words(), &["crane", "slate"]);

        let err = load_from_file(&path, 7).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config {
                source: ConfigError::EmptyWordList,
                ..
            }
        ));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("/nonexistent/wordle_game/words.txt", 5).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
