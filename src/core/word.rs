//! Word normalization and validated word lists
//!
//! Everything that enters the game is lowercased once, here, before any
//! comparison or storage.

use crate::error::ConfigError;
use std::fmt;

/// Normalize raw user input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use wordle_game::core::normalize_guess;
///
/// assert_eq!(normalize_guess("  CrAnE \n"), "crane");
/// ```
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in letters (not bytes)
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Normalize one word and check it is usable as a target of `word_length`
/// letters
///
/// # Errors
/// Returns [`ConfigError::ZeroWordLength`],
/// [`ConfigError::WordLengthMismatch`] or [`ConfigError::InvalidCharacters`].
///
/// # Examples
/// ```
/// use wordle_game::core::validate_word;
///
/// assert_eq!(validate_word(" Crane ", 5).unwrap(), "crane");
/// assert!(validate_word("crane", 3).is_err());
/// ```
pub fn validate_word(raw: &str, word_length: usize) -> Result<String, ConfigError> {
    if word_length == 0 {
        return Err(ConfigError::ZeroWordLength);
    }
    let word = normalize_guess(raw);
    let actual = letter_count(&word);
    if actual != word_length {
        return Err(ConfigError::WordLengthMismatch {
            word,
            expected: word_length,
            actual,
        });
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(ConfigError::InvalidCharacters(word));
    }
    Ok(word)
}

/// An immutable, non-empty list of lowercase words of one fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    word_length: usize,
}

impl WordList {
    /// Build a word list, lowercasing every entry
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `word_length` is zero
    /// - the list is empty
    /// - an entry has the wrong length
    /// - an entry contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::WordList;
    ///
    /// let list = WordList::new(["CRANE", "slate"], 5).unwrap();
    /// assert_eq!(list.words(), &["crane", "slate"]);
    ///
    /// assert!(WordList::new(["crane", "toolong"], 5).is_err());
    /// assert!(WordList::new(Vec::<String>::new(), 5).is_err());
    /// ```
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }

        let words = words
            .into_iter()
            .map(|raw| validate_word(raw.as_ref(), word_length))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self { words, word_length })
    }

    /// Length shared by every word in the list
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty list cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` (in any case) is in the list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_guess(word);
        self.words.iter().any(|w| *w == word)
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words of {} letters", self.words.len(), self.word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_guess("CRANE"), "crane");
        assert_eq!(normalize_guess("  slate\t"), "slate");
        assert_eq!(normalize_guess(""), "");
    }

    #[test]
    fn letter_count_uses_chars() {
        assert_eq!(letter_count("crane"), 5);
        assert_eq!(letter_count("ñandú"), 5);
    }

    #[test]
    fn word_list_lowercases_entries() {
        let list = WordList::new(["CRANE", "Slate", " irate "], 5).unwrap();
        assert_eq!(list.words(), &["crane", "slate", "irate"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.word_length(), 5);
    }

    #[test]
    fn word_list_rejects_empty() {
        assert_eq!(
            WordList::new(Vec::<&str>::new(), 5),
            Err(ConfigError::EmptyWordList)
        );
    }

    #[test]
    fn word_list_rejects_zero_length() {
        assert_eq!(
            WordList::new(["crane"], 0),
            Err(ConfigError::ZeroWordLength)
        );
    }

    #[test]
    fn word_list_rejects_wrong_length() {
        assert_eq!(
            WordList::new(["crane", "cranes"], 5),
            Err(ConfigError::WordLengthMismatch {
                word: "cranes".to_string(),
                expected: 5,
                actual: 6,
            })
        );
    }

    #[test]
    fn word_list_rejects_non_alphabetic() {
        assert_eq!(
            WordList::new(["cran3"], 5),
            Err(ConfigError::InvalidCharacters("cran3".to_string()))
        );
    }

    #[test]
    fn word_list_other_lengths() {
        let list = WordList::new(["cat", "dog"], 3).unwrap();
        assert_eq!(list.word_length(), 3);
        assert_eq!(list.words(), &["cat", "dog"]);
    }

    #[test]
    fn word_list_contains_is_case_insensitive() {
        let list = WordList::new(["crane"], 5).unwrap();
        assert!(list.contains("CRANE"));
        assert!(list.contains(" crane "));
        assert!(!list.contains("slate"));
    }

    #[test]
    fn validate_word_checks_length_and_letters() {
        assert_eq!(validate_word(" CRANE\n", 5), Ok("crane".to_string()));
        assert_eq!(
            validate_word("ab", 5),
            Err(ConfigError::WordLengthMismatch {
                word: "ab".to_string(),
                expected: 5,
                actual: 2,
            })
        );
        assert_eq!(
            validate_word("ab-cd", 5),
            Err(ConfigError::InvalidCharacters("ab-cd".to_string()))
        );
        assert_eq!(validate_word("", 0), Err(ConfigError::ZeroWordLength));
    }

    #[test]
    fn word_list_display() {
        let list = WordList::new(["crane", "slate"], 5).unwrap();
        assert_eq!(list.to_string(), "2 words of 5 letters");
    }
}
