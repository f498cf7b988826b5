//! Target word selection
//!
//! Sessions never call a global RNG directly; they ask a [`WordSource`], so
//! tests can pin the target word.

use crate::core::{WordList, normalize_guess, validate_word};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Something that can pick the next target word
///
/// Implementations must return a lowercase word of `words.word_length()`
/// letters.
pub trait WordSource {
    /// Pick a target word from a (non-empty) list
    fn choose_word(&mut self, words: &WordList) -> String;
}

/// Pick one word uniformly at random from a raw slice
///
/// # Errors
/// Returns [`ConfigError::EmptyWordList`] if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::game::choose_word;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = choose_word(&["crane", "slate"], &mut rng).unwrap();
/// assert!(word == "crane" || word == "slate");
///
/// assert!(choose_word::<&str, _>(&[], &mut rng).is_err());
/// ```
pub fn choose_word<S, R>(words: &[S], rng: &mut R) -> Result<String, ConfigError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    words
        .choose(rng)
        .map(|w| normalize_guess(w.as_ref()))
        .ok_or(ConfigError::EmptyWordList)
}

/// Uniform random choice backed by any [`Rng`]
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic sequence of choices for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WordSource for RandomSource<R> {
    fn choose_word(&mut self, words: &WordList) -> String {
        let index = self.rng.random_range(0..words.len());
        words.words()[index].clone()
    }
}

/// Always returns the same word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    word: String,
}

impl FixedSource {
    /// # Errors
    /// Returns a [`ConfigError`] unless `word` is `word_length` letters.
    pub fn new(word: &str, word_length: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            word: validate_word(word, word_length)?,
        })
    }
}

impl WordSource for FixedSource {
    fn choose_word(&mut self, _words: &WordList) -> String {
        self.word.clone()
    }
}

/// Cycles through a fixed sequence of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    words: Vec<String>,
    next: usize,
}

impl SequenceSource {
    /// # Errors
    /// Returns [`ConfigError::EmptyWordList`] if `words` is empty, or the
    /// first problem with a word that is not `word_length` letters.
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| validate_word(w.as_ref(), word_length))
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words, next: 0 })
    }
}

impl WordSource for SequenceSource {
    fn choose_word(&mut self, _words: &WordList) -> String {
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn choose_word(&mut self, words: &WordList) -> String {
        (**self).choose_word(words)
    }
}
