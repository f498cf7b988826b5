//! Game session state and lifecycle

use super::config::GameConfig;
use super::selector::WordSource;
use super::view::GameView;
use crate::core::{Feedback, evaluate, is_solved, letter_count, normalize_guess, used_letter_colors};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Shown when a guess arrives after the game has ended
pub const GAME_OVER_MESSAGE: &str = "Game is over. Start a new game.";

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Won,
    Lost,
}

impl Status {
    /// `true` for the terminal states
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One game: a hidden target, the guesses made so far and their feedback
///
/// Invalid input never returns an error. It leaves the history untouched and
/// explains itself through [`message`](Self::message).
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use wordle_game::game::{FixedSource, GameConfig, GameSession, Status};
///
/// let config = Arc::new(GameConfig::embedded().unwrap());
/// let mut session = GameSession::new(config, FixedSource::new("crane", 5).unwrap());
///
/// let view = session.submit_guess("slate");
/// assert_eq!(view.status, Status::Active);
///
/// let view = session.submit_guess("CRANE");
/// assert_eq!(view.status, Status::Won);
/// assert!(view.message.contains("CRANE"));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    config: Arc<GameConfig>,
    source: S,
    target: String,
    guesses: Vec<String>,
    feedback: Vec<Vec<Feedback>>,
    status: Status,
    message: String,
}

impl<S: WordSource> GameSession<S> {
    /// Create a session and start its first game
    pub fn new(config: Arc<GameConfig>, source: S) -> Self {
        let mut session = Self {
            config,
            source,
            target: String::new(),
            guesses: Vec::new(),
            feedback: Vec::new(),
            status: Status::Active,
            message: String::new(),
        };
        session.reset();
        session
    }

    /// Start a new game with a freshly chosen target
    pub fn reset(&mut self) -> GameView {
        self.target = self.source.choose_word(self.config.word_list());
        self.guesses.clear();
        self.feedback.clear();
        self.status = Status::Active;
        self.message.clear();
        debug!("New target word: {}", self.target);
        self.view()
    }

    /// Submit a raw guess
    ///
    /// The guess is trimmed and lowercased. It is rejected (with a message,
    /// and without touching the history) when the game is already over or the
    /// length is wrong.
    pub fn submit_guess(&mut self, raw: &str) -> GameView {
        let guess = normalize_guess(raw);
        self.message.clear();

        if self.status.is_over() {
            debug!("Rejected guess {guess:?}: game is over");
            self.message = GAME_OVER_MESSAGE.to_string();
            return self.view();
        }

        let word_length = self.config.word_length();
        if letter_count(&guess) != word_length {
            debug!("Rejected guess {guess:?}: expected {word_length} letters");
            self.message = format!("Guess must be {word_length} letters long.");
            return self.view();
        }

        let row = evaluate(&guess, &self.target);
        let solved = is_solved(&row);
        self.guesses.push(guess);
        self.feedback.push(row);

        if solved {
            self.status = Status::Won;
            self.message = format!(
                "Congratulations! You guessed it: {}",
                self.target.to_uppercase()
            );
            info!("Game won in {} guesses", self.guesses.len());
        } else if self.guesses.len() >= self.config.max_guesses() {
            self.status = Status::Lost;
            self.message = format!("Game Over. The word was: {}", self.target.to_uppercase());
            info!("Game lost, target was {}", self.target);
        }

        self.view()
    }
}

impl<S> GameSession<S> {
    /// Snapshot of the current state for rendering
    #[must_use]
    pub fn view(&self) -> GameView {
        let revealed = self.status.is_over();
        GameView {
            target_revealed: revealed,
            target: revealed.then(|| self.target.clone()),
            guesses: self.guesses.clone(),
            feedback: self.feedback.clone(),
            status: self.status,
            message: self.message.clone(),
            used_letters: self.used_letters(),
            word_length: self.config.word_length(),
            max_guesses: self.config.max_guesses(),
        }
    }

    /// Best feedback per guessed letter, recomputed from the history
    #[must_use]
    pub fn used_letters(&self) -> BTreeMap<char, Feedback> {
        used_letter_colors(&self.guesses, &self.feedback)
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Vec<Feedback>] {
        &self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses().saturating_sub(self.guesses.len())
    }
}
