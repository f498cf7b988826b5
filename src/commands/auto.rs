//! Automatic play
//!
//! Plays many games with a naive strategy (always guess the first listed word
//! that is consistent with every feedback row so far) and collects statistics.
//! Games run in parallel; each one gets its own seeded target.

use crate::core::{Feedback, evaluate};
use crate::error::ConfigError;
use crate::game::{FixedSource, GameConfig, GameSession, Status, WordSource, choose_word};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of one automatically played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Statistics over many games
#[derive(Debug, Clone)]
pub struct AutoStatistics {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    /// `guess_distribution[n]` is the number of games won in `n` guesses
    pub guess_distribution: Vec<usize>,
    pub duration: Duration,
}

impl AutoStatistics {
    fn from_outcomes(outcomes: &[GameOutcome], max_guesses: usize, duration: Duration) -> Self {
        let mut guess_distribution = vec![0; max_guesses + 1];
        let mut won = 0;
        for outcome in outcomes.iter().filter(|o| o.won) {
            won += 1;
            if let Some(slot) = guess_distribution.get_mut(outcome.guesses.len()) {
                *slot += 1;
            }
        }

        Self {
            games: outcomes.len(),
            won,
            lost: outcomes.len() - won,
            guess_distribution,
            duration,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.won as f64)
    }
}

/// Next guess: first word consistent with the history and not yet tried
///
/// Falls back to any untried word when nothing is consistent (the target is
/// not in the list).
#[must_use]
pub fn next_guess<'a>(
    words: &'a [String],
    guesses: &[String],
    feedback: &[Vec<Feedback>],
) -> Option<&'a str> {
    let untried = |w: &&String| !guesses.contains(*w);
    let consistent = |w: &&String| {
        guesses
            .iter()
            .zip(feedback)
            .all(|(guess, row)| evaluate(guess, w) == *row)
    };

    words
        .iter()
        .filter(untried)
        .find(consistent)
        .or_else(|| words.iter().find(untried))
        .map(String::as_str)
}

/// Play one game to completion
pub fn play_game<S: WordSource>(session: &mut GameSession<S>) -> GameOutcome {
    while !session.status().is_over() {
        let words = session.config().word_list().words();
        let Some(guess) = next_guess(words, session.guesses(), session.feedback()) else {
            break;
        };
        let guess = guess.to_string();
        session.submit_guess(&guess);
    }

    GameOutcome {
        target: session.target().to_string(),
        guesses: session.guesses().to_vec(),
        won: session.status() == Status::Won,
    }
}

/// Play `games` games with targets drawn from `seed`
///
/// # Errors
///
/// Returns [`ConfigError::EmptyWordList`] if no target can be chosen.
pub fn run_auto(
    config: &Arc<GameConfig>,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<AutoStatistics, ConfigError> {
    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let target = choose_word(config.word_list().words(), &mut rng)?;
            let source = FixedSource::new(&target, config.word_length())?;
            let mut session = GameSession::new(Arc::clone(config), source);
            let outcome = play_game(&mut session);
            debug!(
                "Auto game {i}: {} in {} guesses ({})",
                outcome.target,
                outcome.guesses.len(),
                if outcome.won { "won" } else { "lost" }
            );
            pb.inc(1);
            Ok::<_, ConfigError>(outcome)
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;
    pb.finish_and_clear();

    Ok(AutoStatistics::from_outcomes(
        &outcomes,
        config.max_guesses(),
        start.elapsed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    fn config(max_guesses: usize) -> Arc<GameConfig> {
        let list = WordList::new(["crane", "slate", "irate", "trace", "brick"], 5).unwrap();
        Arc::new(GameConfig::new(list, max_guesses).unwrap())
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn next_guess_first_word_when_no_history() {
        let words = words(&["crane", "slate"]);
        assert_eq!(next_guess(&words, &[], &[]), Some("crane"));
    }

    #[test]
    fn next_guess_filters_by_feedback() {
        let list = words(&["crane", "slate", "brick"]);
        let guesses = words(&["crane"]);
        let feedback = vec![evaluate("crane", "brick")];
        assert_eq!(next_guess(&list, &guesses, &feedback), Some("brick"));
    }

    #[test]
    fn next_guess_falls_back_to_untried() {
        let list = words(&["crane", "slate"]);
        let guesses = words(&["crane"]);
        // Feedback no listed word can produce
        let feedback = vec![vec![Feedback::Green; 5]];
        assert_eq!(next_guess(&list, &guesses, &feedback), Some("slate"));
    }

    #[test]
    fn next_guess_none_when_exhausted() {
        let list = words(&["crane"]);
        let guesses = words(&["crane"]);
        let feedback = vec![vec![Feedback::Gray; 5]];
        assert_eq!(next_guess(&list, &guesses, &feedback), None);
    }

    #[test]
    fn play_game_wins_with_listed_target() {
        let mut session = GameSession::new(config(6), FixedSource::new("brick", 5).unwrap());
        let outcome = play_game(&mut session);
        assert!(outcome.won);
        assert_eq!(outcome.guesses.last().map(String::as_str), Some("brick"));
    }

    #[test]
    fn play_game_stops_at_guess_limit() {
        let mut session = GameSession::new(config(1), FixedSource::new("brick", 5).unwrap());
        let outcome = play_game(&mut session);
        assert!(!outcome.won);
        assert_eq!(outcome.guesses.len(), 1);
    }

    #[test]
    fn play_game_unknown_target_terminates() {
        let mut session = GameSession::new(config(6), FixedSource::new("zzzzz", 5).unwrap());
        let outcome = play_game(&mut session);
        assert!(!outcome.won);
        assert_eq!(outcome.guesses.len(), 5);
        assert_eq!(session.status(), Status::Active);
    }

    #[test]
    fn run_auto_collects_statistics() {
        let stats = run_auto(&config(6), 20, 3, false).unwrap();
        assert_eq!(stats.games, 20);
        assert_eq!(stats.won + stats.lost, 20);
        assert_eq!(stats.guess_distribution.len(), 7);
        assert_eq!(stats.guess_distribution.iter().sum::<usize>(), stats.won);
        // Five words and six guesses: every listed target is found
        assert_eq!(stats.won, 20);
        assert!(stats.average_guesses().is_some());
        assert!((stats.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn run_auto_is_deterministic_for_seed() {
        let a = run_auto(&config(3), 30, 11, false).unwrap();
        let b = run_auto(&config(3), 30, 11, false).unwrap();
        assert_eq!(a.won, b.won);
        assert_eq!(a.guess_distribution, b.guess_distribution);
    }

    #[test]
    fn empty_statistics() {
        let stats = AutoStatistics::from_outcomes(&[], 6, Duration::ZERO);
        assert_eq!(stats.games, 0);
        assert!(stats.average_guesses().is_none());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
