//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::{GameView, Status};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the keyboard panel
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|fb| fb.to_emoji()).collect()
}

/// Color one upper-cased letter by its feedback
#[must_use]
pub fn colorize_letter(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match feedback {
        Some(Feedback::Green) => text.black().on_green().bold(),
        Some(Feedback::Yellow) => text.black().on_yellow().bold(),
        Some(Feedback::Gray) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn format_guess_colored(guess: &str, row: &[Feedback]) -> String {
    guess
        .chars()
        .zip(row)
        .map(|(letter, &fb)| colorize_letter(letter, Some(fb)).to_string())
        .collect()
}

/// Shareable result grid, e.g. `Wordle 4/6` followed by emoji rows
///
/// Lost games report `X/6`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use wordle_game::game::{FixedSource, GameConfig, GameSession};
/// use wordle_game::output::formatters::share_grid;
///
/// let config = Arc::new(GameConfig::embedded().unwrap());
/// let mut session = GameSession::new(config, FixedSource::new("about", 5).unwrap());
/// let view = session.submit_guess("about");
///
/// assert_eq!(share_grid(&view), "Wordle 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(view: &GameView) -> String {
    let score = match view.status {
        Status::Won => view.guesses.len().to_string(),
        Status::Lost | Status::Active => "X".to_string(),
    };
    let mut out = format!("Wordle {score}/{}", view.max_guesses);
    for row in &view.feedback {
        out.push('\n');
        out.push_str(&feedback_to_emoji(row));
    }
    out
}
