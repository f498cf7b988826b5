//! Display functions for game views and command results

use super::formatters::{KEYBOARD_ROWS, colorize_letter, feedback_to_emoji, format_guess_colored};
use crate::commands::{AutoStatistics, EvaluateResult};
use crate::game::{GameView, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the guess grid, keyboard and message for a view
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_view<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    writeln!(out)?;
    for (guess, row) in view.rows() {
        writeln!(out, "  {}", format_guess_colored(guess, row))?;
    }
    let empty_row = " _ ".repeat(view.word_length);
    for _ in view.guesses.len()..view.max_guesses {
        writeln!(out, "  {}", empty_row.dimmed())?;
    }

    writeln!(out)?;
    for (indent, letters) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = letters
            .chars()
            .map(|letter| colorize_letter(letter, view.letter_state(letter)).to_string())
            .collect();
        writeln!(out, "  {}{keys}", "  ".repeat(indent))?;
    }
    writeln!(out)?;

    if !view.message.is_empty() {
        let message = match view.status {
            Status::Won => view.message.green().bold(),
            Status::Lost => view.message.red().bold(),
            Status::Active => view.message.yellow(),
        };
        writeln!(out, "{message}")?;
    }

    Ok(())
}

/// Print the result of evaluating one guess
pub fn print_evaluation(result: &EvaluateResult) {
    println!(
        "\n{}  {}",
        format_guess_colored(&result.guess, &result.feedback),
        feedback_to_emoji(&result.feedback)
    );
    let names: Vec<&str> = result.feedback.iter().map(|fb| fb.name()).collect();
    println!(
        "{} vs {}: [{}]",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold(),
        names.join(", ")
    );
}

/// Print statistics from automatic play
pub fn print_auto_result(stats: &AutoStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "AUTO PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Games played:   {}", stats.games);
    println!(
        "  Won:            {} ({:.1}%)",
        stats.won.to_string().green().bold(),
        stats.win_rate() * 100.0
    );
    println!("  Lost:           {}", stats.lost.to_string().red());
    if let Some(avg) = stats.average_guesses() {
        println!("  Average:        {avg:.2} guesses per win");
    }
    println!("  Time:           {:.2?}", stats.duration);

    println!("\n  Guess distribution:");
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if max_count == 0 {
            0
        } else {
            count * 40 / max_count
        };
        println!(
            "    {guesses:>2}: {} {count}",
            "█".repeat(width.max(usize::from(count > 0))).green()
        );
    }
    println!();
}
