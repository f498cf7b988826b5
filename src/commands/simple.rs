//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Works over any reader/writer pair so it
//! can be driven from tests.

use crate::core::{letter_count, normalize_guess};
use crate::game::{GAME_OVER_MESSAGE, GameSession, WordSource};
use crate::output::display::print_view;
use crate::output::formatters::share_grid;
use anyhow::Result;
use std::io::{BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

/// Input of exactly `word_length` letters is always a guess, so every command
/// has a spelling of another length (`quit` or `:q`, `new` or `:n`).
fn parse_command(line: &str, word_length: usize) -> Command {
    let input = normalize_guess(line);
    if letter_count(&input) == word_length {
        return Command::Guess(line.to_string());
    }
    match input.as_str() {
        "quit" | "exit" | ":q" => Command::Quit,
        "new" | ":n" => Command::NewGame,
        _ => Command::Guess(line.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// Reads one guess per line until `quit` or end of input. `new` starts a new
/// game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(session: &mut GameSession<S>, mut input: R, mut out: W) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    let config = session.config();
    let word_length = config.word_length();
    writeln!(
        out,
        "\nGuess the {word_length}-letter word in {} tries.",
        config.max_guesses()
    )?;
    writeln!(
        out,
        "Commands: 'new' or ':n' for a new game, 'quit' or ':q' to exit\n"
    )?;

    print_view(&mut out, &session.view())?;

    loop {
        write!(out, "Guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let view = match parse_command(&line, word_length) {
            Command::Quit => break,
            Command::NewGame => {
                writeln!(out, "\nNew game started!\n")?;
                session.reset()
            }
            Command::Guess(guess) => session.submit_guess(&guess),
        };

        print_view(&mut out, &view)?;

        if view.is_over() && view.message != GAME_OVER_MESSAGE {
            writeln!(out, "{}\n", share_grid(&view))?;
            writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::game::{FixedSource, GameConfig, SequenceSource, Status};
    use std::io::Cursor;
    use std::sync::Arc;

    fn config() -> Arc<GameConfig> {
        let list = WordList::new(["crane", "slate", "irate"], 5).unwrap();
        Arc::new(GameConfig::new(list, 6).unwrap())
    }

    fn play<S: WordSource>(session: &mut GameSession<S>, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_simple(session, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("quit\n", 5), Command::Quit);
        assert_eq!(parse_command(" EXIT ", 5), Command::Quit);
        assert_eq!(parse_command("new", 5), Command::NewGame);
        assert_eq!(parse_command(":q", 5), Command::Quit);
        assert_eq!(
            parse_command("crane\n", 5),
            Command::Guess("crane\n".to_string())
        );
    }

    #[test]
    fn command_words_of_guess_length_are_guesses() {
        assert_eq!(parse_command("quit", 4), Command::Guess("quit".to_string()));
        assert_eq!(parse_command("EXIT\n", 4), Command::Guess("EXIT\n".to_string()));
        assert_eq!(parse_command("new", 3), Command::Guess("new".to_string()));
        assert_eq!(parse_command(":q", 4), Command::Quit);
        assert_eq!(parse_command(":n", 3), Command::NewGame);
        assert_eq!(parse_command("quit", 2), Command::Quit);
    }

    #[test]
    fn four_letter_game_accepts_quit_as_guess() {
        let list = WordList::new(["quit", "exit", "four"], 4).unwrap();
        let config = Arc::new(GameConfig::new(list, 6).unwrap());
        let mut session = GameSession::new(config, FixedSource::new("four", 4).unwrap());

        let output = play(&mut session, "quit\nexit\n:q\nfour\n");
        assert_eq!(session.guesses(), &["quit", "exit"]);
        assert_eq!(session.status(), Status::Active);
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn immediate_exit() {
        let mut session = GameSession::new(config(), FixedSource::new("crane", 5).unwrap());
        let output = play(&mut session, "quit\n");
        assert!(output.contains("Thanks for playing!"));
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn end_of_input_exits() {
        let mut session = GameSession::new(config(), FixedSource::new("crane", 5).unwrap());
        let output = play(&mut session, "slate\n");
        assert_eq!(session.guesses(), &["slate"]);
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn winning_game_prints_share_grid() {
        let mut session = GameSession::new(config(), FixedSource::new("crane", 5).unwrap());
        let output = play(&mut session, "slate\ncrane\nquit\n");

        assert_eq!(session.status(), Status::Won);
        assert!(output.contains("Congratulations! You guessed it: CRANE"));
        assert!(output.contains("Wordle 2/6"));
    }

    #[test]
    fn invalid_guess_shows_message() {
        let mut session = GameSession::new(config(), FixedSource::new("crane", 5).unwrap());
        let output = play(&mut session, "abc\nquit\n");
        assert!(output.contains("Guess must be 5 letters long."));
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn new_game_resets_session() {
        let source = SequenceSource::new(["crane", "slate"], 5).unwrap();
        let mut session = GameSession::new(config(), source);
        let output = play(&mut session, "crane\nnew\nirate\n");

        assert!(output.contains("New game started!"));
        assert_eq!(session.target(), "slate");
        assert_eq!(session.guesses(), &["irate"]);
    }

    #[test]
    fn guesses_after_win_are_rejected() {
        let mut session = GameSession::new(config(), FixedSource::new("crane", 5).unwrap());
        let output = play(&mut session, "crane\nslate\n");
        assert!(output.contains(GAME_OVER_MESSAGE));
        assert_eq!(session.guesses().len(), 1);
    }
}
