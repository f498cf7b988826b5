//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, evaluate single guesses, or run automatic
//! games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::io;
use std::sync::Arc;
use wordle_game::{
    commands::{evaluate_words, run_auto, run_simple},
    game::{
        DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, FixedSource, GameConfig, GameSession,
        RandomSource, WordSource,
    },
    interactive::{App, run_tui},
    output::{print_auto_result, print_evaluation},
    wordlists::{embedded_list, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with green/yellow/gray feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Use this target word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Show the feedback for one guess against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Play games automatically and report statistics
    Auto {
        /// Number of games to play
        #[arg(default_value = "100")]
        games: usize,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the game configuration from the -l, -m and -w flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let word_list = match cli.wordlist.as_str() {
        "embedded" => embedded_list(cli.length)
            .with_context(|| format!("no embedded words have {} letters", cli.length))?,
        path => load_from_file(path, cli.length)?,
    };
    debug!("Using word list: {word_list}");
    Ok(GameConfig::new(word_list, cli.max_guesses)?)
}

/// Target source from the --word and --seed flags
fn word_source(cli: &Cli, config: &GameConfig) -> Result<Box<dyn WordSource + Send>> {
    if let Some(word) = &cli.word {
        let source = FixedSource::new(word, config.word_length()).context("invalid --word")?;
        return Ok(Box::new(source));
    }
    Ok(match cli.seed {
        Some(seed) => Box::new(RandomSource::seeded(seed)),
        None => Box::new(RandomSource::from_entropy()),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            let config = Arc::new(load_config(&cli)?);
            let session = GameSession::new(Arc::clone(&config), word_source(&cli, &config)?);
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let config = Arc::new(load_config(&cli)?);
            let mut session = GameSession::new(Arc::clone(&config), word_source(&cli, &config)?);
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Evaluate { guess, target } => {
            let result = evaluate_words(guess, target)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Auto { games } => {
            let config = Arc::new(load_config(&cli)?);
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Playing {games} games (seed {seed})...");
            let stats = run_auto(&config, *games, seed, true)?;
            print_auto_result(&stats);
            Ok(())
        }
    }
}
