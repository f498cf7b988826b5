//! Wordle Game
//!
//! A Wordle engine: guess evaluation with correct repeated-letter handling, a
//! game session that tracks turns and end states, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_game::core::{Feedback, evaluate};
//! use wordle_game::game::{FixedSource, GameConfig, GameSession, Status};
//!
//! // Evaluate a guess directly
//! assert_eq!(evaluate("eabcd", "abcde"), vec![Feedback::Yellow; 5]);
//!
//! // Or play a session
//! let config = Arc::new(GameConfig::embedded().unwrap());
//! let mut session = GameSession::new(config, FixedSource::new("about", 5).unwrap());
//! let view = session.submit_guess("ABOUT");
//! assert_eq!(view.status, Status::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session lifecycle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
