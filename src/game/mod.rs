//! Game lifecycle
//!
//! Configuration, target selection, per-game state and the view handed to
//! front ends.

mod config;
mod selector;
mod session;
mod store;
mod view;

pub use config::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig};
pub use selector::{FixedSource, RandomSource, SequenceSource, WordSource, choose_word};
pub use session::{GAME_OVER_MESSAGE, GameSession, Status};
pub use store::{SessionId, SessionStore};
pub use view::GameView;
