//! Multiple sessions keyed by id
//!
//! The store does no locking of its own. A serving layer that handles
//! requests concurrently should put it behind a `Mutex`.

use super::config::GameConfig;
use super::selector::WordSource;
use super::session::GameSession;
use super::view::GameView;
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque session handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Independent game sessions sharing one configuration
#[derive(Debug)]
pub struct SessionStore<S> {
    config: Arc<GameConfig>,
    sessions: FxHashMap<SessionId, GameSession<S>>,
    next_id: u64,
}

impl<S: WordSource> SessionStore<S> {
    #[must_use]
    pub fn new(config: Arc<GameConfig>) -> Self {
        Self {
            config,
            sessions: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Start a new session; ids are never reused
    pub fn create(&mut self, source: S) -> (SessionId, GameView) {
        let id = SessionId(self.next_id);
        self.next_id += 1;

        let session = GameSession::new(Arc::clone(&self.config), source);
        let view = session.view();
        self.sessions.insert(id, session);
        debug!("Created session {id}");
        (id, view)
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&GameSession<S>> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut GameSession<S>> {
        self.sessions.get_mut(&id)
    }

    /// Submit a guess to one session; `None` if the id is unknown
    pub fn submit(&mut self, id: SessionId, guess: &str) -> Option<GameView> {
        self.sessions
            .get_mut(&id)
            .map(|session| session.submit_guess(guess))
    }

    /// Reset one session; `None` if the id is unknown
    pub fn reset(&mut self, id: SessionId) -> Option<GameView> {
        self.sessions.get_mut(&id).map(GameSession::reset)
    }

    pub fn remove(&mut self, id: SessionId) -> Option<GameSession<S>> {
        let removed = self.sessions.remove(&id);
        if removed.is_some() {
            debug!("Removed session {id}");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::game::selector::FixedSource;
    use crate::game::session::Status;

    fn store() -> SessionStore<FixedSource> {
        let list = WordList::new(["abcde", "fghij"], 5).unwrap();
        SessionStore::new(Arc::new(GameConfig::new(list, 6).unwrap()))
    }

    #[test]
    fn sessions_are_isolated() {
        let mut store = store();
        let (a, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        let (b, _) = store.create(FixedSource::new("fghij", 5).unwrap());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        let view = store.submit(a, "abcde").unwrap();
        assert_eq!(view.status, Status::Won);

        let view = store.submit(b, "abcde").unwrap();
        assert_eq!(view.status, Status::Active);
        assert_eq!(store.get(b).unwrap().guesses().len(), 1);
    }

    #[test]
    fn unknown_ids_return_none() {
        let mut store = store();
        let (id, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        assert!(store.remove(id).is_some());
        assert!(store.submit(id, "abcde").is_none());
        assert!(store.reset(id).is_none());
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn reset_only_touches_one_session() {
        let mut store = store();
        let (a, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        let (b, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        store.submit(a, "fghij");
        store.submit(b, "fghij");

        let view = store.reset(a).unwrap();
        assert!(view.guesses.is_empty());
        assert_eq!(store.get(b).unwrap().guesses().len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = store();
        let (a, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        store.remove(a);
        let (b, _) = store.create(FixedSource::new("abcde", 5).unwrap());
        assert!(b.value() > a.value());
        assert_eq!(b.to_string(), "#2");
    }
}
