//! Process-local session store.
//!
//! Maps caller-chosen session ids to their context. Contexts are created on
//! first mention and never evicted; nothing survives a process restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Per-session context map.
///
/// Currently write-only: the orchestrator creates it on first touch but
/// reads nothing back from prior turns.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub context: HashMap<String, serde_json::Value>,
}

/// Concurrent-safe mapping from session id to [`SessionContext`].
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionContext>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a context exists for the session id.
    ///
    /// Idempotent: an existing context is left untouched. Safe under
    /// concurrent writers; both racers observe an empty fresh context.
    pub fn ensure(&self, session_id: &str) {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionContext::default);
    }

    /// True if the session id has been seen before.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(session_id)
    }

    /// Number of known sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when no session has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
