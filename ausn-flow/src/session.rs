//! Per-chat dialogue state.
//!
//! One chat runs at most one calculation at a time. The store keeps a
//! lock per session so events for the same chat serialize while distinct
//! chats proceed independently; the outer map lock only covers lookup,
//! insert and removal.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Transport-agnostic conversation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a dialogue currently stands.
///
/// Completion and cancellation are not states: the session is removed
/// from the store instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    /// Waiting for the annual income figure.
    AwaitingIncome,
    /// Income is stored; waiting for the annual expenses figure.
    AwaitingExpenses,
}

/// A single chat's in-progress calculation.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: DialogueState,

    /// Accepted income, set on the transition out of
    /// [`DialogueState::AwaitingIncome`].
    pub pending_income: Option<Decimal>,

    /// When the dialogue started. Logged on completion; idle sessions are
    /// never expired.
    pub started_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: DialogueState::AwaitingIncome,
            pending_income: None,
            started_at: Utc::now(),
        }
    }
}

/// Keyed store of live sessions.
///
/// Lock order: the map lock is never taken while holding a session lock
/// except in [`SessionStore::remove`], which is safe because no path
/// takes a session lock while holding the map lock.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<ChatId, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session for the chat, replacing any existing one.
    pub fn create(&self, chat: ChatId) -> Arc<Mutex<Session>> {
        let session = Arc::new(Mutex::new(Session::new()));
        self.sessions
            .lock()
            .unwrap()
            .insert(chat, Arc::clone(&session));
        session
    }

    /// Returns the chat's live session, if any.
    pub fn get(&self, chat: ChatId) -> Option<Arc<Mutex<Session>>> {
        self.sessions.lock().unwrap().get(&chat).cloned()
    }

    /// Removes the chat's session. Returns whether one existed.
    pub fn remove(&self, chat: ChatId) -> bool {
        self.sessions.lock().unwrap().remove(&chat).is_some()
    }

    /// Whether the chat currently has a session.
    pub fn contains(&self, chat: ChatId) -> bool {
        self.sessions.lock().unwrap().contains_key(&chat)
    }
}
