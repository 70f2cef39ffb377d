use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::models::{ChatMessage, ChatRole};

#[derive(Default)]
struct Session {
    // Held for a whole exchange; serializes turns
    turn: Arc<AsyncMutex<()>>,
    // Held only while copying or pushing
    messages: Mutex<Vec<ChatMessage>>,
}

impl Session {
    fn messages(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Conversation logs keyed by session id.
///
/// Writes go through a [`SessionTurn`], and a session has at most one turn
/// open at a time, so its messages are appended in turn order. Reads take a
/// snapshot and never wait for an open turn. Sessions are never evicted.
#[derive(Default)]
pub struct ChatHistory {
    sessions: Mutex<HashMap<String, Arc<Session>>>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Arc<Session>>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Open a turn on a session, creating it if needed. Waits while another
    /// turn of the same session is open.
    pub async fn begin_turn(&self, session_id: &str) -> SessionTurn {
        let session = self.sessions().entry(session_id.to_string()).or_default().clone();
        let guard = Arc::clone(&session.turn).lock_owned().await;

        SessionTurn {
            session,
            _guard: guard,
        }
    }

    /// Snapshot of a session's messages; empty if the session is unknown.
    pub fn get(&self, session_id: &str) -> Vec<ChatMessage> {
        let session = self.sessions().get(session_id).cloned();
        session.map(|s| s.messages().clone()).unwrap_or_default()
    }
}

/// Exclusive write access to one session, released on drop.
pub struct SessionTurn {
    session: Arc<Session>,
    _guard: OwnedMutexGuard<()>,
}

impl SessionTurn {
    pub fn append(&mut self, role: ChatRole, text: impl Into<String>) {
        self.session.messages().push(ChatMessage {
            role,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.session.messages().clone()
    }
}
