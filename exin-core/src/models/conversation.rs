use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prior exchange in a session. History is append-only and caller-owned;
/// the core reads a bounded recent window and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_query: String,
    pub assistant_response: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(user_query: impl Into<String>, assistant_response: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            assistant_response: assistant_response.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The most recent `window` turns of a history, oldest first.
pub fn recent_window(history: &[ConversationTurn], window: usize) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(window);
    &history[start..]
}
