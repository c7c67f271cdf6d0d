use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation context selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Maximum relevant turns returned per query.
    pub max_turns: usize,
    /// Cosine floor below which a turn is dropped.
    pub similarity_floor: f64,
    /// How many most-recent turns are considered at all.
    pub history_window: usize,
    /// Character cap for the user side of a snippet.
    pub user_snippet_chars: usize,
    /// Character cap for the assistant side of a snippet.
    pub assistant_snippet_chars: usize,
    /// Character cap for the concatenation handed to the embedder.
    pub embed_text_chars: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_turns: defaults::DEFAULT_CONTEXT_MAX_TURNS,
            similarity_floor: defaults::DEFAULT_CONTEXT_SIMILARITY_FLOOR,
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
            user_snippet_chars: defaults::DEFAULT_USER_SNIPPET_CHARS,
            assistant_snippet_chars: defaults::DEFAULT_ASSISTANT_SNIPPET_CHARS,
            embed_text_chars: defaults::DEFAULT_EMBED_TEXT_CHARS,
        }
    }
}
