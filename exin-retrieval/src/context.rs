//! Conversation context selector.
//!
//! Picks the few prior turns most relevant to the current query so
//! downstream generation stays topic-aware without unbounded context
//! growth. A turn whose embedding fails is skipped, never fatal.

use exin_core::config::ContextConfig;
use exin_core::models::{recent_window, ConversationTurn};
use exin_embeddings::similarity::cosine_similarity;
use exin_embeddings::EmbeddingService;
use tracing::debug;

/// Selects the top-k relevant history snippets for the current query.
pub struct ContextSelector {
    config: ContextConfig,
}

impl ContextSelector {
    pub fn new(config: ContextConfig) -> Self {
        Self { config }
    }

    /// Return up to `max_turns` snippets formatted
    /// `User: …\nAssistant: …`, most relevant first, all at or above the
    /// similarity floor. Empty when the query cannot be embedded.
    pub async fn select(
        &self,
        query: &str,
        history: &[ConversationTurn],
        embeddings: &EmbeddingService<'_>,
    ) -> Vec<String> {
        if history.is_empty() {
            return Vec::new();
        }

        // Embed the current query once; no embedding means no pruning
        // signal, so return nothing rather than unranked noise.
        let Some(query_embedding) = embeddings.embed(query).await else {
            return Vec::new();
        };

        let mut scored: Vec<(f64, String)> = Vec::new();
        for turn in recent_window(history, self.config.history_window) {
            let candidate_text = truncate_chars(
                &format!("{} \n {}", turn.user_query, turn.assistant_response),
                self.config.embed_text_chars,
            );
            let Some(turn_embedding) = embeddings.embed(&candidate_text).await else {
                continue;
            };
            let sim = cosine_similarity(&query_embedding, &turn_embedding);
            if sim >= self.config.similarity_floor {
                let snippet = format!(
                    "User: {}\nAssistant: {}",
                    truncate_chars(&turn.user_query, self.config.user_snippet_chars),
                    truncate_chars(&turn.assistant_response, self.config.assistant_snippet_chars),
                );
                scored.push((sim, snippet));
            }
        }

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        debug!(
            candidates = scored.len(),
            kept = scored.len().min(self.config.max_turns),
            "history snippets selected"
        );
        scored
            .into_iter()
            .take(self.config.max_turns)
            .map(|(_, snippet)| snippet)
            .collect()
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
