use serde::{Deserialize, Serialize};

/// A retrieved regulatory text chunk, most relevant first in any list the
/// extractor receives. Owned by the corpus store; the core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatoryChunk {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl RegulatoryChunk {
    /// Excerpt of the chunk content for result reporting, capped at
    /// `max_chars` with an ellipsis when truncated.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let head: String = self.content.chars().take(max_chars).collect();
            format!("{head}...")
        }
    }
}
