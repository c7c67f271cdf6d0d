use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// How many most-recent turns the history re-scan may read.
    pub history_window: usize,
    /// Character cap on the concatenated history text fed to re-extraction.
    pub merged_history_chars: usize,
    /// Max entries in the embedding memo cache.
    pub embedding_cache_size: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
            merged_history_chars: defaults::DEFAULT_MERGED_HISTORY_CHARS,
            embedding_cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
