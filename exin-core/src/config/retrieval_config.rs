use serde::{Deserialize, Serialize};

use super::defaults;

/// Blended scorer and template selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of the cosine-similarity signal in the blended score.
    pub semantic_weight: f64,
    /// Weight of the keyword-overlap signal in the blended score.
    pub keyword_weight: f64,
    /// Keyword hits at which the keyword score saturates at 1.0.
    pub keyword_cap: usize,
    /// Minimum blended (or embedding-within-blend) score for a match.
    pub blended_floor: f64,
    /// Absolute cosine floor for the embedding-only fallback stage.
    pub embedding_only_floor: f64,
    /// Multiplier applied when only the keyword signal is available.
    pub keyword_only_discount: f64,
    /// Max entries in the selection memo cache.
    pub selection_cache_size: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            keyword_cap: defaults::DEFAULT_KEYWORD_CAP,
            blended_floor: defaults::DEFAULT_BLENDED_FLOOR,
            embedding_only_floor: defaults::DEFAULT_EMBEDDING_ONLY_FLOOR,
            keyword_only_discount: defaults::DEFAULT_KEYWORD_ONLY_DISCOUNT,
            selection_cache_size: defaults::DEFAULT_SELECTION_CACHE_SIZE,
        }
    }
}
