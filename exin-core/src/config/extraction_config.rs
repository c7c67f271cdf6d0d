use serde::{Deserialize, Serialize};

use super::defaults;

/// Regulatory text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Max distance (chars) between an anchor term and the percent it covers.
    pub anchor_window_chars: usize,
    /// Lookahead window (chars) between a tier threshold and its percent.
    pub tier_lookahead_chars: usize,
    /// Max regulatory chunks consulted per calculation.
    pub max_chunks: usize,
    /// Similarity floor for chunk retrieval.
    pub chunk_similarity_floor: f64,
    /// Per-chunk character cap when building the oracle reference text.
    pub oracle_chunk_chars: usize,
    /// How many top chunks the oracle reference text may include.
    pub oracle_max_chunks: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            anchor_window_chars: defaults::DEFAULT_ANCHOR_WINDOW_CHARS,
            tier_lookahead_chars: defaults::DEFAULT_TIER_LOOKAHEAD_CHARS,
            max_chunks: defaults::DEFAULT_MAX_CHUNKS,
            chunk_similarity_floor: defaults::DEFAULT_CHUNK_SIMILARITY_FLOOR,
            oracle_chunk_chars: defaults::DEFAULT_ORACLE_CHUNK_CHARS,
            oracle_max_chunks: defaults::DEFAULT_ORACLE_MAX_CHUNKS,
        }
    }
}
