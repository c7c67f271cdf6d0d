//! Default values for all config sections.

// Retrieval / blended scorer.
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.8;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.2;
pub const DEFAULT_KEYWORD_CAP: usize = 3;
pub const DEFAULT_BLENDED_FLOOR: f64 = 0.55;
pub const DEFAULT_EMBEDDING_ONLY_FLOOR: f64 = 0.7;
pub const DEFAULT_KEYWORD_ONLY_DISCOUNT: f64 = 0.95;
pub const DEFAULT_SELECTION_CACHE_SIZE: u64 = 512;

// Conversation context selector.
pub const DEFAULT_CONTEXT_MAX_TURNS: usize = 3;
pub const DEFAULT_CONTEXT_SIMILARITY_FLOOR: f64 = 0.35;
pub const DEFAULT_HISTORY_WINDOW: usize = 10;
pub const DEFAULT_USER_SNIPPET_CHARS: usize = 300;
pub const DEFAULT_ASSISTANT_SNIPPET_CHARS: usize = 400;
pub const DEFAULT_EMBED_TEXT_CHARS: usize = 800;

// Regulatory text extraction.
pub const DEFAULT_ANCHOR_WINDOW_CHARS: usize = 40;
pub const DEFAULT_TIER_LOOKAHEAD_CHARS: usize = 120;
pub const DEFAULT_MAX_CHUNKS: usize = 8;
pub const DEFAULT_CHUNK_SIMILARITY_FLOOR: f64 = 0.35;
pub const DEFAULT_ORACLE_CHUNK_CHARS: usize = 800;
pub const DEFAULT_ORACLE_MAX_CHUNKS: usize = 5;

// Dispatcher.
pub const DEFAULT_MERGED_HISTORY_CHARS: usize = 4000;

// Embedding cache.
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 2048;
