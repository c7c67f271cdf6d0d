//! In-process memo cache keyed by content hash.
//!
//! Injectable per request-handling process; best-effort by contract — a
//! miss only costs redundant work, never correctness. Any implementation
//! with the same content-addressed contract (including a distributed one)
//! can replace it without touching decision logic.

use std::time::Duration;

use moka::sync::Cache;

/// Content-addressed key for a memo entry.
pub fn content_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Content-addressed key over several parts (e.g. embedding bytes plus
/// query text). Parts are length-prefixed so boundaries are unambiguous.
pub fn compound_key(parts: &[&[u8]]) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hasher.finalize().to_hex().to_string()
}

/// In-memory memo cache. Keys are blake3 content hashes.
pub struct MemoCache<V: Clone + Send + Sync + 'static> {
    cache: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> MemoCache<V> {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, value: V) {
        self.cache.insert(key, value);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
