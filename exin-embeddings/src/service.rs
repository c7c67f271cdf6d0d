//! EmbeddingService — memoizing front for an `IEmbeddingProvider`.
//!
//! Provider failures are downgraded to "no embedding available" so callers
//! can continue on a lower-fidelity retrieval stage.

use exin_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

use crate::cache::{content_key, MemoCache};

/// Memoizing embedding service shared by one request-handling process.
pub struct EmbeddingService<'a> {
    provider: &'a dyn IEmbeddingProvider,
    cache: MemoCache<Vec<f32>>,
}

impl<'a> EmbeddingService<'a> {
    pub fn new(provider: &'a dyn IEmbeddingProvider, cache_size: u64) -> Self {
        Self {
            provider,
            cache: MemoCache::new(cache_size),
        }
    }

    /// Embed `text`, consulting the memo cache first.
    ///
    /// Returns `None` when the provider is unavailable or fails —
    /// the caller decides which fallback stage to use.
    pub async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let key = content_key(text);
        if let Some(cached) = self.cache.get(&key) {
            debug!(provider = self.provider.name(), "embedding cache hit");
            return Some(cached);
        }

        if !self.provider.is_available() {
            warn!(provider = self.provider.name(), "embedding provider unavailable");
            return None;
        }

        match self.provider.embed(text).await {
            Ok(vec) if !vec.is_empty() => {
                self.cache.insert(key, vec.clone());
                Some(vec)
            }
            Ok(_) => {
                warn!(provider = self.provider.name(), "provider returned empty embedding");
                None
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "embedding failed");
                None
            }
        }
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }
}
