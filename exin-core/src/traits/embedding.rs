use async_trait::async_trait;

use crate::errors::ExinResult;

/// Embedding generation provider.
///
/// Failure (network, quota) must be treated by callers as "no embedding
/// available", never as fatal for the turn.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    async fn embed(&self, text: &str) -> ExinResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool {
        true
    }
}
