use async_trait::async_trait;

use crate::errors::ExinResult;

/// Semantic classification collaborator.
///
/// Returns the raw (expected-JSON) reply; the core parses it with
/// `QueryAnalysis::parse_or_fallback` so malformed output degrades to the
/// defined fallback analysis instead of failing the turn.
#[async_trait]
pub trait IIntentClassifier: Send + Sync {
    /// Classify a query given pruned conversation context.
    async fn classify(&self, query: &str, context: &str) -> ExinResult<String>;
}
