//! Ordered provider chain with try-next-on-failure degradation.
//!
//! Providers are tried most-preferred first; an unavailable, failing, or
//! empty-answering provider yields to the next one. The chain itself
//! implements [`IEmbeddingProvider`], so the memo service and every caller
//! stay unaware of how many providers sit behind it.

use async_trait::async_trait;
use exin_core::errors::{CollaboratorError, ExinResult};
use exin_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

/// Ordered fallback chain over embedding providers.
pub struct ProviderChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn IEmbeddingProvider>>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl IEmbeddingProvider for ProviderChain {
    /// Try each provider in order; the first non-empty embedding wins.
    /// Errors only when every provider is exhausted.
    async fn embed(&self, text: &str) -> ExinResult<Vec<f32>> {
        for provider in &self.providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), "provider unavailable, trying next");
                continue;
            }
            match provider.embed(text).await {
                Ok(vec) if !vec.is_empty() => return Ok(vec),
                Ok(_) => {
                    warn!(provider = provider.name(), "empty embedding, trying next");
                }
                Err(err) => {
                    warn!(provider = provider.name(), error = %err, "provider failed, trying next");
                }
            }
        }
        Err(CollaboratorError::Embedding {
            reason: "all embedding providers exhausted".to_owned(),
        }
        .into())
    }

    /// Dimensionality of the preferred provider; downstream similarity
    /// treats any mismatch as zero similarity.
    fn dimensions(&self) -> usize {
        self.providers.first().map(|p| p.dimensions()).unwrap_or(0)
    }

    fn name(&self) -> &str {
        "provider-chain"
    }

    fn is_available(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubProvider {
        name: &'static str,
        available: bool,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn boxed(
            name: &'static str,
            available: bool,
            fail: bool,
            calls: &Arc<AtomicUsize>,
        ) -> Box<dyn IEmbeddingProvider> {
            Box::new(Self {
                name,
                available,
                fail,
                calls: Arc::clone(calls),
            })
        }
    }

    #[async_trait]
    impl IEmbeddingProvider for StubProvider {
        async fn embed(&self, _text: &str) -> ExinResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CollaboratorError::Embedding {
                    reason: "quota exhausted".into(),
                }
                .into());
            }
            Ok(vec![1.0, 0.0])
        }

        fn dimensions(&self) -> usize {
            2
        }

        fn name(&self) -> &str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }
    }

    #[tokio::test]
    async fn preferred_provider_answers_first() {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let backup_calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![
            StubProvider::boxed("primary", true, false, &primary_calls),
            StubProvider::boxed("backup", true, false, &backup_calls),
        ]);

        assert!(chain.embed("kakao").await.is_ok());
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backup_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_provider_degrades_to_the_next() {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let backup_calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![
            StubProvider::boxed("primary", true, true, &primary_calls),
            StubProvider::boxed("backup", true, false, &backup_calls),
        ]);

        assert_eq!(chain.embed("kakao").await.unwrap(), vec![1.0, 0.0]);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unavailable_provider_is_skipped_without_a_call() {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let backup_calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![
            StubProvider::boxed("primary", false, false, &primary_calls),
            StubProvider::boxed("backup", true, false, &backup_calls),
        ]);

        assert!(chain.embed("kakao").await.is_ok());
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_chain_is_an_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![
            StubProvider::boxed("primary", true, true, &calls),
            StubProvider::boxed("backup", false, false, &calls),
        ]);

        assert!(chain.embed("kakao").await.is_err());
        assert!(!chain.is_empty());
        assert_eq!(chain.len(), 2);
    }

    #[tokio::test]
    async fn chain_availability_and_dimensions_come_from_members() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![StubProvider::boxed("only", false, false, &calls)]);
        assert!(!chain.is_available());
        assert_eq!(chain.dimensions(), 2);

        let empty = ProviderChain::new(Vec::new());
        assert_eq!(empty.dimensions(), 0);
        assert!(empty.embed("kakao").await.is_err());
    }

    #[tokio::test]
    async fn memo_service_over_a_chain_caches_the_degraded_answer() {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let backup_calls = Arc::new(AtomicUsize::new(0));
        let chain = ProviderChain::new(vec![
            StubProvider::boxed("primary", true, true, &primary_calls),
            StubProvider::boxed("backup", true, false, &backup_calls),
        ]);
        let service = crate::EmbeddingService::new(&chain, 16);

        assert!(service.embed("berapa bea keluar kakao").await.is_some());
        assert!(service.embed("berapa bea keluar kakao").await.is_some());
        assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
    }
}
