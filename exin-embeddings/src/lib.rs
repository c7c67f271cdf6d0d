//! # exin-embeddings
//!
//! Embedding plumbing for the decision engine: cosine similarity with
//! defensive dimension handling, ingestion-boundary parsing of loosely
//! stored vectors, an ordered provider fallback chain, and a memoizing
//! service over any `IEmbeddingProvider`.

pub mod cache;
pub mod engine;
pub mod parse;
pub mod service;
pub mod similarity;

pub use cache::MemoCache;
pub use engine::ProviderChain;
pub use service::EmbeddingService;
pub use similarity::cosine_similarity;
