//! Collaborator contracts.
//!
//! The async traits ([`IEmbeddingProvider`], [`IIntentClassifier`],
//! [`ITariffOracle`]) are the only suspension points in a turn; the store
//! traits are synchronous read-only lookups over pre-filtered data.

mod classifier;
mod corpus;
mod embedding;
mod market;
mod oracle;

pub use classifier::IIntentClassifier;
pub use corpus::{IRegulatoryCorpus, ITemplateCorpus};
pub use embedding::IEmbeddingProvider;
pub use market::IMarketStore;
pub use oracle::ITariffOracle;
