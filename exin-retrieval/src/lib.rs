//! # exin-retrieval
//!
//! Template retrieval for the decision engine: the blended
//! semantic/keyword scorer, the staged selection fallback chain, and the
//! conversation context selector that keeps multi-turn sessions
//! topic-aware without unbounded context growth.

pub mod context;
pub mod scorer;
pub mod selector;

pub use context::ContextSelector;
pub use selector::{SelectedTemplate, SelectionStage, TemplateSelector};
