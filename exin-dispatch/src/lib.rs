//! # exin-dispatch
//!
//! The per-turn orchestrator: keyword-first intent classification with a
//! semantic collaborator fallback, slot-filling for the export-duty and
//! export-proposal flows, and dispatch to the document-lookup and
//! free-form-generation collaborators. Every turn ends in exactly one
//! [`TurnOutcome`].

pub mod classify;
pub mod document;
pub mod facts;
pub mod orchestrator;
pub mod proposal;

pub use classify::KeywordClassifier;
pub use document::{extract_document_facts, DocumentFacts};
pub use facts::extract_duty_facts;
pub use orchestrator::{Dispatcher, SlotFacts, TurnOutcome};
pub use proposal::extract_proposal_facts;
