//! # exin-core
//!
//! Foundation crate for the Exin export-assistant decision engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ExinConfig;
pub use errors::{ExinError, ExinResult};
pub use intent::Intent;
pub use models::{
    ConversationTurn, DutyCalculationResult, ExtractedDutyFacts, InstructionTemplate,
    RegulatoryChunk, Similarity, TariffRule,
};
