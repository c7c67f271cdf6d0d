//! Error taxonomy for the decision engine.
//!
//! Per-subsystem enums unified under [`ExinError`]. Recoverable conditions
//! (no match, malformed stored data, incomplete facts) are modeled as normal
//! return values, not errors — only exhausted fallbacks surface here.

mod calculation_error;
mod collaborator_error;
mod retrieval_error;

pub use calculation_error::CalculationError;
pub use collaborator_error::CollaboratorError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the Exin workspace.
#[derive(Debug, thiserror::Error)]
pub enum ExinError {
    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used across the workspace.
pub type ExinResult<T> = Result<T, ExinError>;
