/// External collaborator failures (embedding provider, semantic classifier,
/// tariff oracle, stores).
///
/// Callers catch these at the call site and continue on the next-lower
/// fallback; they escalate only when no fallback remains.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("embedding provider failed: {reason}")]
    Embedding { reason: String },

    #[error("semantic classifier failed: {reason}")]
    Classification { reason: String },

    #[error("tariff oracle failed: {reason}")]
    Oracle { reason: String },

    #[error("store lookup failed: {reason}")]
    Store { reason: String },
}
