use crate::errors::ExinResult;
use crate::models::{InstructionTemplate, RegulatoryChunk};

/// Read-only access to the instruction template corpus, pre-filtered to
/// active records.
pub trait ITemplateCorpus: Send + Sync {
    /// All active templates, ingestion-normalized (canonical keywords,
    /// parsed embeddings).
    fn active_templates(&self) -> ExinResult<Vec<InstructionTemplate>>;

    /// Record one use of a template. Persistence is the store's concern;
    /// a failing store must not fail the turn.
    fn record_usage(&self, template_id: i64) -> ExinResult<()>;
}

/// Read-only similarity search over regulatory chunks.
pub trait IRegulatoryCorpus: Send + Sync {
    /// The `limit` most similar active chunks at or above `floor`,
    /// most relevant first.
    fn top_chunks(
        &self,
        query_embedding: &[f32],
        floor: f64,
        limit: usize,
    ) -> ExinResult<Vec<RegulatoryChunk>>;
}
