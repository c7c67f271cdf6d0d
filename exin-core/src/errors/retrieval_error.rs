/// Retrieval subsystem errors.
///
/// "Below threshold" is not an error — selection returns `None` and the
/// caller moves to the next fallback stage. These variants fire only when
/// every stage is exhausted.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("template corpus is empty")]
    EmptyCorpus,

    #[error("all selection fallback stages exhausted")]
    FallbacksExhausted,
}
