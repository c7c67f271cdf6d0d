//! Blended semantic/keyword scorer.
//!
//! Signals: cosine similarity against the query embedding (negatives
//! clamped to 0) and keyword overlap saturating at `keyword_cap` hits.
//! Blend 0.8/0.2 when both exist; cosine alone when only the embedding
//! exists; keyword score discounted when it is the only signal.

use exin_core::config::RetrievalConfig;
use exin_core::models::InstructionTemplate;
use exin_embeddings::similarity::cosine_score;

/// Which signals produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSignal {
    Blended,
    EmbeddingOnly,
    KeywordOnly,
}

/// A scored candidate, referencing the template it was computed for.
#[derive(Debug, Clone)]
pub struct ScoredTemplate<'a> {
    pub template: &'a InstructionTemplate,
    /// Final score in [0.0, 1.0].
    pub score: f64,
    pub signal: ScoreSignal,
}

/// Count how many of the item's keywords occur in the query text
/// (case-insensitive substring, each keyword at most once).
pub fn keyword_matches(query_text: &str, keywords: &[String]) -> usize {
    let query_lower = query_text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| {
            let kw = kw.trim().to_lowercase();
            !kw.is_empty() && query_lower.contains(&kw)
        })
        .count()
}

/// Keyword score: hits capped at `cap`, normalized to [0, 1].
pub fn keyword_score(query_text: &str, keywords: &[String], cap: usize) -> f64 {
    let cap = cap.max(1);
    (keyword_matches(query_text, keywords) as f64 / cap as f64).min(1.0)
}

/// Score every candidate that carries at least one usable signal.
///
/// Items whose stored embedding has a different dimensionality than the
/// query embedding score zero on the semantic signal (treated as no
/// similarity, not an error). Items with no signal at all are skipped.
pub fn score_candidates<'a>(
    query_embedding: Option<&[f32]>,
    query_text: Option<&str>,
    candidates: &'a [InstructionTemplate],
    config: &RetrievalConfig,
) -> Vec<ScoredTemplate<'a>> {
    let mut scored: Vec<ScoredTemplate<'a>> = candidates
        .iter()
        .filter_map(|item| {
            let semantic = match (query_embedding, item.embedding.as_deref()) {
                (Some(q), Some(v)) => Some(cosine_score(q, v)),
                _ => None,
            };
            let lexical = match query_text {
                Some(text) if !item.keywords.is_empty() => {
                    Some(keyword_score(text, &item.keywords, config.keyword_cap))
                }
                _ => None,
            };

            let (score, signal) = match (semantic, lexical) {
                (Some(cos), Some(kw)) => (
                    config.semantic_weight * cos + config.keyword_weight * kw,
                    ScoreSignal::Blended,
                ),
                (Some(cos), None) => (cos, ScoreSignal::EmbeddingOnly),
                (None, Some(kw)) => (
                    kw * config.keyword_only_discount,
                    ScoreSignal::KeywordOnly,
                ),
                (None, None) => return None,
            };

            Some(ScoredTemplate {
                template: item,
                score: score.clamp(0.0, 1.0),
                signal,
            })
        })
        .collect();

    // Sort by score descending.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
