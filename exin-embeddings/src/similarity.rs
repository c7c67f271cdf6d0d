//! Cosine similarity with defensive input handling.
//!
//! Dimension mismatches and zero-norm vectors score 0.0 — they mean
//! "no similarity", never an error.

/// Cosine similarity between two vectors, in [-1.0, 1.0].
///
/// Returns 0.0 for empty inputs, mismatched dimensionality, or zero-norm
/// vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(-1.0, 1.0)
}

/// Cosine similarity clamped at zero, for scoring. Anti-correlated vectors
/// contribute nothing rather than a negative score.
pub fn cosine_score(a: &[f32], b: &[f32]) -> f64 {
    cosine_similarity(a, b).max(0.0)
}
