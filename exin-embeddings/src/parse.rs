//! Ingestion-boundary parsing of loosely stored embedding vectors.
//!
//! The source system stores vectors as text for compatibility: a JSON
//! array, a bare bracketed list, or a Postgres-array literal. Everything
//! downstream sees only `Option<Vec<f32>>` — malformed storage yields
//! `None` and the item is skipped, never a failure.

/// Parse a stored embedding string into a vector.
///
/// Accepts `[0.1, -0.2]`, `{0.1,-0.2}`, or bare `0.1, -0.2`. Returns
/// `None` when the payload is empty or any element fails to parse.
pub fn parse_stored_embedding(raw: &str) -> Option<Vec<f32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Fast path: valid JSON array of numbers.
    if trimmed.starts_with('[') {
        if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(trimmed) {
            let parsed: Option<Vec<f32>> = items
                .iter()
                .map(|v| v.as_f64().map(|f| f as f32))
                .collect();
            if let Some(vec) = parsed {
                return non_empty(vec);
            }
            return None;
        }
    }

    // Postgres literal or bare list: strip delimiters and split.
    let inner = trimmed
        .trim_start_matches(['[', '{', '('])
        .trim_end_matches([']', '}', ')']);
    let parsed: Result<Vec<f32>, _> = inner
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect();
    parsed.ok().and_then(non_empty)
}

fn non_empty(vec: Vec<f32>) -> Option<Vec<f32>> {
    if vec.is_empty() {
        None
    } else {
        Some(vec)
    }
}
