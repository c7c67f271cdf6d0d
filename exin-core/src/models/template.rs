use serde::{Deserialize, Serialize};

/// An instruction template from the corpus store.
///
/// Keywords and embeddings are stored loosely in the source system (JSON
/// strings, bracketed lists, Postgres-array literals); they must be
/// normalized at the ingestion boundary — see [`parse_stored_keywords`] and
/// `exin-embeddings::parse` — so the scorer never sees storage formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionTemplate {
    pub id: i64,
    pub template_text: String,
    /// Canonical keyword list; empty when the template has none.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Parsed embedding; `None` when absent or malformed in storage.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u64,
}

/// Normalize a loosely stored keyword field into a canonical list.
///
/// Accepts a JSON array (`["a","b"]`), a Postgres-array literal
/// (`{a,b}`), a bare bracketed list, or a comma-separated string. Malformed
/// input degrades to whatever items are salvageable; it never errors.
pub fn parse_stored_keywords(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // JSON array first — the most common storage shape.
    if trimmed.starts_with('[') {
        if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(trimmed) {
            return items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    // Postgres-array literal or bare bracketed list: strip delimiters,
    // split on commas, drop quoting.
    let inner = trimmed
        .trim_start_matches(['{', '['])
        .trim_end_matches(['}', ']']);
    inner
        .split(',')
        .map(|part| part.trim().trim_matches(['"', '\'']).trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array() {
        assert_eq!(
            parse_stored_keywords(r#"["bea keluar", "tarif"]"#),
            vec!["bea keluar", "tarif"]
        );
    }

    #[test]
    fn parses_postgres_array_literal() {
        assert_eq!(
            parse_stored_keywords(r#"{dokumen,"packing list",invoice}"#),
            vec!["dokumen", "packing list", "invoice"]
        );
    }

    #[test]
    fn parses_plain_comma_separated() {
        assert_eq!(parse_stored_keywords("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn malformed_json_degrades_to_split() {
        // Unbalanced JSON still yields the salvageable items.
        assert_eq!(parse_stored_keywords(r#"["a", "b"#), vec!["a", "b"]);
    }

    #[test]
    fn empty_and_blank_yield_nothing() {
        assert!(parse_stored_keywords("").is_empty());
        assert!(parse_stored_keywords("  ").is_empty());
        assert!(parse_stored_keywords("[]").is_empty());
    }
}
