//! Unit price extraction from regulatory text.

use std::sync::LazyLock;

use exin_core::constants::KG_PER_TON;
use exin_core::models::RegulatoryChunk;
use regex::Regex;

use crate::numeric::parse_amount;
use crate::patterns;

/// Scan chunks (most relevant first) for an explicit USD unit price,
/// normalized to per-kilogram. Figures inside tier-threshold expressions
/// ("> USD 2,000/ton") are thresholds, not prices, and are skipped.
pub fn unit_price_usd_per_kg(chunks: &[RegulatoryChunk]) -> Option<f64> {
    let price_patterns: [(&LazyLock<Option<Regex>>, f64); 4] = [
        (&patterns::RE_PRICE_USD_KG, 1.0),
        (&patterns::RE_PRICE_KG_USD, 1.0),
        (&patterns::RE_PRICE_USD_TON, KG_PER_TON),
        (&patterns::RE_PRICE_TON_USD, KG_PER_TON),
    ];

    for chunk in chunks {
        for (pattern, divisor) in &price_patterns {
            let Some(re) = pattern.as_ref() else { continue };
            for caps in re.captures_iter(&chunk.content) {
                let Some(whole) = caps.get(0) else { continue };
                if is_tier_threshold(&chunk.content, whole.start()) {
                    continue;
                }
                if let Some(value) = caps.get(1).and_then(|g| parse_amount(g.as_str())) {
                    return Some(value / divisor);
                }
            }
        }
    }
    None
}

fn is_tier_threshold(text: &str, match_start: usize) -> bool {
    match patterns::RE_TIER_GUARD.as_ref() {
        Some(re) => re.is_match(&text[..match_start]),
        None => false,
    }
}
