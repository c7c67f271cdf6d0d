//! Compiled extraction patterns.
//!
//! Fixed-shape patterns are `LazyLock<Option<Regex>>` statics: a pattern
//! that fails to compile simply never matches. Patterns whose scan windows
//! come from configuration are compiled once per extractor in [`Patterns`].

use std::sync::LazyLock;

use exin_core::config::ExtractionConfig;
use regex::Regex;

/// Anchor terms that mark export-duty context in regulation text.
const ANCHOR: &str = r"(?:tarif|bea\s+keluar|bk|pungutan\s+ekspor|export\s+duty)";

/// Max chars (newlines excluded) between a levy anchor and its amount.
const LEVY_GAP_CHARS: usize = 80;

macro_rules! tariff_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Percentages ────────────────────────────────────────────────────────────
tariff_pattern!(RE_PERCENT_ANY, r"(\d+(?:[.,]\d+)?)\s*%");

// ── Unit prices (USD 2,000/ton, 2.5 USD/kg, ...) ──────────────────────────
tariff_pattern!(RE_PRICE_USD_KG, r"(?i)USD\s*([\d,.]+)\s*/\s*(?:kg|kilogram)");
tariff_pattern!(RE_PRICE_KG_USD, r"(?i)([\d,.]+)\s*USD\s*/\s*(?:kg|kilogram)");
tariff_pattern!(
    RE_PRICE_USD_TON,
    r"(?i)USD\s*([\d,.]+)\s*/\s*(?:ton|tonne|mt|metric\s*ton)"
);
tariff_pattern!(
    RE_PRICE_TON_USD,
    r"(?i)([\d,.]+)\s*USD\s*/\s*(?:ton|tonne|mt|metric\s*ton)"
);

// A figure directly preceded by a comparator is a tier threshold, not a
// traded unit price.
tariff_pattern!(
    RE_TIER_GUARD,
    r"(?i)(?:>=|>|≥|di\s+atas|lebih\s+dari|above)\s*$"
);

// Oracle replies must lead with the number (or "NA").
tariff_pattern!(RE_LEADING_NUMBER, r"^\s*(\d+(?:[.,]\d+)?)");

/// Window-parameterized patterns, compiled from [`ExtractionConfig`].
pub struct Patterns {
    /// Percent within `anchor_window_chars` of an anchor term.
    pub anchored_percent: Option<Regex>,
    /// "(>|≥|di atas) USD <amount>/ton ... <percent>%" with a bounded
    /// lookahead between threshold and percent.
    pub tier: Option<Regex>,
    pub levy_usd_kg: Option<Regex>,
    pub levy_usd_ton: Option<Regex>,
    pub levy_idr_kg: Option<Regex>,
    pub levy_idr_ton: Option<Regex>,
}

impl Patterns {
    pub fn compile(config: &ExtractionConfig) -> Self {
        let anchored_percent = Regex::new(&format!(
            r"(?i){ANCHOR}[^\d%]{{0,{}}}(\d+(?:[.,]\d+)?)\s*%",
            config.anchor_window_chars
        ))
        .ok();
        let tier = Regex::new(&format!(
            r"(?i)(?:>=|>|≥|di\s+atas|lebih\s+dari|above)\s*USD\s*([\d,.]+)\s*/\s*(?:ton|tonne|mt|metric\s*ton)[^%]{{0,{}}}?(\d+(?:[.,]\d+)?)\s*%",
            config.tier_lookahead_chars
        ))
        .ok();
        let levy = |money: &str, unit: &str| {
            Regex::new(&format!(
                r"(?i){ANCHOR}[^\n]{{0,{LEVY_GAP_CHARS}}}{money}\s*([\d,.]+)\s*/\s*{unit}"
            ))
            .ok()
        };
        Self {
            anchored_percent,
            tier,
            levy_usd_kg: levy("USD", r"(?:kg|kilogram)"),
            levy_usd_ton: levy("USD", r"(?:ton|tonne|mt|metric\s*ton)"),
            levy_idr_kg: levy("Rp", r"(?:kg|kilogram)"),
            levy_idr_ton: levy("Rp", r"(?:ton|tonne|mt|metric\s*ton)"),
        }
    }
}
