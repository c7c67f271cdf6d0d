use serde::{Deserialize, Serialize};

/// Currency a monetary figure is denominated in. Regulation text mixes USD
/// and IDR; the extractor keeps them distinct and conversion happens only
/// inside the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Idr,
}

/// A tariff rule mined from regulatory text. At most one rule is selected
/// per calculation, in the extractor's fixed priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TariffRule {
    /// Percentage of the total export value.
    FlatPercent { percent: f64 },
    /// Fixed amount per kilogram, independent of traded value. Per-ton
    /// figures are normalized to per-kg at extraction time.
    SpecificLevy {
        amount_per_kg: f64,
        currency: Currency,
    },
    /// Percentage that applies only while the unit price strictly exceeds
    /// the threshold. Selectable only when a USD-per-ton unit price exists.
    TieredPercent {
        threshold_usd_per_ton: f64,
        percent: f64,
    },
    /// Nothing usable was found. Duty is computed as a transparently
    /// labeled 0%, never silently.
    Unknown,
}

impl TariffRule {
    pub fn is_unknown(&self) -> bool {
        matches!(self, TariffRule::Unknown)
    }

    /// The percent this rule applies, when it is percentage-shaped.
    pub fn percent(&self) -> Option<f64> {
        match self {
            TariffRule::FlatPercent { percent } => Some(*percent),
            TariffRule::TieredPercent { percent, .. } => Some(*percent),
            _ => None,
        }
    }
}
