use serde::{Deserialize, Serialize};

/// Outcome of one duty calculation. Immutable once produced.
///
/// Exactly one of two honest shapes: `can_compute = false` with explicit
/// `missing_fields`, or a computed result whose `calculation_basis` names
/// the tariff path — including the labeled zero-tariff assumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyCalculationResult {
    pub product_name: String,
    pub net_weight_kg: f64,
    pub weight_ton: f64,
    pub destination_country: String,

    /// Unit price from regulation text, USD per kg, when found.
    pub unit_price_usd_per_kg: Option<f64>,
    /// Catalog price normalized to IDR per kg, when used instead.
    pub catalog_price_idr_per_kg: Option<f64>,
    pub total_value_usd: Option<f64>,
    pub total_value_idr: Option<f64>,
    pub usd_idr_rate: f64,

    /// Applied percent, when the selected rule was percentage-shaped.
    pub tariff_percent: Option<f64>,
    pub duty_idr: f64,

    pub can_compute: bool,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    /// Human-readable tag naming the tariff path that was used.
    pub calculation_basis: String,

    /// Short excerpt of the top regulatory chunk, for caller display.
    #[serde(default)]
    pub regulatory_excerpt: Option<String>,
    /// How many regulatory chunks were consulted.
    #[serde(default)]
    pub source_chunk_count: usize,
}
