use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A commodity catalog record. Prices are IDR-denominated in the source
/// system; `unit` is free text ("Rp/kg", "ton") normalized by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commodity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub hs_code: Option<String>,
}

impl Commodity {
    /// Catalog price normalized to per-kilogram, honoring the declared
    /// unit. `None` when no price exists or the unit is unrecognized.
    pub fn price_per_kg(&self) -> Option<f64> {
        let price = self.price?;
        let unit = self.unit.as_deref().unwrap_or("").to_lowercase();
        if unit.contains("kg") {
            Some(price)
        } else if ["ton", "tonne", "mt", "metric ton"]
            .iter()
            .any(|u| unit.contains(u))
        {
            Some(price / crate::constants::KG_PER_TON)
        } else {
            None
        }
    }
}

/// One exchange rate record. "Latest" means most recent effective date,
/// tie-broken by most recent creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub id: i64,
    pub base_currency: String,
    pub target_currency: String,
    pub rate: f64,
    pub rate_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
