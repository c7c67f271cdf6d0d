use crate::errors::ExinResult;
use crate::models::{Commodity, CurrencyRate};

/// Read-only commodity catalog and exchange-rate lookups.
pub trait IMarketStore: Send + Sync {
    /// Fuzzy-match a commodity by name (case-insensitive, substring and
    /// common-alias tolerant — the store's concern).
    fn find_commodity(&self, name: &str) -> ExinResult<Option<Commodity>>;

    /// Latest rate for a currency pair: most recent effective date,
    /// tie-broken by most recent record creation time.
    fn latest_rate(&self, base: &str, target: &str) -> ExinResult<Option<CurrencyRate>>;
}
