/// Duty calculation errors.
///
/// Missing tariff rules and missing prices are reported inside
/// `DutyCalculationResult` (`can_compute = false` or an explicit zero-tariff
/// basis); only absent reference data the engine cannot proceed without
/// becomes an error.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("commodity '{name}' not found in catalog")]
    CommodityNotFound { name: String },

    #[error("no exchange rate available for {base}/{target}")]
    RateUnavailable { base: String, target: String },
}
