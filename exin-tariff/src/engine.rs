//! The export duty calculation engine.

use exin_core::config::ExtractionConfig;
use exin_core::constants::{
    kg_to_ton, BASIS_ASSUMED_ZERO, BASIS_FLAT_PERCENT, BASIS_INSUFFICIENT, BASIS_LEVY_IDR,
    BASIS_LEVY_USD, BASIS_TIER_PERCENT, FIELD_TARIFF_PERCENT, FIELD_UNIT_PRICE, KG_PER_TON,
    REGULATORY_EXCERPT_CHARS,
};
use exin_core::errors::{CalculationError, ExinResult};
use exin_core::models::{Currency, DutyCalculationResult, RegulatoryChunk, TariffRule};
use exin_core::traits::{IMarketStore, ITariffOracle};
use tracing::{debug, info};

use crate::extract::{ExtractionContext, RuleExtractor};
use crate::price;

/// Computes export duty from the commodity catalog, the latest USD/IDR
/// rate and a tariff rule mined from regulatory chunks.
///
/// The result is always one of two honest shapes: `can_compute = false`
/// with the exact missing fields, or a computed duty whose
/// `calculation_basis` names the tariff path — including the labeled
/// zero-tariff assumption. Nothing is ever silently defaulted.
pub struct DutyEngine<'a> {
    market: &'a dyn IMarketStore,
    extractor: RuleExtractor,
    config: ExtractionConfig,
}

impl<'a> DutyEngine<'a> {
    pub fn new(market: &'a dyn IMarketStore, config: ExtractionConfig) -> Self {
        Self {
            market,
            extractor: RuleExtractor::new(config.clone()),
            config,
        }
    }

    /// Calculate the duty for one complete fact set. `chunks` come from
    /// regulatory retrieval, most relevant first; the oracle (when given)
    /// is the delegated last resort for rule extraction.
    pub async fn calculate(
        &self,
        product: &str,
        net_weight_kg: f64,
        destination: &str,
        chunks: &[RegulatoryChunk],
        oracle: Option<&dyn ITariffOracle>,
    ) -> ExinResult<DutyCalculationResult> {
        let commodity = self
            .market
            .find_commodity(product)?
            .ok_or_else(|| CalculationError::CommodityNotFound {
                name: product.to_string(),
            })?;
        let rate =
            self.market
                .latest_rate("USD", "IDR")?
                .ok_or_else(|| CalculationError::RateUnavailable {
                    base: "USD".to_string(),
                    target: "IDR".to_string(),
                })?;
        let usd_idr = rate.rate;

        let chunks = &chunks[..chunks.len().min(self.config.max_chunks)];
        let weight_ton = kg_to_ton(net_weight_kg);

        // Price resolution: explicit regulation price (USD/kg) first, then
        // the catalog price normalized to IDR/kg.
        let unit_price_usd = price::unit_price_usd_per_kg(chunks);
        let catalog_idr_per_kg = match unit_price_usd {
            Some(_) => None,
            None => commodity.price_per_kg(),
        };

        let (total_usd, total_idr) = match (unit_price_usd, catalog_idr_per_kg) {
            (Some(usd_kg), _) => {
                let usd = usd_kg * net_weight_kg;
                (Some(usd), Some(usd * usd_idr))
            }
            (None, Some(idr_kg)) => {
                let idr = idr_kg * net_weight_kg;
                let usd = (usd_idr > 0.0).then(|| idr / usd_idr);
                (usd, Some(idr))
            }
            (None, None) => (None, None),
        };

        let usd_per_ton = match (unit_price_usd, total_usd) {
            (Some(usd_kg), _) => Some(usd_kg * KG_PER_TON),
            (None, Some(usd)) if weight_ton > 0.0 => Some(usd / weight_ton),
            _ => None,
        };
        debug!(
            ?unit_price_usd,
            ?catalog_idr_per_kg,
            ?usd_per_ton,
            "price resolved"
        );

        let ctx = ExtractionContext {
            unit_price_usd_per_ton: usd_per_ton,
        };
        let extracted = self
            .extractor
            .extract_with_oracle(chunks, &ctx, oracle, product, Some(destination))
            .await;

        let mut result = DutyCalculationResult {
            product_name: product.to_string(),
            net_weight_kg,
            weight_ton,
            destination_country: destination.to_string(),
            unit_price_usd_per_kg: unit_price_usd,
            catalog_price_idr_per_kg: catalog_idr_per_kg,
            total_value_usd: total_usd,
            total_value_idr: total_idr,
            usd_idr_rate: usd_idr,
            tariff_percent: None,
            duty_idr: 0.0,
            can_compute: false,
            missing_fields: Vec::new(),
            calculation_basis: String::new(),
            regulatory_excerpt: chunks.first().map(|c| c.excerpt(REGULATORY_EXCERPT_CHARS)),
            source_chunk_count: chunks.len(),
        };

        match extracted.rule {
            // Levy is value-independent: computable even without a price.
            TariffRule::SpecificLevy {
                amount_per_kg,
                currency,
            } => {
                let (duty, basis) = match currency {
                    Currency::Usd => (amount_per_kg * net_weight_kg * usd_idr, BASIS_LEVY_USD),
                    Currency::Idr => (amount_per_kg * net_weight_kg, BASIS_LEVY_IDR),
                };
                result.duty_idr = duty;
                result.can_compute = true;
                result.calculation_basis = basis.to_string();
            }
            TariffRule::TieredPercent {
                threshold_usd_per_ton,
                percent,
            } => {
                // Re-confirm against the resolved price before applying.
                if usd_per_ton.is_some_and(|p| p > threshold_usd_per_ton) {
                    apply_percent(&mut result, percent, total_idr, BASIS_TIER_PERCENT);
                } else {
                    apply_unknown(&mut result, total_idr);
                }
            }
            TariffRule::FlatPercent { percent } => {
                apply_percent(&mut result, percent, total_idr, BASIS_FLAT_PERCENT);
            }
            TariffRule::Unknown => {
                apply_unknown(&mut result, total_idr);
            }
        }

        info!(
            product,
            can_compute = result.can_compute,
            basis = %result.calculation_basis,
            duty_idr = result.duty_idr,
            "export duty calculation complete"
        );
        Ok(result)
    }
}

fn apply_percent(
    result: &mut DutyCalculationResult,
    percent: f64,
    total_idr: Option<f64>,
    basis: &str,
) {
    result.tariff_percent = Some(percent);
    match total_idr {
        Some(idr) => {
            result.duty_idr = percent / 100.0 * idr;
            result.can_compute = true;
            result.calculation_basis = basis.to_string();
        }
        None => {
            result.missing_fields.push(FIELD_UNIT_PRICE.to_string());
            result.calculation_basis = BASIS_INSUFFICIENT.to_string();
        }
    }
}

fn apply_unknown(result: &mut DutyCalculationResult, total_idr: Option<f64>) {
    match total_idr {
        // The zero-tariff assumption stays visible in the basis.
        Some(_) => {
            result.can_compute = true;
            result.calculation_basis = BASIS_ASSUMED_ZERO.to_string();
        }
        None => {
            result.missing_fields.push(FIELD_TARIFF_PERCENT.to_string());
            result.missing_fields.push(FIELD_UNIT_PRICE.to_string());
            result.calculation_basis = BASIS_INSUFFICIENT.to_string();
        }
    }
}
