//! # exin-tariff
//!
//! Regulatory tariff-rule extraction and export duty calculation. A fixed
//! cascade of regex strategies mines one [`exin_core::TariffRule`] out of
//! retrieved regulatory chunks, with delegated single-number extraction as
//! the last resort; the [`DutyEngine`] turns the rule, the commodity
//! catalog and the latest exchange rate into a transparent
//! [`exin_core::DutyCalculationResult`].

pub mod engine;
pub mod extract;
pub mod numeric;
pub mod patterns;
pub mod price;

pub use engine::DutyEngine;
pub use extract::{ExtractedRule, ExtractionContext, RuleExtractor, RuleSource};
pub use price::unit_price_usd_per_kg;
