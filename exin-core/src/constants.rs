//! Workspace-wide constants.
//!
//! Field tags are the missing-field names callers see; they are kept in the
//! original Indonesian form so downstream prompts stay consistent.

/// Kilograms per metric ton. Weight conversions are exact divisions.
pub const KG_PER_TON: f64 = 1000.0;

/// Missing-field tag: product name.
pub const FIELD_PRODUCT: &str = "nama_produk";
/// Missing-field tag: net weight in kilograms.
pub const FIELD_WEIGHT_KG: &str = "berat_bersih_kg";
/// Missing-field tag: destination country.
pub const FIELD_DESTINATION: &str = "negara_tujuan";
/// Missing-field tag: export duty tariff percent.
pub const FIELD_TARIFF_PERCENT: &str = "tarif_bea_keluar_persen";
/// Missing-field tag: export unit price per kilogram.
pub const FIELD_UNIT_PRICE: &str = "harga_ekspor_per_kg";

/// Calculation basis reported when no tariff rule was found anywhere.
/// The zero-duty assumption must stay visible to the caller.
pub const BASIS_ASSUMED_ZERO: &str = "assumed 0% (no tariff found)";
/// Calculation basis for the flat-percent path.
pub const BASIS_FLAT_PERCENT: &str = "flat percent from regulation";
/// Calculation basis for the value-tier path.
pub const BASIS_TIER_PERCENT: &str = "tier percent from regulation";
/// Calculation basis for a USD-denominated specific levy.
pub const BASIS_LEVY_USD: &str = "specific levy (USD/kg) from regulation";
/// Calculation basis for an IDR-denominated specific levy.
pub const BASIS_LEVY_IDR: &str = "specific levy (IDR/kg) from regulation";
/// Calculation basis when required inputs were missing and nothing was
/// computed.
pub const BASIS_INSUFFICIENT: &str = "not computed (missing data)";

/// Length cap for the regulatory excerpt carried in calculation results.
pub const REGULATORY_EXCERPT_CHARS: usize = 200;

/// Exact kg → ton conversion.
pub fn kg_to_ton(kg: f64) -> f64 {
    kg / KG_PER_TON
}

/// Exact ton → kg conversion.
pub fn ton_to_kg(ton: f64) -> f64 {
    ton * KG_PER_TON
}
