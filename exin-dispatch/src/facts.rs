//! Duty fact extraction from free text.
//!
//! Gazetteer-and-regex extraction: fast, deterministic, and good enough
//! for the slot-filling loop — anything it misses the history re-scan or
//! the user's next message supplies.

use std::sync::LazyLock;

use exin_core::models::ExtractedDutyFacts;
use exin_tariff::numeric::parse_amount;
use regex::Regex;

/// Destination countries the duty flow recognizes, canonical casing.
const COUNTRIES: &[&str] = &[
    "Indonesia",
    "India",
    "Tiongkok",
    "China",
    "Bangladesh",
    "Malaysia",
    "Singapura",
    "Thailand",
    "Vietnam",
    "Filipina",
    "Jepang",
    "Korea",
    "Amerika",
    "USA",
    "Eropa",
    "Australia",
];

/// Export commodities the duty flow recognizes.
const COMMODITIES: &[&str] = &[
    "CPO",
    "Crude Palm Oil",
    "Karet",
    "Kopi",
    "Kakao",
    "Cokelat",
    "Teh",
    "Beras",
    "Jagung",
    "Kedelai",
    "Gula",
    "Tembakau",
    "Kayu",
    "Batu Bara",
    "Minyak",
    "Gas",
];

static RE_WEIGHT_KG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)*)\s*(?:kg|kilogram)").ok());

/// Extract product, weight and destination from `text`. Fields that do
/// not appear stay `None`; nothing is guessed.
pub fn extract_duty_facts(text: &str) -> ExtractedDutyFacts {
    let lower = text.to_lowercase();

    let net_weight_kg = RE_WEIGHT_KG
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|g| parse_amount(g.as_str()));

    let destination_country = COUNTRIES
        .iter()
        .find(|c| lower.contains(&c.to_lowercase()))
        .map(|c| (*c).to_string());

    let product_name = COMMODITIES
        .iter()
        .find(|c| lower.contains(&c.to_lowercase()))
        .map(|c| (*c).to_string());

    ExtractedDutyFacts {
        product_name,
        net_weight_kg,
        destination_country,
    }
}
