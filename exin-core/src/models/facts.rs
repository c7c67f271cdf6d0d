use serde::{Deserialize, Serialize};

use crate::constants;

/// Facts required for a duty calculation, merged across the current message
/// and the recent history window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDutyFacts {
    pub product_name: Option<String>,
    pub net_weight_kg: Option<f64>,
    pub destination_country: Option<String>,
}

impl ExtractedDutyFacts {
    /// Whether all three required fields are present.
    pub fn is_complete(&self) -> bool {
        self.product_name.is_some()
            && self.net_weight_kg.is_some()
            && self.destination_country.is_some()
    }

    /// Missing-field tags, in the order callers expect to prompt for them.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.product_name.is_none() {
            missing.push(constants::FIELD_PRODUCT);
        }
        if self.net_weight_kg.is_none() {
            missing.push(constants::FIELD_WEIGHT_KG);
        }
        if self.destination_country.is_none() {
            missing.push(constants::FIELD_DESTINATION);
        }
        missing
    }

    /// Fill empty fields from `other`. A field already known here is never
    /// overwritten — current-message facts take precedence over history.
    pub fn merge_from(&mut self, other: &ExtractedDutyFacts) {
        if self.product_name.is_none() {
            self.product_name.clone_from(&other.product_name);
        }
        if self.net_weight_kg.is_none() {
            self.net_weight_kg = other.net_weight_kg;
        }
        if self.destination_country.is_none() {
            self.destination_country.clone_from(&other.destination_country);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_never_overwrites_known_fields() {
        let mut current = ExtractedDutyFacts {
            product_name: Some("Kakao".into()),
            net_weight_kg: Some(500.0),
            destination_country: None,
        };
        let historical = ExtractedDutyFacts {
            product_name: Some("Kopi".into()),
            net_weight_kg: None,
            destination_country: Some("India".into()),
        };
        current.merge_from(&historical);
        assert_eq!(current.product_name.as_deref(), Some("Kakao"));
        assert_eq!(current.net_weight_kg, Some(500.0));
        assert_eq!(current.destination_country.as_deref(), Some("India"));
    }

    #[test]
    fn missing_fields_report_in_prompt_order() {
        let facts = ExtractedDutyFacts::default();
        assert_eq!(
            facts.missing_fields(),
            vec!["nama_produk", "berat_bersih_kg", "negara_tujuan"]
        );
        assert!(!facts.is_complete());
    }

    #[test]
    fn complete_facts_report_nothing_missing() {
        let facts = ExtractedDutyFacts {
            product_name: Some("CPO".into()),
            net_weight_kg: Some(1000.0),
            destination_country: Some("India".into()),
        };
        assert!(facts.is_complete());
        assert!(facts.missing_fields().is_empty());
    }
}
