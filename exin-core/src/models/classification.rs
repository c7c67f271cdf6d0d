use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Structured facts the semantic classifier may return alongside the intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierFacts {
    pub country: Option<String>,
    pub product: Option<String>,
    pub weight: Option<f64>,
    pub document_type: Option<String>,
    pub currency: Option<String>,
}

/// The semantic classification collaborator's answer for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub intent: Intent,
    pub confidence: f64,
    #[serde(default)]
    pub extracted_data: ClassifierFacts,
    #[serde(default)]
    pub missing_data: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl QueryAnalysis {
    /// Defined fallback when the collaborator fails or answers with
    /// something unparseable.
    pub fn fallback() -> Self {
        Self {
            intent: Intent::GeneralInfo,
            confidence: 0.5,
            extracted_data: ClassifierFacts::default(),
            missing_data: Vec::new(),
            reasoning: "fallback analysis: classifier unavailable or malformed".to_owned(),
        }
    }

    /// Parse a raw collaborator reply. Malformed or non-JSON payloads are
    /// downgraded to the fallback analysis, never an error. Unknown intent
    /// names map to `GeneralInfo` via lenient parsing.
    pub fn parse_or_fallback(raw: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(raw.trim()) {
            Ok(v) => v,
            Err(_) => return Self::fallback(),
        };
        let intent = value
            .get("intent")
            .and_then(|v| v.as_str())
            .map(Intent::parse_lenient)
            .unwrap_or(Intent::GeneralInfo);
        let confidence = value
            .get("confidence")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.5)
            .clamp(0.0, 1.0);
        let extracted_data = value
            .get("extracted_data")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        let missing_data = value
            .get("missing_data")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();
        let reasoning = value
            .get("reasoning")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_owned();
        Self {
            intent,
            confidence,
            extracted_data,
            missing_data,
            reasoning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_reply() {
        let raw = r#"{
            "intent": "export_duty",
            "confidence": 0.93,
            "extracted_data": {"country": "India", "product": "Kakao", "weight": 10000},
            "missing_data": [],
            "reasoning": "duty keywords present"
        }"#;
        let analysis = QueryAnalysis::parse_or_fallback(raw);
        assert_eq!(analysis.intent, Intent::ExportDuty);
        assert_eq!(analysis.confidence, 0.93);
        assert_eq!(analysis.extracted_data.country.as_deref(), Some("India"));
    }

    #[test]
    fn non_json_reply_becomes_fallback() {
        let analysis = QueryAnalysis::parse_or_fallback("I think the intent is export_duty");
        assert_eq!(analysis.intent, Intent::GeneralInfo);
        assert_eq!(analysis.confidence, 0.5);
    }

    #[test]
    fn unknown_intent_name_maps_to_general_info() {
        let analysis = QueryAnalysis::parse_or_fallback(r#"{"intent": "weather", "confidence": 0.9}"#);
        assert_eq!(analysis.intent, Intent::GeneralInfo);
        assert_eq!(analysis.confidence, 0.9);
    }

    #[test]
    fn out_of_range_confidence_is_clamped() {
        let analysis = QueryAnalysis::parse_or_fallback(r#"{"intent": "export_duty", "confidence": 3.2}"#);
        assert_eq!(analysis.confidence, 1.0);
    }
}
