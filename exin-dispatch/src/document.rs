//! Country and document-name facts for the document-lookup intents.
//!
//! The lookups themselves live outside this crate; the dispatcher only
//! extracts the facts the collaborator needs.

/// Facts handed to the document-lookup collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFacts {
    pub country: Option<String>,
    pub document_name: Option<String>,
}

/// Query spellings → canonical country names. Multi-word keys sit before
/// their prefixes so the exact pass wins.
const COUNTRY_MAPPINGS: &[(&str, &str)] = &[
    ("india", "India"),
    ("indian", "India"),
    ("china", "China"),
    ("chinese", "China"),
    ("tiongkok", "China"),
    ("bangladesh", "Bangladesh"),
    ("malaysia", "Malaysia"),
    ("singapore", "Singapore"),
    ("singapura", "Singapore"),
    ("thailand", "Thailand"),
    ("vietnam", "Vietnam"),
    ("japan", "Japan"),
    ("jepang", "Japan"),
    ("korea selatan", "Korea"),
    ("korea", "Korea"),
    ("australia", "Australia"),
    ("amerika", "USA"),
    ("usa", "USA"),
    ("united states", "USA"),
    ("eropa", "Europe"),
    ("europe", "Europe"),
];

/// Query spellings → canonical document names.
const DOCUMENT_MAPPINGS: &[(&str, &str)] = &[
    ("commercial invoice", "Commercial Invoice"),
    ("invoice", "Commercial Invoice"),
    ("packing list", "Packing List"),
    ("packing", "Packing List"),
    ("shipping instruction", "Shipping Instruction"),
    ("shipping", "Shipping Instruction"),
    ("proforma invoice", "Proforma Invoice"),
    ("proforma", "Proforma Invoice"),
    ("delivery order", "Delivery Order"),
    ("delivery", "Delivery Order"),
    ("letter of credit", "Letter of Credit"),
    ("lc", "Letter of Credit"),
    ("credit", "Letter of Credit"),
];

/// Extract the destination country and requested document name, when
/// present. Country matching falls back to the first word of multi-word
/// spellings ("united" still finds "united states").
pub fn extract_document_facts(query: &str) -> DocumentFacts {
    let q = query.to_lowercase();

    let country = COUNTRY_MAPPINGS
        .iter()
        .find(|(key, _)| q.contains(key))
        .or_else(|| {
            COUNTRY_MAPPINGS.iter().find(|(key, _)| {
                key.split_whitespace()
                    .next()
                    .is_some_and(|head| q.contains(head))
            })
        })
        .map(|(_, name)| (*name).to_string());

    let document_name = DOCUMENT_MAPPINGS
        .iter()
        .find(|(key, _)| q.contains(key))
        .map(|(_, name)| (*name).to_string());

    DocumentFacts {
        country,
        document_name,
    }
}
