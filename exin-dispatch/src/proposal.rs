//! Proposal field extraction from free text.

use std::sync::LazyLock;

use exin_core::models::ProposalFacts;
use regex::Regex;

macro_rules! proposal_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

proposal_pattern!(
    RE_EXPORTER,
    r"(?i)(?:exporter|eksportir|pt|cv)\s*[:\-]?\s*([\w\s&.,'-]{3,})"
);
proposal_pattern!(
    RE_CONSIGNEE,
    r"(?i)(?:consignee|pembeli|buyer)\s*[:\-]?\s*([\w\s&.,'-]{3,})"
);
proposal_pattern!(
    RE_COUNTRY_LABEL,
    r"(?i)negara\s+tujuan\s*[:\-]?\s*([A-Za-z\s]+)"
);
proposal_pattern!(
    RE_DATE,
    r"(\d{4}-\d{2}-\d{2}|\d{2}/\d{2}/\d{4}|\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4})"
);
proposal_pattern!(
    RE_EMAIL,
    r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}"
);
proposal_pattern!(
    RE_PHONE_LABELED,
    r"(?i)(?:telp|telpon|telepon|phone|hp|wa|whatsapp)\s*[:\-]?\s*([+0-9()\s\-]{6,20})"
);
proposal_pattern!(RE_PHONE_BARE, r"\+?\d[0-9()\s\-]{6,20}\d");
proposal_pattern!(RE_WEBSITE, r"https?://[\w.\-]+(?:/[\w./\-]*)?");

/// Countries the proposal flow recognizes, broader than the duty
/// gazetteer because consignees sit anywhere.
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
    "United Kingdom",
    "UK",
    "United States",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Netherlands",
    "Saudi Arabia",
    "UAE",
];

const NAME_MAX_CHARS: usize = 120;
const COUNTRY_MAX_CHARS: usize = 80;

/// Extract whatever proposal fields appear in `text`. Absent fields stay
/// `None`; the slot-filling loop asks for them on the next turn.
pub fn extract_proposal_facts(text: &str) -> ProposalFacts {
    if text.is_empty() {
        return ProposalFacts::default();
    }
    let lower = text.to_lowercase();

    let exporter_name = capture_name(&RE_EXPORTER, text);
    let consignee_name = capture_name(&RE_CONSIGNEE, text);

    let destination_country = COUNTRIES
        .iter()
        .find(|c| lower.contains(&c.to_lowercase()))
        .map(|c| (*c).to_string())
        .or_else(|| {
            capture(&RE_COUNTRY_LABEL, text)
                .map(|c| clip_chars(c.trim(), COUNTRY_MAX_CHARS))
        });

    let proposal_date = capture(&RE_DATE, text).map(str::to_owned);
    let contact_email = whole_match(&RE_EMAIL, text);
    let contact_phone = capture(&RE_PHONE_LABELED, text)
        .or_else(|| whole_capture(&RE_PHONE_BARE, text))
        .map(normalize_spaces);
    let contact_website = whole_match(&RE_WEBSITE, text);

    ProposalFacts {
        exporter_name,
        consignee_name,
        destination_country,
        proposal_date,
        contact_email,
        contact_phone,
        contact_website,
    }
}

fn capture<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    let re = pattern.as_ref()?;
    Some(re.captures(text)?.get(1)?.as_str())
}

fn whole_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    Some(re.find(text)?.as_str().to_owned())
}

fn whole_capture<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    let re = pattern.as_ref()?;
    Some(re.find(text)?.as_str())
}

fn capture_name(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let raw = capture(pattern, text)?;
    let trimmed = raw.trim().trim_matches([' ', '-', ':', ',', '.', '\n']);
    if trimmed.is_empty() {
        return None;
    }
    Some(clip_chars(trimmed, NAME_MAX_CHARS))
}

fn clip_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_fields_are_extracted() {
        let facts = extract_proposal_facts(
            "Exporter: PT Sumber Makmur\nConsignee: Delhi Trading Co\nnegara tujuan: India",
        );
        assert!(facts
            .exporter_name
            .as_deref()
            .unwrap()
            .contains("Sumber Makmur"));
        assert!(facts
            .consignee_name
            .as_deref()
            .unwrap()
            .contains("Delhi Trading"));
        assert_eq!(facts.destination_country.as_deref(), Some("India"));
    }

    #[test]
    fn contacts_are_extracted() {
        let facts = extract_proposal_facts(
            "email budi@makmur.co.id, wa: +62 812-3456-7890, situs https://makmur.co.id/profil",
        );
        assert_eq!(facts.contact_email.as_deref(), Some("budi@makmur.co.id"));
        assert_eq!(facts.contact_phone.as_deref(), Some("+62 812-3456-7890"));
        assert_eq!(
            facts.contact_website.as_deref(),
            Some("https://makmur.co.id/profil")
        );
    }

    #[test]
    fn bare_phone_is_a_fallback() {
        let facts = extract_proposal_facts("hubungi di +62 811 222 333 ya");
        assert_eq!(facts.contact_phone.as_deref(), Some("+62 811 222 333"));
    }

    #[test]
    fn date_formats() {
        assert_eq!(
            extract_proposal_facts("tanggal 2025-06-01").proposal_date.as_deref(),
            Some("2025-06-01")
        );
        assert_eq!(
            extract_proposal_facts("tanggal 01/06/2025").proposal_date.as_deref(),
            Some("01/06/2025")
        );
        assert_eq!(
            extract_proposal_facts("pada 1 Juni 2025").proposal_date.as_deref(),
            Some("1 Juni 2025")
        );
    }

    #[test]
    fn country_label_is_the_fallback_after_the_gazetteer() {
        let facts = extract_proposal_facts("negara tujuan: Maroko");
        assert_eq!(facts.destination_country.as_deref(), Some("Maroko"));
    }

    #[test]
    fn empty_text_extracts_nothing() {
        assert_eq!(extract_proposal_facts(""), ProposalFacts::default());
    }
}
