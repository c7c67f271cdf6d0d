//! Fast deterministic intent detection.
//!
//! Keyword rules run in a fixed precision order: explicit template
//! requests first, then general document phrasing, document lists, duty
//! and proposal cues. When no rule fires the dispatcher falls back to the
//! semantic classification collaborator.

use std::sync::LazyLock;

use exin_core::Intent;
use regex::Regex;

/// Verbs that, combined with a document name, signal a template request.
const TEMPLATE_KEYWORDS: &[&str] = &[
    "buatkan", "buat", "generate", "tampilkan", "show", "lihat", "preview", "template",
];

/// Known export document names (longest variants first where it matters).
const DOC_NAME_KEYWORDS: &[&str] = &[
    "commercial invoice",
    "invoice",
    "packing list",
    "shipping instruction",
    "proforma invoice",
    "delivery order",
    "letter of credit",
    "lc",
    "si",
];

/// "I want to make a document" phrasings without a specific document name.
const GENERAL_DOCUMENT_PHRASES: &[&str] = &[
    "saya ingin membuat dokumen",
    "saya ingin buat dokumen",
    "saya mau membuat dokumen",
    "saya mau buat dokumen",
    "ingin membuat dokumen",
    "ingin buat dokumen",
    "mau membuat dokumen",
    "mau buat dokumen",
    "tolong buat dokumen",
    "bisa buat dokumen",
    "mohon buat dokumen",
    "minta buat dokumen",
];

const LIST_KEYWORDS: &[&str] = &[
    "dokumen", "document", "surat", "form", "persyaratan", "apa saja", "daftar",
];

const DUTY_KEYWORDS: &[&str] = &[
    "bea", "pajak", "tarif", "hitung", "perhitungan", "biaya", "cukai",
];

const PROPOSAL_KEYWORDS: &[&str] = &[
    "proposal",
    "penawaran",
    "quotation",
    "quote",
    "buatkan proposal",
    "generate proposal",
    "proposal ekspor",
    "export proposal",
    "proposal export",
    "buat proposal",
];

static RE_DOKUMEN_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"dokumen\s+(commercial\s+invoice|invoice|packing\s+list|proforma\s+invoice|shipping\s+instruction|delivery\s+order|letter\s+of\s+credit|lc)\b",
    )
    .ok()
});

/// The keyword-rule classifier. Stateless; rules are fixed at compile
/// time.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Try the keyword rules, in precision order. `None` means no rule
    /// fired and the semantic collaborator should decide.
    pub fn quick_intent(&self, query: &str) -> Option<Intent> {
        let q = query.to_lowercase();

        let mentions = |keywords: &[&str]| keywords.iter().any(|kw| q.contains(kw));

        // Template requests have the highest precision: a template verb
        // plus an explicit document name, or the "dokumen <name>" shape.
        if mentions(TEMPLATE_KEYWORDS) && mentions(DOC_NAME_KEYWORDS) {
            return Some(Intent::DocumentTemplate);
        }
        if let Some(re) = RE_DOKUMEN_NAME.as_ref() {
            if re.is_match(&q) {
                return Some(Intent::DocumentTemplate);
            }
        }

        // Nameless "make a document" requests become a list query.
        if mentions(GENERAL_DOCUMENT_PHRASES) {
            return Some(Intent::DocumentList);
        }
        if mentions(LIST_KEYWORDS) {
            return Some(Intent::DocumentList);
        }

        if mentions(DUTY_KEYWORDS) {
            return Some(Intent::ExportDuty);
        }

        if mentions(PROPOSAL_KEYWORDS) {
            return Some(Intent::ExportProposal);
        }

        None
    }
}
