//! The closed intent set the dispatcher works over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User intent for one turn. Classification is keyword-first, with the
/// semantic collaborator as fallback; unknown answers map to `GeneralInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    DocumentList,
    DocumentTemplate,
    ExportDuty,
    ExportProposal,
    GeneralInfo,
}

impl Intent {
    /// Wire name used by the classification collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::DocumentList => "document_list",
            Intent::DocumentTemplate => "document_template",
            Intent::ExportDuty => "export_duty",
            Intent::ExportProposal => "export_proposal",
            Intent::GeneralInfo => "general_info",
        }
    }

    /// Parse a collaborator-supplied intent name. Unknown names fall back
    /// to `GeneralInfo` rather than failing the turn.
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim() {
            "document_list" => Intent::DocumentList,
            "document_template" => Intent::DocumentTemplate,
            "export_duty" => Intent::ExportDuty,
            "export_proposal" => Intent::ExportProposal,
            _ => Intent::GeneralInfo,
        }
    }

    /// Whether this intent collects required fields across turns.
    pub fn is_slot_filling(self) -> bool {
        matches!(self, Intent::ExportDuty | Intent::ExportProposal)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
