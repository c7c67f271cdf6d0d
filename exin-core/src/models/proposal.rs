use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields collected for an export proposal across turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalFacts {
    pub exporter_name: Option<String>,
    pub consignee_name: Option<String>,
    pub destination_country: Option<String>,
    pub proposal_date: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_website: Option<String>,
}

impl ProposalFacts {
    /// Fields that must be present before the proposal is ready.
    pub const REQUIRED: [&'static str; 5] = [
        "exporter_name",
        "consignee_name",
        "destination_country",
        "contact_email",
        "contact_phone",
    ];

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "exporter_name" => self.exporter_name.as_ref(),
            "consignee_name" => self.consignee_name.as_ref(),
            "destination_country" => self.destination_country.as_ref(),
            "proposal_date" => self.proposal_date.as_ref(),
            "contact_email" => self.contact_email.as_ref(),
            "contact_phone" => self.contact_phone.as_ref(),
            "contact_website" => self.contact_website.as_ref(),
            _ => None,
        }
    }

    /// Required fields still missing, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::REQUIRED
            .iter()
            .copied()
            .filter(|name| self.field(name).is_none())
            .collect()
    }

    /// Fill empty fields from `other`; known fields are never overwritten.
    pub fn merge_from(&mut self, other: &ProposalFacts) {
        macro_rules! take_if_empty {
            ($field:ident) => {
                if self.$field.is_none() {
                    self.$field.clone_from(&other.$field);
                }
            };
        }
        take_if_empty!(exporter_name);
        take_if_empty!(consignee_name);
        take_if_empty!(destination_country);
        take_if_empty!(proposal_date);
        take_if_empty!(contact_email);
        take_if_empty!(contact_phone);
        take_if_empty!(contact_website);
    }

    /// Placeholder variable map for downstream rendering. Generated prose
    /// slots stay `None` — the rendering layer fills them.
    pub fn variable_map(&self) -> BTreeMap<String, Option<String>> {
        let mut vars = BTreeMap::new();
        vars.insert("exporter_name".into(), self.exporter_name.clone());
        vars.insert("consignee_name".into(), self.consignee_name.clone());
        vars.insert(
            "destination_country".into(),
            self.destination_country.clone(),
        );
        vars.insert("proposal_date".into(), self.proposal_date.clone());
        vars.insert("contact_email".into(), self.contact_email.clone());
        vars.insert("contact_phone".into(), self.contact_phone.clone());
        vars.insert("contact_website".into(), self.contact_website.clone());
        for slot in [
            "generated_product_summary",
            "generated_product_advantages",
            "generated_pricing_stock",
            "generated_exporter_edge",
            "generated_call_to_action",
        ] {
            vars.insert(slot.into(), None);
        }
        vars
    }
}

/// Per-turn slot-filling state: what has been collected and what is still
/// missing. Built fresh each turn and discarded after it — the caller
/// persists conversation history, not this state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSlotState {
    pub collected: ProposalFacts,
    pub missing: Vec<String>,
}

impl ProposalSlotState {
    pub fn from_facts(collected: ProposalFacts) -> Self {
        let missing = collected
            .missing_fields()
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { collected, missing }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_facts() -> ProposalFacts {
        ProposalFacts {
            exporter_name: Some("PT Cahaya".into()),
            consignee_name: Some("Acme GmbH".into()),
            destination_country: Some("Germany".into()),
            proposal_date: None,
            contact_email: Some("sales@cahaya.co.id".into()),
            contact_phone: Some("+62 812 3456".into()),
            contact_website: None,
        }
    }

    #[test]
    fn required_fields_drive_completion() {
        let state = ProposalSlotState::from_facts(complete_facts());
        assert!(state.is_complete());

        let mut facts = complete_facts();
        facts.contact_email = None;
        let state = ProposalSlotState::from_facts(facts);
        assert_eq!(state.missing, vec!["contact_email"]);
    }

    #[test]
    fn merge_prefers_existing_values() {
        let mut current = ProposalFacts {
            exporter_name: Some("PT Baru".into()),
            ..Default::default()
        };
        current.merge_from(&complete_facts());
        assert_eq!(current.exporter_name.as_deref(), Some("PT Baru"));
        assert_eq!(current.consignee_name.as_deref(), Some("Acme GmbH"));
    }

    #[test]
    fn variable_map_leaves_generated_slots_empty() {
        let vars = complete_facts().variable_map();
        assert_eq!(
            vars.get("exporter_name").unwrap().as_deref(),
            Some("PT Cahaya")
        );
        assert!(vars.get("generated_product_summary").unwrap().is_none());
        assert_eq!(vars.len(), 12);
    }
}
