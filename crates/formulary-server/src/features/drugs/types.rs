//! Drug wire types
//!
//! Two projections exist: [`DrugSummary`] for list-style endpoints and
//! [`Drug`] for the single-item endpoint. Optional fields are omitted from
//! the serialized object when absent, and list fields when empty - the
//! consuming frontend distinguishes "key missing" from "key null", so this is
//! a wire contract, not a cosmetic choice.

use serde::{Deserialize, Serialize};

/// Summary projection: id, name, description, category reference, class, and
/// prescription flag. Used by `/drugs` and `/categories/{id}/drugs`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DrugSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category_id: i32,
    /// Resolved category name; empty when the reference dangles.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_class: Option<String>,
    pub requires_prescription: bool,
}

/// Full projection: everything in the summary plus dosing and clinical
/// fields, the three typed side-effect lists and their combined form,
/// contraindications, and interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drug {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category_id: i32,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_class: Option<String>,
    pub requires_prescription: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dosage: Option<String>,
    /// Concatenation of common, serious, and rare lists in that order, no
    /// dedup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub side_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_side_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serious_side_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rare_side_effects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interactions: Vec<Interaction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contraindications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism_of_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacokinetics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_life: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_of_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_of_administration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lactation_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_info: Option<String>,
}

/// A drug interaction. Belongs to exactly one drug; no identity of its own is
/// surfaced to the client.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Interaction {
    pub name: String,
    pub description: String,
    /// Free-text severity label; no enumerated domain is enforced here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Storage type tag on the side_effects table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffectKind {
    Common,
    Serious,
    Rare,
}

impl SideEffectKind {
    /// The tag value as stored in the `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            SideEffectKind::Common => "common",
            SideEffectKind::Serious => "serious",
            SideEffectKind::Rare => "rare",
        }
    }
}

impl std::fmt::Display for SideEffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_drug() -> Drug {
        Drug {
            id: 1,
            name: "Aspirin".to_string(),
            description: "NSAID".to_string(),
            category_id: 2,
            category: "Analgesics".to_string(),
            drug_class: None,
            requires_prescription: false,
            dosage: None,
            max_dosage: None,
            side_effects: vec![],
            common_side_effects: vec![],
            serious_side_effects: vec![],
            rare_side_effects: vec![],
            warnings: None,
            interactions: vec![],
            contraindications: vec![],
            mechanism_of_action: None,
            pharmacokinetics: None,
            half_life: None,
            onset_of_action: None,
            route_of_administration: None,
            pregnancy_category: None,
            pregnancy_info: None,
            lactation_info: None,
            storage_info: None,
        }
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let json = serde_json::to_value(bare_drug()).unwrap();
        let obj = json.as_object().unwrap();

        // Summary fields are always present
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("description"));
        assert!(obj.contains_key("category_id"));
        assert!(obj.contains_key("category"));
        assert!(obj.contains_key("requires_prescription"));

        // Absent optionals and empty lists must not appear as keys
        for key in [
            "drug_class",
            "dosage",
            "max_dosage",
            "side_effects",
            "common_side_effects",
            "serious_side_effects",
            "rare_side_effects",
            "warnings",
            "interactions",
            "contraindications",
            "mechanism_of_action",
            "storage_info",
        ] {
            assert!(!obj.contains_key(key), "unexpected key: {}", key);
        }
    }

    #[test]
    fn test_populated_fields_are_serialized() {
        let mut drug = bare_drug();
        drug.drug_class = Some("NSAID".to_string());
        drug.common_side_effects = vec!["nausea".to_string()];
        drug.side_effects = vec!["nausea".to_string()];
        drug.interactions = vec![Interaction {
            name: "Warfarin".to_string(),
            description: "Increased bleeding risk".to_string(),
            severity: Some("major".to_string()),
        }];

        let json = serde_json::to_value(&drug).unwrap();
        assert_eq!(json["drug_class"], "NSAID");
        assert_eq!(json["common_side_effects"][0], "nausea");
        assert_eq!(json["interactions"][0]["name"], "Warfarin");
        assert_eq!(json["interactions"][0]["severity"], "major");
    }

    #[test]
    fn test_interaction_severity_omitted_when_absent() {
        let interaction = Interaction {
            name: "Ibuprofen".to_string(),
            description: "Competes for binding".to_string(),
            severity: None,
        };
        let json = serde_json::to_value(&interaction).unwrap();
        assert!(!json.as_object().unwrap().contains_key("severity"));
    }

    #[test]
    fn test_summary_key_set() {
        let summary = DrugSummary {
            id: 7,
            name: "Metformin".to_string(),
            description: "Biguanide".to_string(),
            category_id: 3,
            category: "Antidiabetics".to_string(),
            drug_class: Some("Biguanide".to_string()),
            requires_prescription: true,
        };
        let json = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "category",
                "category_id",
                "description",
                "drug_class",
                "id",
                "name",
                "requires_prescription"
            ]
        );
    }

    #[test]
    fn test_side_effect_kind_tags() {
        assert_eq!(SideEffectKind::Common.as_str(), "common");
        assert_eq!(SideEffectKind::Serious.as_str(), "serious");
        assert_eq!(SideEffectKind::Rare.as_str(), "rare");
    }
}
