//! Category wire type

use serde::{Deserialize, Serialize};

/// A drug category with its live drug count.
///
/// `drug_count` is derived at query time by counting drugs whose category
/// reference equals this id; it is zero when no drugs reference the category.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub drug_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_omitted_when_absent() {
        let category = Category {
            id: 1,
            name: "Analgesics".to_string(),
            description: None,
            drug_count: 0,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert!(!json.as_object().unwrap().contains_key("description"));
        assert_eq!(json["drug_count"], 0);
    }
}
