//! Get drug query
//!
//! Assembles the full drug document: the primary row (all clinical and
//! dosing fields) plus five auxiliary lists fetched independently - common,
//! serious, and rare side effects, contraindications, and interactions. The
//! auxiliary fetches run concurrently and are individually best-effort: a
//! failing one degrades its list to empty instead of failing the request.
//! Only the primary fetch decides between 404 and 500.

use sqlx::PgPool;

use super::super::types::{Drug, Interaction, SideEffectKind};

/// Query to retrieve one drug by id
#[derive(Debug, Clone)]
pub struct GetDrugQuery {
    pub id: i32,
}

/// Errors that can occur when getting a drug
#[derive(Debug, thiserror::Error)]
pub enum GetDrugError {
    /// No drug row exists for the id
    #[error("Drug {0} not found")]
    NotFound(i32),
    /// A database error occurred on the primary fetch
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const DETAIL_SELECT: &str = "SELECT d.id, d.name, d.description, d.category_id, \
     COALESCE(c.name, '') AS category, d.drug_class, d.requires_prescription, d.dosage, \
     d.max_dosage, d.warnings, d.mechanism_of_action, d.pharmacokinetics, d.half_life, \
     d.onset_of_action, d.route_of_administration, d.pregnancy_category, d.pregnancy_info, \
     d.lactation_info, d.storage_info \
     FROM drugs d LEFT JOIN categories c ON c.id = d.category_id WHERE d.id = $1";

/// The primary drug row before the auxiliary lists are merged in.
#[derive(Debug, sqlx::FromRow)]
struct DrugRow {
    id: i32,
    name: String,
    description: String,
    category_id: i32,
    category: String,
    drug_class: Option<String>,
    requires_prescription: bool,
    dosage: Option<String>,
    max_dosage: Option<String>,
    warnings: Option<String>,
    mechanism_of_action: Option<String>,
    pharmacokinetics: Option<String>,
    half_life: Option<String>,
    onset_of_action: Option<String>,
    route_of_administration: Option<String>,
    pregnancy_category: Option<String>,
    pregnancy_info: Option<String>,
    lactation_info: Option<String>,
    storage_info: Option<String>,
}

/// Handles the get drug query
///
/// The response is assembled only after all five auxiliary fetches resolve;
/// nothing is streamed incrementally.
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetDrugQuery) -> Result<Drug, GetDrugError> {
    let row = sqlx::query_as::<_, DrugRow>(DETAIL_SELECT)
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetDrugError::NotFound(query.id))?;

    let (common, serious, rare, contraindications, interactions) = tokio::join!(
        fetch_side_effects(&pool, query.id, SideEffectKind::Common),
        fetch_side_effects(&pool, query.id, SideEffectKind::Serious),
        fetch_side_effects(&pool, query.id, SideEffectKind::Rare),
        fetch_contraindications(&pool, query.id),
        fetch_interactions(&pool, query.id),
    );

    Ok(assemble(row, common, serious, rare, contraindications, interactions))
}

/// Side-effect texts for one drug and type tag; empty on lookup failure.
async fn fetch_side_effects(pool: &PgPool, drug_id: i32, kind: SideEffectKind) -> Vec<String> {
    let result = sqlx::query_scalar::<_, String>(
        "SELECT effect FROM side_effects WHERE drug_id = $1 AND type = $2 ORDER BY id",
    )
    .bind(drug_id)
    .bind(kind.as_str())
    .fetch_all(pool)
    .await;

    match result {
        Ok(effects) => effects,
        Err(err) => {
            tracing::warn!(drug_id, kind = %kind, error = ?err, "side effect lookup failed");
            Vec::new()
        },
    }
}

/// Contraindication texts for one drug; empty on lookup failure.
async fn fetch_contraindications(pool: &PgPool, drug_id: i32) -> Vec<String> {
    let result = sqlx::query_scalar::<_, String>(
        "SELECT contraindication FROM contraindications WHERE drug_id = $1 ORDER BY id",
    )
    .bind(drug_id)
    .fetch_all(pool)
    .await;

    match result {
        Ok(texts) => texts,
        Err(err) => {
            tracing::warn!(drug_id, error = ?err, "contraindication lookup failed");
            Vec::new()
        },
    }
}

/// Interactions for one drug; empty on lookup failure.
async fn fetch_interactions(pool: &PgPool, drug_id: i32) -> Vec<Interaction> {
    let result = sqlx::query_as::<_, Interaction>(
        "SELECT name, description, severity FROM interactions WHERE drug_id = $1 ORDER BY id",
    )
    .bind(drug_id)
    .fetch_all(pool)
    .await;

    match result {
        Ok(interactions) => interactions,
        Err(err) => {
            tracing::warn!(drug_id, error = ?err, "interaction lookup failed");
            Vec::new()
        },
    }
}

/// Merge the primary row and auxiliary lists into the wire document. The
/// combined side_effects list is common ++ serious ++ rare in that exact
/// order, without dedup.
fn assemble(
    row: DrugRow,
    common: Vec<String>,
    serious: Vec<String>,
    rare: Vec<String>,
    contraindications: Vec<String>,
    interactions: Vec<Interaction>,
) -> Drug {
    let mut side_effects = Vec::with_capacity(common.len() + serious.len() + rare.len());
    side_effects.extend(common.iter().cloned());
    side_effects.extend(serious.iter().cloned());
    side_effects.extend(rare.iter().cloned());

    Drug {
        id: row.id,
        name: row.name,
        description: row.description,
        category_id: row.category_id,
        category: row.category,
        drug_class: row.drug_class,
        requires_prescription: row.requires_prescription,
        dosage: row.dosage,
        max_dosage: row.max_dosage,
        side_effects,
        common_side_effects: common,
        serious_side_effects: serious,
        rare_side_effects: rare,
        warnings: row.warnings,
        interactions,
        contraindications,
        mechanism_of_action: row.mechanism_of_action,
        pharmacokinetics: row.pharmacokinetics,
        half_life: row.half_life,
        onset_of_action: row.onset_of_action,
        route_of_administration: row.route_of_administration,
        pregnancy_category: row.pregnancy_category,
        pregnancy_info: row.pregnancy_info,
        lactation_info: row.lactation_info,
        storage_info: row.storage_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_category, seed_contraindication, seed_drug, seed_interaction, seed_side_effect,
    };

    fn bare_row(id: i32) -> DrugRow {
        DrugRow {
            id,
            name: "Aspirin".to_string(),
            description: "NSAID".to_string(),
            category_id: 1,
            category: "Analgesics".to_string(),
            drug_class: None,
            requires_prescription: false,
            dosage: None,
            max_dosage: None,
            warnings: None,
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
    fn test_combined_side_effects_preserve_order_and_duplicates() {
        let drug = assemble(
            bare_row(1),
            vec!["nausea".to_string(), "headache".to_string()],
            vec!["bleeding".to_string()],
            vec!["nausea".to_string()],
            vec![],
            vec![],
        );

        assert_eq!(
            drug.side_effects,
            vec!["nausea", "headache", "bleeding", "nausea"]
        );
        assert_eq!(drug.common_side_effects, vec!["nausea", "headache"]);
        assert_eq!(drug.serious_side_effects, vec!["bleeding"]);
        assert_eq!(drug.rare_side_effects, vec!["nausea"]);
    }

    #[test]
    fn test_assemble_with_no_auxiliary_rows_leaves_lists_empty() {
        let drug = assemble(bare_row(2), vec![], vec![], vec![], vec![], vec![]);
        assert!(drug.side_effects.is_empty());
        assert!(drug.contraindications.is_empty());
        assert!(drug.interactions.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: PgPool) -> sqlx::Result<()> {
        let result = handle(pool, GetDrugQuery { id: 9999 }).await;
        assert!(matches!(result, Err(GetDrugError::NotFound(9999))));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_assembles_full_document(pool: PgPool) -> sqlx::Result<()> {
        seed_category(&pool, 1, "Analgesics").await?;
        seed_drug(&pool, 1, "Aspirin", 1, false).await?;
        seed_side_effect(&pool, 1, "nausea", "common").await?;
        seed_side_effect(&pool, 1, "bleeding", "serious").await?;
        seed_side_effect(&pool, 1, "tinnitus", "rare").await?;
        seed_contraindication(&pool, 1, "Peptic ulcer").await?;
        seed_interaction(&pool, 1, "Warfarin", "Increased bleeding risk", Some("major")).await?;
        seed_interaction(&pool, 1, "Ibuprofen", "Competes for binding", None).await?;

        let drug = handle(pool, GetDrugQuery { id: 1 }).await.unwrap();

        assert_eq!(drug.name, "Aspirin");
        assert_eq!(drug.category, "Analgesics");
        assert_eq!(drug.side_effects, vec!["nausea", "bleeding", "tinnitus"]);
        assert_eq!(drug.contraindications, vec!["Peptic ulcer"]);
        assert_eq!(drug.interactions.len(), 2);
        assert_eq!(drug.interactions[0].name, "Warfarin");
        assert_eq!(drug.interactions[0].severity.as_deref(), Some("major"));
        assert_eq!(drug.interactions[1].severity, None);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_drug_without_auxiliary_rows(pool: PgPool) -> sqlx::Result<()> {
        seed_category(&pool, 1, "Analgesics").await?;
        seed_drug(&pool, 1, "Paracetamol", 1, false).await?;

        let drug = handle(pool, GetDrugQuery { id: 1 }).await.unwrap();
        assert!(drug.side_effects.is_empty());
        assert!(drug.interactions.is_empty());
        assert!(drug.contraindications.is_empty());
        Ok(())
    }
}
