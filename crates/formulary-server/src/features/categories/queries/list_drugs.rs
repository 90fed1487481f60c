//! List drugs by category query
//!
//! The summary projection filtered to one category id, ordered by name
//! ascending, no other filters. Reuses the drugs feature's projection so the
//! row shape matches `/drugs?categories={id}` by construction.

use sqlx::PgPool;

use crate::features::drugs::queries::list::SUMMARY_SELECT;
use crate::features::drugs::types::DrugSummary;

/// Errors that can occur when listing a category's drugs
#[derive(Debug, thiserror::Error)]
pub enum ListCategoryDrugsError {
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handles the list drugs by category query
///
/// An unknown category id yields an empty list, not 404.
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    category_id: i32,
) -> Result<Vec<DrugSummary>, ListCategoryDrugsError> {
    let sql = format!(
        "{} WHERE d.category_id = $1 ORDER BY d.name ASC",
        SUMMARY_SELECT
    );

    let drugs = sqlx::query_as::<_, DrugSummary>(&sql)
        .bind(category_id)
        .fetch_all(&pool)
        .await?;

    Ok(drugs)
}
