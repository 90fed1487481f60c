//! List categories query
//!
//! One aggregate query: every category joined to its live drug count,
//! ordered by name ascending.

use sqlx::PgPool;

use super::super::types::Category;

/// Aggregate projection shared with the single-category lookup. GROUP BY the
/// primary key is enough for Postgres to resolve the other category columns.
pub(in crate::features::categories) const CATEGORY_SELECT: &str =
    "SELECT c.id, c.name, c.description, COUNT(d.id) AS drug_count \
     FROM categories c LEFT JOIN drugs d ON d.category_id = c.id";

/// Errors that can occur when listing categories
#[derive(Debug, thiserror::Error)]
pub enum ListCategoriesError {
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handles the list categories query
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<Category>, ListCategoriesError> {
    let sql = format!("{} GROUP BY c.id ORDER BY c.name ASC", CATEGORY_SELECT);

    let categories = sqlx::query_as::<_, Category>(&sql)
        .fetch_all(&pool)
        .await?;

    Ok(categories)
}
