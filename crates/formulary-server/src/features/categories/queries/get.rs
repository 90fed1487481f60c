//! Get category query
//!
//! Same aggregate shape as the listing, filtered to one id.

use sqlx::PgPool;

use super::super::types::Category;
use super::list::CATEGORY_SELECT;

/// Query to retrieve one category by id
#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub id: i32,
}

/// Errors that can occur when getting a category
#[derive(Debug, thiserror::Error)]
pub enum GetCategoryError {
    /// No category row exists for the id
    #[error("Category {0} not found")]
    NotFound(i32),
    /// A database error occurred
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handles the get category query
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetCategoryQuery) -> Result<Category, GetCategoryError> {
    let sql = format!("{} WHERE c.id = $1 GROUP BY c.id", CATEGORY_SELECT);

    let category = sqlx::query_as::<_, Category>(&sql)
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetCategoryError::NotFound(query.id))?;

    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{seed_category, seed_drug};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_returns_category_with_count(pool: PgPool) -> sqlx::Result<()> {
        seed_category(&pool, 1, "Analgesics").await?;
        seed_drug(&pool, 1, "Aspirin", 1, false).await?;

        let category = handle(pool, GetCategoryQuery { id: 1 }).await.unwrap();
        assert_eq!(category.name, "Analgesics");
        assert_eq!(category.drug_count, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: PgPool) -> sqlx::Result<()> {
        let result = handle(pool, GetCategoryQuery { id: 41 }).await;
        assert!(matches!(result, Err(GetCategoryError::NotFound(41))));
        Ok(())
    }
}
