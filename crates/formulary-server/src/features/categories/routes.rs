use crate::api::response::ErrorResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{
    self, GetCategoryError, GetCategoryQuery, ListCategoriesError, ListCategoryDrugsError,
};

pub fn categories_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
        .route("/:id/drugs", get(list_category_drugs))
}

#[tracing::instrument(skip(pool))]
async fn list_categories(State(pool): State<PgPool>) -> Result<Response, CategoryApiError> {
    let categories = queries::list::handle(pool).await?;

    tracing::debug!(count = categories.len(), "Categories listed via API");

    Ok((StatusCode::OK, Json(categories)).into_response())
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_category(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Response, CategoryApiError> {
    let category = queries::get::handle(pool, GetCategoryQuery { id }).await?;

    tracing::debug!(category_id = category.id, "Category retrieved via API");

    Ok((StatusCode::OK, Json(category)).into_response())
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn list_category_drugs(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Response, CategoryApiError> {
    let drugs = queries::list_drugs::handle(pool, id).await?;

    tracing::debug!(category_id = id, count = drugs.len(), "Category drugs listed via API");

    Ok((StatusCode::OK, Json(drugs)).into_response())
}

#[derive(Debug)]
enum CategoryApiError {
    ListError(ListCategoriesError),
    GetError(GetCategoryError),
    ListDrugsError(ListCategoryDrugsError),
}

impl From<ListCategoriesError> for CategoryApiError {
    fn from(err: ListCategoriesError) -> Self {
        Self::ListError(err)
    }
}

impl From<GetCategoryError> for CategoryApiError {
    fn from(err: GetCategoryError) -> Self {
        Self::GetError(err)
    }
}

impl From<ListCategoryDrugsError> for CategoryApiError {
    fn from(err: ListCategoryDrugsError) -> Self {
        Self::ListDrugsError(err)
    }
}

impl IntoResponse for CategoryApiError {
    fn into_response(self) -> Response {
        match self {
            CategoryApiError::GetError(GetCategoryError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            CategoryApiError::ListError(ListCategoriesError::Database(_))
            | CategoryApiError::GetError(GetCategoryError::Database(_))
            | CategoryApiError::ListDrugsError(ListCategoryDrugsError::Database(_)) => {
                tracing::error!("Database error during category retrieval: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for CategoryApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListError(e) => write!(f, "{}", e),
            Self::GetError(e) => write!(f, "{}", e),
            Self::ListDrugsError(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        let err = CategoryApiError::GetError(GetCategoryError::NotFound(7));
        assert_eq!(err.to_string(), "Category 7 not found");
    }

    #[test]
    fn test_routes_structure() {
        let router = categories_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
