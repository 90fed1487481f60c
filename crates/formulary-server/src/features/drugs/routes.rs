use crate::api::response::ErrorResponse;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{self, GetDrugError, GetDrugQuery, ListDrugsError, ListDrugsParams};

pub fn drugs_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_drugs))
        .route("/:id", get(get_drug))
}

#[tracing::instrument(skip(pool, params))]
async fn list_drugs(
    State(pool): State<PgPool>,
    Query(params): Query<ListDrugsParams>,
) -> Result<Response, DrugApiError> {
    let drugs = queries::list::handle(pool, params).await?;

    tracing::debug!(count = drugs.len(), "Drugs listed via API");

    Ok((StatusCode::OK, Json(drugs)).into_response())
}

#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_drug(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Response, DrugApiError> {
    let drug = queries::get::handle(pool, GetDrugQuery { id }).await?;

    tracing::debug!(drug_id = drug.id, "Drug retrieved via API");

    Ok((StatusCode::OK, Json(drug)).into_response())
}

#[derive(Debug)]
enum DrugApiError {
    ListError(ListDrugsError),
    GetError(GetDrugError),
}

impl From<ListDrugsError> for DrugApiError {
    fn from(err: ListDrugsError) -> Self {
        Self::ListError(err)
    }
}

impl From<GetDrugError> for DrugApiError {
    fn from(err: GetDrugError) -> Self {
        Self::GetError(err)
    }
}

impl IntoResponse for DrugApiError {
    fn into_response(self) -> Response {
        match self {
            DrugApiError::GetError(GetDrugError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            DrugApiError::ListError(ListDrugsError::Database(_))
            | DrugApiError::GetError(GetDrugError::Database(_)) => {
                tracing::error!("Database error during drug retrieval: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for DrugApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListError(e) => write!(f, "{}", e),
            Self::GetError(e) => write!(f, "{}", e),
        }
    }
}
