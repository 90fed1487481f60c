//! Feature modules implementing the Formulary API
//!
//! Each feature is a vertical slice owning its queries and routes:
//!
//! - **drugs**: filterable drug listing and the assembled drug detail
//!   document
//! - **categories**: category listing/lookup with live drug counts, plus the
//!   per-category drug listing
//!
//! Every query module pairs a parameter type with a `handle` function and a
//! per-operation error enum; `routes.rs` maps those errors onto HTTP.

pub mod categories;
pub mod drugs;
pub mod shared;

use axum::Router;
use sqlx::PgPool;

/// Creates the API router with all feature routes mounted
///
/// - `/drugs` - drug listing and detail
/// - `/categories` - category listing, lookup, and per-category drugs
pub fn router(pool: PgPool) -> Router<()> {
    Router::new()
        .nest("/drugs", drugs::drugs_routes().with_state(pool.clone()))
        .nest("/categories", categories::categories_routes().with_state(pool))
}
