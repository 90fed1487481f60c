//! Formulary Server Library
//!
//! Read-only HTTP API over a relational drug catalog.
//!
//! # Overview
//!
//! The server exposes the catalog to a single consuming frontend:
//!
//! - **Drugs**: filterable, searchable, sortable listing plus a full detail
//!   document assembled from the drug row and its side-effect,
//!   contraindication, and interaction tables
//! - **Categories**: listing and lookup with live drug counts
//!
//! There is no write path; the catalog is populated by an external schema
//! process and this service only reads it.
//!
//! # Architecture
//!
//! Feature slices under [`features`] own their queries and routes; each query
//! module pairs a parameter struct with a `handle` function and its own error
//! enum. Handlers translate query errors into HTTP responses, logging causes
//! server-side and returning generic bodies to the client.
//!
//! ## Framework Stack
//!
//! - **Axum**: routing and extraction
//! - **SQLx**: Postgres access through runtime-checked queries
//! - **Tower / tower-http**: CORS, tracing, and compression layers
//!
//! # Example
//!
//! ```no_run
//! use formulary_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     api::serve(config, pool).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use config::Config;
