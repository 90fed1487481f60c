//! Formulary Common Library
//!
//! Shared error handling and logging infrastructure for the Formulary
//! workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the crate-wide [`FormularyError`] type and `Result`
//!   alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`] for
//!   tracing-based structured logging with console/file targets
//!
//! # Example
//!
//! ```no_run
//! use formulary_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("logging is up");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{FormularyError, Result};
