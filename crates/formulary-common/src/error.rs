//! Error types shared across the Formulary workspace

use thiserror::Error;

/// Result type alias for Formulary operations
pub type Result<T> = std::result::Result<T, FormularyError>;

/// Main error type for Formulary
#[derive(Error, Debug)]
pub enum FormularyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
