//! Error types for medaltally
//!
//! Extraction itself never fails on bad lines; these errors cover table I/O,
//! configuration and the lookups a caller can get wrong.

use thiserror::Error;

/// Main error type for the medaltally library
#[derive(Error, Debug)]
pub enum MedalError {
    /// A country or sport that has no rows in the loaded table
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// Persisted table does not match the expected layout
    #[error("Malformed medal table at line {line}: {reason}")]
    Schema { line: u64, reason: String },

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Interactive input errors (interrupt, readline failure)
    #[error("Input error: {0}")]
    InputError(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

impl MedalError {
    pub fn country_not_found(name: impl Into<String>) -> Self {
        MedalError::NotFound {
            kind: "Country",
            name: name.into(),
        }
    }

    pub fn schema(line: u64, reason: impl Into<String>) -> Self {
        MedalError::Schema {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for medaltally operations
pub type Result<T> = std::result::Result<T, MedalError>;

/// Convert anyhow errors to MedalError
impl From<anyhow::Error> for MedalError {
    fn from(err: anyhow::Error) -> Self {
        MedalError::Generic(err.to_string())
    }
}
