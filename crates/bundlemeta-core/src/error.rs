//! Error types for the bundlemeta data model

use thiserror::Error;

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Error type for attribute container and configuration handling
#[derive(Error, Debug)]
pub enum CoreError {
    /// A child namespace was requested where a non-namespace value is stored
    #[error("attribute '{0}' exists but is not a namespace")]
    NotANamespace(String),

    /// A record field holds a value of a different type than the key expects
    #[error("field '{field}' holds {actual}, expected {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
