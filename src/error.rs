//! Custom error types for cotacao-cafe
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cotacao-cafe operations
#[derive(Error, Debug)]
pub enum CotacaoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user-typed decimal input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CotacaoError {
    /// Create a "not found" error for coffee varieties
    pub fn variety_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Variety",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a quote position within a variety
    pub fn entry_not_found(variety: &str, index: usize) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: format!("{} #{}", variety, index),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a storage error (persistence read/write)
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CotacaoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CotacaoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cotacao-cafe operations
pub type CotacaoResult<T> = Result<T, CotacaoError>;
