//! Custom error types for Stockroom
//!
//! This module defines the error hierarchy for the reports engine using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Stockroom operations
#[derive(Error, Debug)]
pub enum StockroomError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for form input and models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// An operation was attempted without the state it needs
    #[error("{0}")]
    Precondition(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StockroomError {
    /// Create a "not found" error for report types
    pub fn report_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Report",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for filter presets
    pub fn preset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Preset",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for filter fields
    pub fn filter_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Filter",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a precondition error
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

impl From<std::io::Error> for StockroomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StockroomError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for StockroomError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Stockroom operations
pub type StockroomResult<T> = Result<T, StockroomError>;
