//! Custom error types for Runway
//!
//! This module defines the error hierarchy for the application using thiserror.
//! The projection engine never produces these; they belong to the storage,
//! service and CLI layers that wrap it.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for Runway operations
#[derive(Error, Debug)]
pub enum RunwayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
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

    /// A planned expense would push its account below zero
    #[error(
        "This plan would make {account} go negative (≈ {balance:.2} on {date}). \
         Reduce the amount, move the date, or increase contributions. \
         (Planning estimate only, not a ledger guarantee.)"
    )]
    WouldGoNegative {
        account: String,
        balance: f64,
        date: NaiveDate,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RunwayError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create an error for an identifier that matches more than one record
    pub fn ambiguous(entity_type: &str, identifier: &str, count: usize) -> Self {
        Self::Validation(format!(
            "'{}' matches {} {}s. Use the ID shown by the list command.",
            identifier,
            count,
            entity_type.to_lowercase()
        ))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (including affordability rejections)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::WouldGoNegative { .. })
    }
}

impl From<std::io::Error> for RunwayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RunwayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Runway operations
pub type RunwayResult<T> = Result<T, RunwayError>;
