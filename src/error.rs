//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Amount text could not be parsed or was not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Description was blank or too long
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    /// Date text did not match the configured format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Category is not part of the configured vocabulary
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error comes from validating user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidAmount(_)
                | Self::InvalidDescription(_)
                | Self::InvalidDate(_)
                | Self::UnknownCategory(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::transaction_not_found("txn-1234");
        assert_eq!(err.to_string(), "Transaction not found: txn-1234");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors() {
        assert!(LedgerError::InvalidAmount("0".into()).is_validation());
        assert!(LedgerError::InvalidDescription("empty".into()).is_validation());
        assert!(!LedgerError::Storage("disk full".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: LedgerError = json_err.into();
        assert!(matches!(err, LedgerError::Json(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: LedgerError = yaml_err.into();
        assert!(matches!(err, LedgerError::Yaml(_)));
    }
}
