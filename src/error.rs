//! Error types for Spendlite
//!
//! A single error enum covers the whole crate, following the taxonomy of the
//! ledger core: invalid records are rejected on entry, malformed CSV headers
//! abort an import, and missing ids are surfaced as no-ops by the store.

use thiserror::Error;

/// The main error type for Spendlite operations
#[derive(Error, Debug)]
pub enum SpendliteError {
    /// A record failed normalization on the interactive add/edit path
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A CSV header is missing one of the required columns
    #[error("CSV header missing required column: {0}")]
    MissingColumns(String),

    /// A referenced transaction id does not exist
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// Storage errors (corrupt data file, failed atomic write, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write errors other than a bad header
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SpendliteError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a record validation error
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord(_))
    }
}

/// Result type alias for Spendlite operations
pub type SpendliteResult<T> = Result<T, SpendliteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendliteError::InvalidRecord("category must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid record: category must not be empty"
        );
        assert!(err.is_invalid_record());
    }

    #[test]
    fn test_missing_columns_display() {
        let err = SpendliteError::MissingColumns("amount".into());
        assert_eq!(err.to_string(), "CSV header missing required column: amount");
    }

    #[test]
    fn test_not_found() {
        let err = SpendliteError::NotFound("abc123".into());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendliteError = io_err.into();
        assert!(matches!(err, SpendliteError::Io(_)));
    }
}
