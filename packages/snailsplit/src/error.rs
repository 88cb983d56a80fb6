//! Error types for snailsplit.
//!
//! The core algorithms are total and never return errors; `SnailsplitError`
//! covers the checked entry points, matrix loading and the CLI.

use thiserror::Error;

/// Main error type for the snailsplit library.
#[derive(Debug, Error)]
pub enum SnailsplitError {
    /// Input contains something other than decimal digits.
    #[error("Invalid digit string: '{0}'. Expected only characters 0-9")]
    InvalidDigits(String),

    /// Matrix row length differs from the number of rows.
    #[error("Matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Requested demo matrix size is out of range.
    #[error("Invalid matrix size: {size}. Expected 1..={max}")]
    InvalidSize { size: usize, max: usize },

    /// Matrix file extension is not recognised.
    #[error("Unsupported matrix file format: '{0}'. Expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for snailsplit operations.
pub type Result<T> = std::result::Result<T, SnailsplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SnailsplitError::InvalidDigits("12a".to_string());
        assert!(err.to_string().contains("12a"));
        assert!(err.to_string().contains("0-9"));
    }

    #[test]
    fn test_not_square_display() {
        let err = SnailsplitError::NotSquare {
            row: 2,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Matrix is not square: row 2 has 2 columns, expected 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: SnailsplitError = io.into();
        assert!(matches!(err, SnailsplitError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
