//! Error types for CSV import and export.

use stratmatrix_core::MatrixError;
use thiserror::Error;

/// Error reading, validating or writing a CSV table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl TableError {
    /// Returns the validation failure, if the table was refused for its
    /// columns or values.
    pub fn validation(&self) -> Option<&MatrixError> {
        match self {
            TableError::Matrix(err) if err.is_validation() => Some(err),
            _ => None,
        }
    }
}
