//! Error types for StratMatrix

use thiserror::Error;

/// Main error type for StratMatrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A rating literal outside Low/Medium/High
    #[error("Invalid rating {0:?}: expected one of Low, Medium, High")]
    InvalidRating(String),

    /// A rank outside 1..=3
    #[error("Invalid rank {0}: expected 1, 2 or 3")]
    InvalidRank(i64),

    /// Imported table lacks one or more required columns
    #[error("CSV must contain columns: {}", .missing.join(", "))]
    SchemaValidation { missing: Vec<String> },

    /// A rating cell holds a value outside the allowed set
    #[error("Invalid value {value:?} in column {column:?} (row {row}): expected one of Low, Medium, High")]
    ValueValidation {
        column: String,
        row: usize,
        value: String,
    },

    /// Use case submitted without a name
    #[error("Use case name is required")]
    EmptyName,

    /// Row index does not address a record
    #[error("Row {index} is out of range (record set has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

impl MatrixError {
    /// Returns true for errors that must refuse an import.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MatrixError::SchemaValidation { .. } | MatrixError::ValueValidation { .. }
        )
    }
}

/// Result type alias for StratMatrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
