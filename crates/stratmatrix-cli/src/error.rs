//! Errors surfaced by the command line.

use stratmatrix::{ConfigError, MatrixError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("failed to serialize layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for refused input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Matrix(_) => 2,
            CliError::Table(err) if err.validation().is_some() => 2,
            _ => 1,
        }
    }
}
