//! Table to record set conversion.

use std::io::Read;
use std::path::Path;

use stratmatrix_core::{MatrixError, Rating, Record, RecordSet};
use tracing::{info, warn};

use crate::error::TableError;
use crate::table::Table;
use crate::validate::{
    find_invalid_rating, missing_columns, RATING_COLUMNS, REQUIRED_COLUMNS, VALID_RATINGS,
};

/// Builds a record set from a table that passes both validators.
///
/// Nothing is repaired: a missing column or a single bad rating cell
/// refuses the whole table.
///
/// # Errors
///
/// - [`MatrixError::SchemaValidation`] listing the missing columns
/// - [`MatrixError::ValueValidation`] for the first bad rating cell
pub fn records_from_table(table: &Table) -> Result<RecordSet, MatrixError> {
    let missing = missing_columns(table, &REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(MatrixError::SchemaValidation { missing });
    }
    if let Some(cell) = find_invalid_rating(table, &RATING_COLUMNS, &VALID_RATINGS) {
        return Err(MatrixError::ValueValidation {
            column: cell.column,
            row: cell.row,
            value: cell.value,
        });
    }

    let column = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| MatrixError::SchemaValidation {
                missing: vec![name.to_string()],
            })
    };
    let name_col = column("Name")?;
    let actionability_col = column("Actionability")?;
    let feasibility_col = column("Feasibility")?;
    let business_value_col = column("Business Value")?;

    let rating = |row: usize, col: usize| -> Result<Rating, MatrixError> {
        table.cell(row, col).unwrap_or_default().parse()
    };

    (0..table.row_count())
        .map(|row| {
            Ok(Record::new(
                table.cell(row, name_col).unwrap_or_default(),
                rating(row, actionability_col)?,
                rating(row, feasibility_col)?,
                rating(row, business_value_col)?,
            ))
        })
        .collect()
}

/// Reads CSV from `reader` and converts it into a validated record set.
pub fn import_csv<R: Read>(reader: R) -> Result<RecordSet, TableError> {
    let table = Table::from_reader(reader)?;
    match records_from_table(&table) {
        Ok(records) => {
            info!(
                event = "import",
                record_count = records.len() as u64,
                column_count = table.headers().len() as u64,
            );
            Ok(records)
        }
        Err(err) => {
            warn!(event = "import_rejected", reason = %err);
            Err(err.into())
        }
    }
}

/// Reads and validates a CSV file.
pub fn import_path(path: impl AsRef<Path>) -> Result<RecordSet, TableError> {
    let file = std::fs::File::open(path)?;
    import_csv(file)
}
