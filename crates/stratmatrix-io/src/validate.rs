//! Pure validation predicates over a [`Table`].

use stratmatrix_core::RATING_LABELS;

use crate::table::Table;

/// Columns every imported table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Actionability", "Feasibility", "Business Value"];

/// Columns whose cells must hold a rating literal.
pub const RATING_COLUMNS: [&str; 3] = ["Actionability", "Feasibility", "Business Value"];

/// Allowed rating literals, compared case-sensitively.
pub const VALID_RATINGS: [&str; 3] = RATING_LABELS;

/// Location and content of the first rating cell that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCell {
    pub column: String,
    pub row: usize,
    pub value: String,
}

/// Returns true iff every name in `required` is a column of `table`.
///
/// Extra columns are allowed.
pub fn validate_columns(table: &Table, required: &[&str]) -> bool {
    required.iter().all(|name| table.has_column(name))
}

/// Returns the required columns `table` lacks, in the order given.
pub fn missing_columns(table: &Table, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect()
}

/// Returns true iff every cell of every rating column is in `valid_values`.
///
/// A rating column missing from the table counts as a failure.
pub fn validate_ratings(table: &Table, rating_columns: &[&str], valid_values: &[&str]) -> bool {
    rating_columns.iter().all(|name| table.has_column(name))
        && find_invalid_rating(table, rating_columns, valid_values).is_none()
}

/// Scans rating columns left to right, rows top to bottom, and returns the
/// first cell outside `valid_values`. Missing columns are skipped.
pub fn find_invalid_rating(
    table: &Table,
    rating_columns: &[&str],
    valid_values: &[&str],
) -> Option<InvalidCell> {
    rating_columns.iter().find_map(|&name| {
        table.column(name)?.enumerate().find_map(|(row, value)| {
            (!valid_values.contains(&value)).then(|| InvalidCell {
                column: name.to_string(),
                row,
                value: value.to_string(),
            })
        })
    })
}
