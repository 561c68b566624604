//! Untyped string table read from CSV.

use std::io::Read;
use std::path::Path;

use crate::error::TableError;

/// A header row plus string cells, exactly as read from a CSV file.
///
/// Rows may be ragged; a missing trailing cell reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a table from CSV. The first record is the header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|row| row.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

        Ok(Self { headers, rows })
    }

    pub fn from_csv_str(s: &str) -> Result<Self, TableError> {
        Self::from_reader(s.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns the cell at `row` in column `col`, empty if the row is short.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .map(|cells| cells.get(col).map_or("", String::as_str))
    }

    /// Iterates over the cells of a named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let col = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |cells| cells.get(col).map_or("", String::as_str)),
        )
    }
}

// In-place edits used to build malformed tables in tests.
#[cfg(test)]
impl Table {
    /// Overwrites a single cell, padding a short row if needed.
    pub(crate) fn set_cell(&mut self, row: usize, column: &str, value: impl Into<String>) -> bool {
        let Some(col) = self.column_index(column) else {
            return false;
        };
        let Some(cells) = self.rows.get_mut(row) else {
            return false;
        };
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value.into();
        true
    }

    /// Removes a column and its cells.
    pub(crate) fn drop_column(&mut self, name: &str) -> bool {
        let Some(col) = self.column_index(name) else {
            return false;
        };
        self.headers.remove(col);
        for cells in &mut self.rows {
            if col < cells.len() {
                cells.remove(col);
            }
        }
        true
    }
}
