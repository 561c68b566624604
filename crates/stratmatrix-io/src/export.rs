//! Record set to CSV serialization.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use stratmatrix_core::{Rating, Record, RecordSet};
use tracing::info;

use crate::error::TableError;
use crate::validate::REQUIRED_COLUMNS;

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    actionability: Rating,
    feasibility: Rating,
    business_value: Rating,
}

impl<'a> From<&'a Record> for CsvRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            name: &record.name,
            actionability: record.actionability,
            feasibility: record.feasibility,
            business_value: record.business_value,
        }
    }
}

/// Writes `records` as CSV with the header
/// `Name,Actionability,Feasibility,Business Value`.
///
/// The header is written even when the set is empty, so the output always
/// imports back.
pub fn write_csv<W: Write>(records: &RecordSet, writer: W) -> Result<(), TableError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(REQUIRED_COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    info!(event = "export", record_count = records.len() as u64);
    Ok(())
}

/// Returns the CSV export of `records` as a string.
pub fn to_csv_string(records: &RecordSet) -> Result<String, TableError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the CSV export of `records` to a file, replacing it.
pub fn export_path(records: &RecordSet, path: impl AsRef<Path>) -> Result<(), TableError> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratmatrix_test::{record, sample_records, SAMPLE_CSV};

    #[test]
    fn test_sample_export_matches() {
        assert_eq!(to_csv_string(&sample_records()).unwrap(), SAMPLE_CSV);
    }

    #[test]
    fn test_empty_set_keeps_header() {
        assert_eq!(
            to_csv_string(&RecordSet::new()).unwrap(),
            "Name,Actionability,Feasibility,Business Value\n"
        );
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let records: RecordSet = vec![record("Search, semantic", "Low", "High", "Medium")].into();
        assert_eq!(
            to_csv_string(&records).unwrap(),
            "Name,Actionability,Feasibility,Business Value\n\"Search, semantic\",Low,High,Medium\n"
        );
    }
}
