//! File-level import and export of record sets.

use stratmatrix_core::MatrixError;
use stratmatrix_io::{
    export_path, import_path, validate_columns, validate_ratings, Table, TableError,
    RATING_COLUMNS, REQUIRED_COLUMNS, VALID_RATINGS,
};
use stratmatrix_test::{record, sample_records, SAMPLE_CSV};

#[test]
fn test_export_then_import_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("use_cases.csv");

    let mut records = sample_records();
    records.push(record("Fraud \"Detection\"", "High", "Low", "High"));
    export_path(&records, &path).unwrap();

    assert_eq!(import_path(&path).unwrap(), records);
}

#[test]
fn test_exported_sample_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("use_cases.csv");
    export_path(&sample_records(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_rejected_file_reports_first_bad_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "Name,Actionability,Feasibility,Business Value\n\
         A,High,High,High\n\
         B,Medium,Very High,Low\n",
    )
    .unwrap();

    let table = Table::from_path(&path).unwrap();
    assert!(validate_columns(&table, &REQUIRED_COLUMNS));
    assert!(!validate_ratings(&table, &RATING_COLUMNS, &VALID_RATINGS));

    match import_path(&path) {
        Err(TableError::Matrix(MatrixError::ValueValidation { column, row, value })) => {
            assert_eq!((column.as_str(), row, value.as_str()), ("Feasibility", 1, "Very High"));
        }
        other => panic!("expected value validation error, got {other:?}"),
    }
}
