//! StratMatrix IO - CSV boundary of the record set
//!
//! Tables read from CSV are checked by two pure predicates before a record
//! set is built from them:
//! - [`validate_columns`] - every required column is present
//! - [`validate_ratings`] - every rating cell holds Low, Medium or High
//!
//! [`import_csv`] runs both and refuses the table on failure; it never
//! repairs data. [`write_csv`] produces the same four-column schema.

mod error;
mod export;
mod import;
mod table;
mod validate;

pub use error::TableError;
pub use export::{export_path, to_csv_string, write_csv};
pub use import::{import_csv, import_path, records_from_table};
pub use table::Table;
pub use validate::{
    find_invalid_rating, missing_columns, validate_columns, validate_ratings, InvalidCell,
    RATING_COLUMNS, REQUIRED_COLUMNS, VALID_RATINGS,
};
