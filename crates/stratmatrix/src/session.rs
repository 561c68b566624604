//! Session state owning the working record set.

use std::io::{Read, Write};
use std::path::Path;

use stratmatrix_config::MatrixConfig;
use stratmatrix_core::{Rating, Record, RecordSet};
use stratmatrix_io::TableError;
use stratmatrix_layout::{LayoutEngine, MatrixLayout, RandomJitter};
use tracing::info;

/// The working dataset of one user session.
///
/// Every mutation goes through the session; rendering never changes it.
/// Jitter is redrawn on each [`render`](Self::render). With
/// `random_seed` configured every render restarts from that seed,
/// otherwise one OS-seeded generator keeps advancing.
#[derive(Debug, Clone)]
pub struct Session {
    records: RecordSet,
    config: MatrixConfig,
    engine: LayoutEngine,
    jitter: RandomJitter,
}

impl Session {
    /// Creates an empty session.
    pub fn new(config: MatrixConfig) -> Self {
        Self::with_records(RecordSet::new(), config)
    }

    /// Creates a session over an existing record set.
    pub fn with_records(records: RecordSet, config: MatrixConfig) -> Self {
        Self {
            records,
            engine: LayoutEngine::new(&config),
            jitter: RandomJitter::new(),
            config,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a use case, returning its row index.
    ///
    /// A blank name is refused with `MatrixError::EmptyName`.
    pub fn add_use_case(
        &mut self,
        name: &str,
        actionability: Rating,
        feasibility: Rating,
        business_value: Rating,
    ) -> stratmatrix_core::Result<usize> {
        self.records
            .add(name, actionability, feasibility, business_value)
    }

    /// Replaces the record set with a validated CSV table.
    ///
    /// On any error the session keeps its current records.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize, TableError> {
        let records = stratmatrix_io::import_csv(reader)?;
        self.records = records;
        Ok(self.records.len())
    }

    /// Replaces the record set with a validated CSV file.
    pub fn import_path(&mut self, path: impl AsRef<Path>) -> Result<usize, TableError> {
        let records = stratmatrix_io::import_path(path)?;
        self.records = records;
        Ok(self.records.len())
    }

    /// Renames the record at `index`. Ratings cannot be edited in place.
    pub fn rename(&mut self, index: usize, name: &str) -> stratmatrix_core::Result<()> {
        self.records.rename(index, name)
    }

    /// Removes the record at `index`.
    pub fn remove(&mut self, index: usize) -> stratmatrix_core::Result<Record> {
        self.records.remove(index)
    }

    /// Clears every record, returning how many were removed.
    pub fn reset(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        info!(event = "session_reset", record_count = cleared as u64);
        cleared
    }

    /// Returns the CSV export of the session.
    pub fn export_csv(&self) -> Result<String, TableError> {
        stratmatrix_io::to_csv_string(&self.records)
    }

    /// Writes the CSV export of the session to `writer`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        stratmatrix_io::write_csv(&self.records, writer)
    }

    /// Runs a fresh layout pass over the current records.
    pub fn render(&mut self) -> MatrixLayout {
        match self.config.random_seed {
            Some(seed) => self.render_with_seed(seed),
            None => self.engine.layout(&self.records, &mut self.jitter),
        }
    }

    /// Runs a layout pass with jitter drawn from `seed`.
    pub fn render_with_seed(&self, seed: u64) -> MatrixLayout {
        self.engine
            .layout(&self.records, &mut RandomJitter::with_seed(seed))
    }

    /// Renders and serializes the layout as pretty JSON.
    pub fn render_json(&mut self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.render())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MatrixConfig::default())
    }
}
