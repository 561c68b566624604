//! Use-case records and the ordered record set.

use crate::error::{MatrixError, Result};
use crate::quadrant::{classify, Quadrant};
use crate::rating::Rating;

/// A single rated use case.
///
/// Names are user supplied and not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub name: String,
    pub actionability: Rating,
    pub feasibility: Rating,
    pub business_value: Rating,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        actionability: Rating,
        feasibility: Rating,
        business_value: Rating,
    ) -> Self {
        Self {
            name: name.into(),
            actionability,
            feasibility,
            business_value,
        }
    }

    /// Returns the quadrant this record is classified into.
    pub fn quadrant(&self) -> Quadrant {
        classify(self.actionability, self.feasibility)
    }
}

/// Ordered collection of records forming a session's working dataset.
///
/// Insertion order is preserved and never sorted implicitly. Every
/// record holds typed [`Rating`]s, so the set is valid by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Appends a record and returns its index.
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Appends a new use case submitted through the entry form.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyName`] if `name` is blank.
    pub fn add(
        &mut self,
        name: &str,
        actionability: Rating,
        feasibility: Rating,
        business_value: Rating,
    ) -> Result<usize> {
        if name.trim().is_empty() {
            return Err(MatrixError::EmptyName);
        }
        Ok(self.push(Record::new(name, actionability, feasibility, business_value)))
    }

    /// Renames the record at `index`.
    ///
    /// Only names are editable in place; ratings are fixed once entered.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(MatrixError::EmptyName);
        }
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(MatrixError::RowOutOfRange { index, len })?;
        record.name = name.to_string();
        Ok(())
    }

    /// Removes and returns the record at `index`, shifting later rows up.
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        let len = self.records.len();
        if index >= len {
            return Err(MatrixError::RowOutOfRange { index, len });
        }
        Ok(self.records.remove(index))
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns the quadrant of every record, in set order.
    pub fn quadrants(&self) -> Vec<Quadrant> {
        self.records.iter().map(Record::quadrant).collect()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
