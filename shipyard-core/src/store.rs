//! In-memory record store
//!
//! An ordered sequence of ship records. Insertion order is preserved and
//! positions are stable across `replace`.

use crate::error::{CoreError, CoreResult};
use crate::types::ShipRecord;

/// Ordered, mutable sequence of ship records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<ShipRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end and return its index.
    pub fn append(&mut self, record: ShipRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Overwrite the record at `index` in place.
    pub fn replace(&mut self, index: usize, record: ShipRecord) -> CoreResult<ShipRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove the record at `index`, shifting later records down by one.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<ShipRecord> {
        if index >= self.records.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShipRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShipRecord> {
        self.records.iter()
    }

    /// Case-insensitive code lookup, skipping the record at `exclude`.
    pub fn code_exists(&self, code: &str, exclude: Option<usize>) -> bool {
        self.records
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .any(|(_, record)| record.code.eq_ignore_ascii_case(code))
    }
}

impl FromIterator<ShipRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = ShipRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
