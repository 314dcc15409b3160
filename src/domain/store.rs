use crate::domain::field::FieldValue;
use crate::domain::record::{Record, RecordId};
use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};

/// In-memory table for one business domain
///
/// Rows keep insertion order (the table's unsorted display order). Ids come
/// from a monotonic counter that is independent of the current row count, so
/// removing a row can never cause an id to be reissued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStore<R> {
    records: Vec<R>,
    next_seq: u32,
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_seq: 1,
        }
    }

    /// Loads pre-assigned rows, advancing the id counter past them
    pub fn seed(records: Vec<R>) -> Self {
        let next_seq = records.iter().map(|r| r.id().seq()).max().unwrap_or(0) + 1;
        Self { records, next_seq }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Validates the draft, assigns the next id and appends the row
    ///
    /// Whatever id the draft carried is discarded; the store is the only
    /// place ids are minted.
    pub fn add(&mut self, mut record: R) -> Result<RecordId> {
        record.validate()?;
        record.normalize();
        let id = RecordId::new(R::ID_PREFIX, self.next_seq);
        self.next_seq += 1;
        record.assign_id(id.clone());
        self.records.push(record);
        Ok(id)
    }

    /// Whole-row replacement; the stored id wins over the incoming one
    pub fn edit(&mut self, id: &RecordId, mut record: R) -> Result<()> {
        record.validate()?;
        record.normalize();
        record.assign_id(id.clone());
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        *slot = record;
        Ok(())
    }

    /// Single-cell write, used by inline double-click editing
    pub fn cell_update(&mut self, id: &RecordId, field: R::Field, value: FieldValue) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        record.set(field, value)
    }

    pub fn remove(&mut self, id: &RecordId) -> Result<R> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        Ok(self.records.remove(pos))
    }

    /// Applies `f` to every row, returning how many rows it changed
    ///
    /// Crate-internal: this is the cascade primitive, reachable from outside
    /// only through the aggregate's rename operations.
    pub(crate) fn rewrite<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&mut R) -> bool,
    {
        let mut changed = 0;
        for record in &mut self.records {
            if f(record) {
                changed += 1;
            }
        }
        changed
    }

    /// Rows whose status equals `name`
    pub fn count_with_status(&self, name: &str) -> usize {
        self.records.iter().filter(|r| r.status() == name).count()
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
