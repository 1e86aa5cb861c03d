//! Session record register
//!
//! An explicitly owned, append-only list of classified records. Records keep
//! their insertion order; the only removal is whole-record deletion by name or
//! position. Any mutation clears the saved flag, which only a successful
//! persistence sets again.

use super::RecordCollection;
use crate::error::{AnisanError, Result};
use crate::models::ChildRecord;

/// Ordered collection of classified records for one screening session
#[derive(Debug, Default, Clone)]
pub struct ChildRegister {
    records: Vec<ChildRecord>,
    saved: bool,
}

impl ChildRegister {
    /// Create a new empty register
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            saved: false,
        }
    }

    /// Create a register holding the given records in order
    #[must_use]
    pub fn with_records(records: Vec<ChildRecord>) -> Self {
        Self {
            records,
            saved: false,
        }
    }

    /// Append a record and return its position
    pub fn append(&mut self, record: ChildRecord) -> usize {
        log::debug!(
            "Appending record for {} ({})",
            record.name(),
            record.category().short_code()
        );
        self.records.push(record);
        self.saved = false;
        self.records.len() - 1
    }

    /// Remove every record with the given name, returning the removed records
    pub fn remove_by_name(&mut self, name: &str) -> Result<Vec<ChildRecord>> {
        let name = name.trim();
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| record.name() == name);
        self.records = kept;

        if removed.is_empty() {
            return Err(AnisanError::RecordNotFound(name.to_string()));
        }
        self.saved = false;
        log::info!("Removed {} record(s) for {name}", removed.len());
        Ok(removed)
    }

    /// Remove the record at a position
    pub fn remove_at(&mut self, index: usize) -> Result<ChildRecord> {
        if index >= self.records.len() {
            return Err(AnisanError::RecordNotFound(format!("index {index}")));
        }
        self.saved = false;
        Ok(self.records.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChildRecord> {
        self.records.get(index)
    }

    /// Records in insertion order
    #[must_use]
    pub fn records(&self) -> &[ChildRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with the given name, in insertion order
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&ChildRecord> {
        let name = name.trim();
        self.records.iter().filter(|r| r.name() == name).collect()
    }

    /// The most severe record; the earliest one wins ties
    #[must_use]
    pub fn most_severe(&self) -> Option<&ChildRecord> {
        self.records
            .iter()
            .rev()
            .max_by_key(|record| record.classification().severity_rank)
    }

    /// Whether the current contents have been persisted
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    /// Mark the current contents as persisted
    pub fn mark_saved(&mut self) {
        self.saved = true;
    }
}

impl RecordCollection for ChildRegister {
    fn add(&mut self, record: ChildRecord) {
        self.append(record);
    }

    fn all(&self) -> Vec<&ChildRecord> {
        self.records.iter().collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&ChildRecord>
    where
        F: Fn(&ChildRecord) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).collect()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

impl<'a> IntoIterator for &'a ChildRegister {
    type Item = &'a ChildRecord;
    type IntoIter = std::slice::Iter<'a, ChildRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
