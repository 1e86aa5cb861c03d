//! Record collections
//!
//! This module provides the session register of classified records, a
//! lock-guarded handle for sharing it between clients, and the collection
//! trait both are queried through.

pub mod register;
pub mod shared;

pub use register::ChildRegister;
pub use shared::SharedRegister;

use crate::models::ChildRecord;

/// A trait for collections of classified records that can be queried and extended.
pub trait RecordCollection {
    /// Add a record to the collection
    fn add(&mut self, record: ChildRecord);

    /// Get all records in the collection
    fn all(&self) -> Vec<&ChildRecord>;

    /// Filter records by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&ChildRecord>
    where
        F: Fn(&ChildRecord) -> bool;

    /// Count the total number of records in the collection
    fn count(&self) -> usize;
}
