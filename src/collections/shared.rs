//! Thread-safe handle to a session register
//!
//! Every mutation takes the lock once, so concurrent appends and deletions
//! are applied one after another and never interleave.

use std::sync::{Arc, Mutex, MutexGuard};

use super::ChildRegister;
use crate::error::{AnisanError, Result};
use crate::models::ChildRecord;

/// Cloneable handle sharing one `ChildRegister` between clients
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    inner: Arc<Mutex<ChildRegister>>,
}

impl SharedRegister {
    /// Wrap an owned register
    #[must_use]
    pub fn new(register: ChildRegister) -> Self {
        Self {
            inner: Arc::new(Mutex::new(register)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ChildRegister>> {
        self.inner.lock().map_err(|_| AnisanError::LockPoisoned)
    }

    /// Append a record and return its position
    pub fn append(&self, record: ChildRecord) -> Result<usize> {
        Ok(self.lock()?.append(record))
    }

    /// Remove every record with the given name
    pub fn remove_by_name(&self, name: &str) -> Result<Vec<ChildRecord>> {
        self.lock()?.remove_by_name(name)
    }

    /// Remove the record at a position
    pub fn remove_at(&self, index: usize) -> Result<ChildRecord> {
        self.lock()?.remove_at(index)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Run a closure with exclusive access to the register
    pub fn with_register<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ChildRegister) -> Result<T>,
    {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    /// Copy of the register's current contents
    pub fn snapshot(&self) -> Result<ChildRegister> {
        Ok(self.lock()?.clone())
    }
}
