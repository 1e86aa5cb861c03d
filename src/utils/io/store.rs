//! JSON record store
//!
//! Persists a session register as a pretty-printed JSON array. Saves go to a
//! sibling temporary file that is renamed over the target, so a failed save
//! leaves the previous file intact and the register unsaved.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::algorithm::nutrition::Classifier;
use crate::collections::{ChildRegister, SharedRegister};
use crate::config::ScreeningConfig;
use crate::error::util::{safe_create_file, safe_open_file, with_path_context};
use crate::error::Result;
use crate::models::StoredRecord;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// File-backed store for classified records
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured path
    #[must_use]
    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self::new(config.store_path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Load the register from disk.
    ///
    /// A missing file yields an empty register. Every record is re-validated
    /// and re-classified; records whose stored category disagrees with the
    /// current rules are logged and carry the current classification. Records
    /// that no longer pass validation are logged and skipped. In both cases
    /// the register is left unsaved.
    pub fn load(&self, config: &ScreeningConfig, classifier: &Classifier) -> Result<ChildRegister> {
        if !self.path.exists() {
            log::info!(
                "No record store at {}, starting an empty register",
                self.path.display()
            );
            return Ok(ChildRegister::new());
        }

        let start = Instant::now();
        log_operation_start("Loading records from", &self.path);

        let file = safe_open_file(&self.path, "loading screening records")?;
        let stored: Vec<StoredRecord> = serde_json::from_reader(BufReader::new(file))?;

        let mut records = Vec::with_capacity(stored.len());
        let mut drifted = 0usize;
        let mut skipped = 0usize;
        for entry in stored {
            let name = entry.name.clone();
            let (record, reclassification) = match entry.restore(config, classifier) {
                Ok(restored) => restored,
                Err(e) if e.is_caller_error() => {
                    skipped += 1;
                    log_warning(
                        &format!("Skipping stored record for '{name}': {e}"),
                        Some(&self.path),
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            if reclassification.drifted() {
                drifted += 1;
                log_warning(
                    &format!(
                        "Stored category '{}' for {} differs from current rules ('{}')",
                        reclassification.stored,
                        record.name(),
                        reclassification.current.category
                    ),
                    Some(&self.path),
                );
            }
            records.push(record);
        }

        let mut register = ChildRegister::with_records(records);
        if drifted == 0 && skipped == 0 {
            register.mark_saved();
        }

        log_operation_complete("loaded", &self.path, register.len(), Some(start.elapsed()));
        Ok(register)
    }

    /// Persist the register, marking it saved only when the write succeeded
    pub fn save(&self, register: &mut ChildRegister) -> Result<()> {
        let start = Instant::now();
        let temp = self.temp_path();

        if let Err(e) = self.write_records(register, &temp) {
            // The target file is untouched; drop the partial temp file.
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(with_path_context(e, &self.path, "replacing record store"));
        }

        register.mark_saved();
        log_operation_complete("saved", &self.path, register.len(), Some(start.elapsed()));
        Ok(())
    }

    /// Persist a shared register while holding its lock
    pub fn save_shared(&self, shared: &SharedRegister) -> Result<()> {
        shared.with_register(|register| self.save(register))
    }

    fn write_records(&self, register: &ChildRegister, temp: &Path) -> Result<()> {
        let file = safe_create_file(temp, "writing screening records")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, register.records())?;
        writer.write_all(b"\n")?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}
