//! Logging helpers
//!
//! Consistent messages for file operations on the record store and exports,
//! and for intake that was rejected before classification.

use std::path::Path;

use crate::error::AnisanError;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log a completed file operation with the number of records it handled
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    records: usize,
    elapsed: Option<std::time::Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {records} records ({}) in {duration:?}",
            path.display()
        ),
        None => log::info!(
            "Successfully {operation} {records} records ({})",
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{message}: {}", path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log an intake that was refused. Caller errors are warnings; anything
/// else is an error.
pub fn log_rejected_intake(name: &str, error: &AnisanError) {
    if error.is_caller_error() {
        log::warn!("Rejected record for '{name}': {error}");
    } else {
        log::error!("Failed to record '{name}': {error}");
    }
}
