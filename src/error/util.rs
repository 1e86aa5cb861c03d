//! Utility functions for error handling
//!
//! File helpers that turn raw I/O failures into errors naming the path and
//! the purpose of the access.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AnisanError, Result};

fn describe_io_error(e: &io::Error, path: &Path, purpose: &str) -> String {
    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            format!("Permission denied for {} - check file permissions", path.display())
        }
        io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
        _ => format!("Failed to access {} for: {purpose}", path.display()),
    }
}

/// Wrap an I/O error with the path and purpose of the failed access
pub fn with_path_context(e: io::Error, path: &Path, purpose: &str) -> AnisanError {
    let context = describe_io_error(&e, path, purpose);
    AnisanError::IoError(io::Error::new(e.kind(), format!("{context}: {e}")))
}

/// Safely open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.exists() && !path.is_file() {
        return Err(AnisanError::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file: {} (needed for: {purpose})", path.display()),
        )));
    }

    fs::File::open(path).map_err(|e| with_path_context(e, path, purpose))
}

/// Safely create (or truncate) a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| with_path_context(e, path, purpose))
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(AnisanError::IoError(
            io::Error::new(
                e.kind(),
                format!("{} contains invalid UTF-8 data - cannot read as text", path.display()),
            ),
        )),
        Err(e) => Err(with_path_context(e, path, purpose)),
    }
}
