//! Error handling for nutritional screening.
//!
//! Intake and classification problems are caller errors: the record must be
//! rejected or re-entered, never stored. Storage and export failures wrap the
//! underlying I/O, JSON, Arrow and Parquet errors.

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

pub mod util;

/// Specialized error type for screening operations
#[derive(Debug, thiserror::Error)]
pub enum AnisanError {
    /// A measurement field is non-finite or outside its plausible range
    #[error("Invalid measurement: {field} = {value} ({reason})")]
    InvalidMeasurement {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value as entered
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// No classification rule matched. The rule table is exhaustive, so this
    /// is a defect in the table rather than bad input.
    #[error("No nutritional category matched MUAC {muac_cm} cm (edema: {edema_present})")]
    UnknownCategory {
        /// MUAC value that fell through every rule
        muac_cm: f64,
        /// Edema flag passed to the classifier
        edema_present: bool,
    },

    /// No record with the given identity exists in the register
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Country/region pair is not part of the region catalog
    #[error("Unknown region '{region}' for country '{country}'")]
    UnknownRegion {
        /// Requested country
        country: String,
        /// Requested region
        region: String,
    },

    /// Invalid screening configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A thread panicked while holding the register lock
    #[error("Record register lock poisoned")]
    LockPoisoned,

    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error reading or writing JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error building Arrow data for export
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error converting records to Arrow arrays
    #[error("Arrow conversion error: {0}")]
    ConversionError(#[from] serde_arrow::Error),

    /// Error writing Parquet output
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),
}

impl AnisanError {
    /// Build an `InvalidMeasurement` error for a field
    pub fn invalid_measurement(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidMeasurement {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error stems from caller input that can be corrected and
    /// re-submitted, as opposed to a storage or internal failure
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMeasurement { .. } | Self::RecordNotFound(_) | Self::UnknownRegion { .. }
        )
    }
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, AnisanError>;
