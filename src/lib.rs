//! A Rust library for screening children's nutritional status from
//! mid-upper-arm circumference (MUAC) and edema, keeping the classified
//! records of a screening session, and reporting on them.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{PlausibleRange, ScreeningConfig};
pub use error::{AnisanError, Result};

// Classification
pub use algorithm::nutrition::{ClassificationResult, Classifier, NutritionalCategory, classify};

// Records
pub use collections::{ChildRegister, RecordCollection, SharedRegister};
pub use geo::{RegionCatalog, RegionRef};
pub use models::{ChildRecord, Measurement, MeasurementInput, MuacUnit, Sex};

// Reporting, persistence and export
pub use algorithm::reporting::{AgeBand, GroupSummary, Grouping, ScreeningReport};
pub use utils::io::{JsonRecordStore, write_csv, write_csv_file, write_parquet_file};
