//! Domain models for nutritional screening
//!
//! Measurements as entered at intake, their validated form, and the
//! classified records kept in a session register.

pub mod measurement;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use measurement::{Measurement, MeasurementInput};
pub use record::{ChildRecord, StoredRecord};
pub use types::{MuacUnit, Sex};
