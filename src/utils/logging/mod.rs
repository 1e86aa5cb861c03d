//! Logging utilities
//!
//! Standard log lines for store and export operations.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_rejected_intake, log_warning};
