//! I/O utilities
//!
//! Persistence of the session register and tabular export of its records.

pub mod export;
pub mod store;

pub use export::{ExportRow, to_record_batch, write_csv, write_csv_file, write_parquet_file};
pub use store::JsonRecordStore;
