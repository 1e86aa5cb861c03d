//! Tabular export of classified records
//!
//! Records are flattened into one row each (measurement columns followed by
//! classification columns), converted into an Arrow `RecordBatch` with
//! `serde_arrow`, and written as CSV or Parquet.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::models::ChildRecord;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// One exported row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: String,
    pub sex: String,
    pub age_months: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub muac_cm: f64,
    pub edema_present: bool,
    pub measured_on: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub category: String,
    pub category_code: String,
    pub severity_rank: u8,
    pub advisory: String,
    pub recorded_at: String,
}

impl From<&ChildRecord> for ExportRow {
    fn from(record: &ChildRecord) -> Self {
        let measurement = record.measurement();
        let classification = record.classification();
        Self {
            name: record.name().to_string(),
            sex: measurement.sex().code().to_string(),
            age_months: measurement.age_months(),
            weight_kg: measurement.weight_kg(),
            height_cm: measurement.height_cm(),
            muac_cm: measurement.muac_cm(),
            edema_present: measurement.edema_present(),
            measured_on: measurement.measured_on().format("%Y-%m-%d").to_string(),
            country: record.region().map(|r| r.country.clone()),
            region: record.region().map(|r| r.region.clone()),
            category: classification.category.label().to_string(),
            category_code: classification.category.short_code().to_string(),
            severity_rank: classification.severity_rank,
            advisory: classification.advisory.clone(),
            recorded_at: record.recorded_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Convert records into a single Arrow record batch
pub fn to_record_batch<'a, I>(records: I) -> Result<RecordBatch>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    let rows: Vec<ExportRow> = records.into_iter().map(ExportRow::from).collect();
    let fields = Vec::<FieldRef>::from_type::<ExportRow>(TracingOptions::default())?;
    Ok(serde_arrow::to_record_batch(&fields, &rows)?)
}

/// Write records as CSV with a header row
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ChildRecord>,
{
    let batch = to_record_batch(records)?;
    let mut csv_writer = arrow::csv::WriterBuilder::new()
        .with_header(true)
        .build(writer);
    csv_writer.write(&batch)?;
    Ok(batch.num_rows())
}

/// Write records to a CSV file
pub fn write_csv_file<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    let start = Instant::now();
    log_operation_start("Exporting CSV to", path);
    let file = safe_create_file(path, "exporting records as CSV")?;
    let rows = write_csv(file, records)?;
    log_operation_complete("exported", path, rows, Some(start.elapsed()));
    Ok(rows)
}

/// Write records to a Parquet file
pub fn write_parquet_file<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    let start = Instant::now();
    log_operation_start("Exporting Parquet to", path);
    let batch = to_record_batch(records)?;
    let file = safe_create_file(path, "exporting records as Parquet")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    log_operation_complete("exported", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch.num_rows())
}
