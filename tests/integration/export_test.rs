//! Tests for CSV and Parquet export of classified records

use std::fs::File;

use anisan::utils::io::{to_record_batch, write_csv, write_csv_file, write_parquet_file};
use arrow::array::{Array, UInt8Array};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::utils::{record, region};

fn sample_records() -> Vec<anisan::ChildRecord> {
    vec![
        record("Amina", 14.0, false, Some(region("Niger", "Maradi"))),
        record("Issa", 10.8, false, None),
        record("Moussa", 13.5, true, Some(region("Sénégal", "Kolda"))),
    ]
}

#[test]
fn test_record_batch_columns() {
    let records = sample_records();
    let batch = to_record_batch(&records).unwrap();

    assert_eq!(batch.num_rows(), 3);
    let schema = batch.schema();
    let names: Vec<_> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names[0], "name");
    assert!(names.contains(&"muac_cm"));
    assert!(names.contains(&"edema_present"));
    assert!(names.contains(&"category"));
    assert!(names.contains(&"severity_rank"));

    let ranks = batch
        .column_by_name("severity_rank")
        .unwrap()
        .as_any()
        .downcast_ref::<UInt8Array>()
        .unwrap();
    assert_eq!(ranks.values().to_vec(), vec![0, 4, 4]);

    let country = batch.column_by_name("country").unwrap();
    assert!(country.is_null(1));
    assert!(!country.is_null(0));
}

#[test]
fn test_csv_has_header_and_one_line_per_record() {
    let records = sample_records();
    let mut buffer = Vec::new();
    let rows = write_csv(&mut buffer, &records).unwrap();
    assert_eq!(rows, 3);

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("name,sex,age_months,weight_kg,height_cm,muac_cm,edema_present"));
    assert!(header.contains("severity_rank"));

    let body: Vec<_> = lines.collect();
    assert_eq!(body.len(), 3);
    assert!(body[0].starts_with("Amina,F,24,"));
    assert!(body[0].contains("Maradi"));
    assert!(body[1].contains("Severe Acute Malnutrition (critical)"));
    assert!(body[2].contains("Kolda"));
}

#[test]
fn test_csv_file_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("donnees_anisan.csv");
    let records = sample_records();

    assert_eq!(write_csv_file(&path, &records).unwrap(), 3);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_parquet_export_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("donnees_anisan.parquet");
    let records = sample_records();

    assert_eq!(write_parquet_file(&path, &records).unwrap(), 3);

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    let batches: Vec<_> = reader.map(Result::unwrap).collect();
    let total: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(total, 3);
    assert!(batches[0].schema().field_with_name("category_code").is_ok());
}
