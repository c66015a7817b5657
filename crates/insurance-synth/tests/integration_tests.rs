//! Integration tests for the synthetic dataset generator.
//!
//! These tests write real CSV files and read them back with polars.

use chrono::NaiveDate;
use insurance_synth::{COLUMN_NAMES, DefectPlan, INVALID_ZIP_CODE, SynthConfig, SyntheticDataset};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::Path;

// ============================================================================
// Helper Functions
// ============================================================================

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 10).unwrap()
}

fn read_csv(path: &Path) -> DataFrame {
    // Full-file schema inference: `INVALID` zip codes may sit past row 100
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .expect("Failed to create CSV reader")
        .finish()
        .expect("Failed to read CSV file")
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_written_file_has_fixed_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insurance_dummy_data.csv");

    let config = SynthConfig::builder()
        .records(250)
        .reference_date(reference_date())
        .output_path(&path)
        .build()
        .unwrap();

    SyntheticDataset::synthesize(&config)
        .unwrap()
        .write_csv(&config.output_path)
        .unwrap();

    let df = read_csv(&path);
    assert_eq!(df.shape(), (250, 15));

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let expected: Vec<String> = COLUMN_NAMES.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_written_file_carries_injected_defects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defects.csv");

    let config = SynthConfig::builder()
        .records(300)
        .reference_date(reference_date())
        .build()
        .unwrap();

    let dataset = SyntheticDataset::synthesize(&config).unwrap();
    dataset.write_csv(&path).unwrap();
    let df = read_csv(&path);

    assert_eq!(df.column("gender").unwrap().null_count(), 30);
    assert_eq!(df.column("premium").unwrap().null_count(), 20);

    let zip = df.column("zip_code").unwrap().cast(&DataType::String).unwrap();
    let invalid = zip
        .str()
        .unwrap()
        .into_iter()
        .filter(|v| *v == Some(INVALID_ZIP_CODE))
        .count();
    assert_eq!(invalid, 10);

    let names = df.column("customer_name").unwrap();
    let names = names.str().unwrap();
    for &row in &dataset.defects.uppercase_names {
        let name = names.get(row).unwrap();
        assert_eq!(name, name.to_uppercase());
    }
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let config = SynthConfig::builder()
        .records(100)
        .seed(1234)
        .reference_date(reference_date())
        .build()
        .unwrap();

    SyntheticDataset::synthesize(&config)
        .unwrap()
        .write_csv(&first)
        .unwrap();
    SyntheticDataset::synthesize(&config)
        .unwrap()
        .write_csv(&second)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_clean_run_has_no_nulls() {
    let config = SynthConfig::builder()
        .records(40)
        .reference_date(reference_date())
        .defects(DefectPlan::none())
        .build()
        .unwrap();

    let df = SyntheticDataset::synthesize(&config)
        .unwrap()
        .to_dataframe()
        .unwrap();

    let total_nulls: usize = df.get_columns().iter().map(|c| c.null_count()).sum();
    assert_eq!(total_nulls, 0);
}
