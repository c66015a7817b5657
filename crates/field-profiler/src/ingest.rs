//! CSV loading.
//!
//! The whole file is scanned for schema inference so a late `INVALID` in a
//! zip code column still makes the column text. Every record must have as
//! many fields as the header. A short or long row fails the whole load, as
//! does any row the CSV layer rejects.

use std::fmt::Display;
use std::io::Cursor;
use std::path::Path;

use ::csv::ReaderBuilder;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{ProfilerError, Result, ResultExt};

fn read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_try_parse_dates(true)
                .with_quote_char(Some(b'"')),
        )
}

fn malformed(source: &str, reason: impl Display) -> ProfilerError {
    ProfilerError::MalformedInput {
        path: source.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject any record whose field count differs from the header's.
///
/// Polars pads short rows with nulls, so the count is checked up front with a
/// strict (non-flexible) reader.
fn check_field_counts(bytes: &[u8], source: &str) -> Result<()> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quote(b'"')
        .from_reader(bytes);

    let mut records = 0usize;
    for record in reader.byte_records() {
        record.map_err(|e| malformed(source, e))?;
        records += 1;
    }
    debug!("Checked field counts of {} records in {}", records, source);
    Ok(())
}

fn parse_bytes(bytes: Vec<u8>, source: &str) -> Result<DataFrame> {
    check_field_counts(&bytes, source)?;

    read_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| malformed(source, e))
}

/// Load a CSV file with a header row.
///
/// A zero-byte file yields an empty frame; a header-only file yields a frame
/// with columns and no rows.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let source = path.display().to_string();
    if !path.is_file() {
        return Err(ProfilerError::InputNotFound(source));
    }

    let bytes = std::fs::read(path).context(format!("Failed to read '{}'", source))?;
    if bytes.is_empty() {
        warn!("Input file '{}' is empty", source);
        return Ok(DataFrame::empty());
    }

    let df = parse_bytes(bytes, &source)?;

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        source
    );
    Ok(df)
}

/// Load CSV text already held in memory. `source` names it in errors.
pub fn load_csv_from_str(content: &str, source: &str) -> Result<DataFrame> {
    if content.trim().is_empty() {
        warn!("Input '{}' is empty", source);
        return Ok(DataFrame::empty());
    }

    parse_bytes(content.as_bytes().to_vec(), source)
}
