use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::table::{FieldAnalysisRow, field_analysis_rows, render_markdown};
use crate::config::ProfilerConfig;
use crate::error::{ProfilerError, Result, ResultExt};
use crate::types::{ColumnProfile, FieldAnalysis, Finding};

// ============================================================================
// Report Types
// ============================================================================

/// JSON form of a profiling run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    /// Timestamp when the report was generated
    pub generated_at: String,
    pub input_file: String,
    pub row_count: usize,
    pub column_count: usize,
    pub total_flagged: usize,
    pub fields: Vec<FieldAnalysisRow>,
    pub profiles: &'a [ColumnProfile],
    pub findings: &'a [Finding],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(analysis: &'a FieldAnalysis, input: &Path) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input.display().to_string(),
            row_count: analysis.row_count,
            column_count: analysis.profiles.len(),
            total_flagged: analysis.findings.len(),
            fields: field_analysis_rows(analysis),
            profiles: &analysis.profiles,
            findings: &analysis.findings,
        }
    }
}

/// Where each output of a run was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub output_dir: PathBuf,
    pub field_analysis: PathBuf,
    pub flagged_records: PathBuf,
    pub json_report: Option<PathBuf>,
}

// ============================================================================
// Flagged Records
// ============================================================================

/// Header of the flagged records CSV.
pub const FLAGGED_HEADERS: [&str; 3] = ["Row", "Column", "Reason"];

/// Build the `Row, Column, Reason` table, one row per finding, in order.
pub fn flagged_records_frame(findings: &[Finding]) -> Result<DataFrame> {
    let rows: Vec<i64> = findings.iter().map(|f| f.row as i64).collect();
    let columns: Vec<&str> = findings.iter().map(|f| f.column.as_str()).collect();
    let reasons: Vec<String> = findings.iter().map(|f| f.reason.to_string()).collect();

    let df = df! {
        FLAGGED_HEADERS[0] => rows,
        FLAGGED_HEADERS[1] => columns,
        FLAGGED_HEADERS[2] => reasons,
    }?;
    Ok(df)
}

/// Render findings as CSV bytes.
pub fn render_flagged_csv(findings: &[Finding]) -> Result<Vec<u8>> {
    let mut df = flagged_records_frame(findings)?;
    let mut buffer = Vec::new();

    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(&mut df)
        .context("Failed to render flagged records")?;

    Ok(buffer)
}

// ============================================================================
// Report Generator
// ============================================================================

/// Writes the outputs of a profiling run.
///
/// Every document is rendered in memory before the first file is touched, so
/// a rendering failure leaves no partial output behind.
pub struct ReportGenerator {
    output_dir: PathBuf,
    config: ProfilerConfig,
}

impl ReportGenerator {
    /// Create a generator writing into `output_dir`.
    pub fn new(output_dir: PathBuf, config: ProfilerConfig) -> Self {
        Self { output_dir, config }
    }

    /// Create a generator for `input`, resolving the output directory from
    /// the configuration.
    pub fn for_input(input: &Path, config: ProfilerConfig) -> Self {
        Self::new(config.resolve_output_dir(input), config)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render and write the Field Analysis document, the flagged records CSV
    /// and, when enabled, the JSON report.
    pub fn write_all(&self, analysis: &FieldAnalysis, input: &Path) -> Result<ReportPaths> {
        let markdown = render_markdown(analysis);
        let flagged = render_flagged_csv(&analysis.findings)?;
        let json = if self.config.emit_json {
            let report = AnalysisReport::new(analysis, input);
            Some(serde_json::to_string_pretty(&report).map_err(|e| {
                ProfilerError::ReportGenerationFailed(format!("JSON analysis: {}", e))
            })?)
        } else {
            None
        };
        debug!(
            "Rendered report ({} bytes) and flagged records ({} bytes)",
            markdown.len(),
            flagged.len()
        );

        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create output directory '{}'",
            self.output_dir.display()
        ))?;

        let paths = ReportPaths {
            output_dir: self.output_dir.clone(),
            field_analysis: self.output_dir.join(&self.config.report_name),
            flagged_records: self.output_dir.join(&self.config.flagged_name),
            json_report: json
                .as_ref()
                .map(|_| self.output_dir.join(&self.config.json_name)),
        };

        write_file(&paths.field_analysis, markdown.as_bytes())?;
        info!("Field analysis saved: {}", paths.field_analysis.display());

        write_file(&paths.flagged_records, &flagged)?;
        info!(
            "Flagged records saved: {} ({} findings)",
            paths.flagged_records.display(),
            analysis.findings.len()
        );

        if let (Some(path), Some(json)) = (&paths.json_report, &json) {
            write_file(path, json.as_bytes())?;
            info!("JSON analysis saved: {}", path.display());
        }

        Ok(paths)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).context(format!("Failed to write '{}'", path.display()))
}
