//! Field Profiler
//!
//! Loads a CSV table, infers a coarse type for every column (boolean,
//! numeric, date or string), computes per-column statistics and flags suspect
//! cells with a fixed rule set per type.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use field_profiler::{ProfilerConfig, profile_csv};
//! use std::path::Path;
//!
//! let config = ProfilerConfig::builder().emit_json(true).build()?;
//! let run = profile_csv(Path::new("insurance_dummy_data.csv"), &config)?;
//!
//! println!("{} findings", run.analysis.findings.len());
//! println!("Report: {}", run.paths.field_analysis.display());
//! ```
//!
//! # Rules
//!
//! | Type    | Rules                                                         |
//! |---------|---------------------------------------------------------------|
//! | numeric | negative values, values outside the 1.5 x IQR fences          |
//! | date    | dates after 2024-09-30, dates 30000+ days before the median   |
//! | boolean | values other than `true`, `false`, `1`, `0`                   |
//! | string  | missing cells, `TBD`/`N/A`/`Unknown`, lengths beyond 2 std    |
//!
//! Findings are ordered by column, then rule, then row. Rows are zero-based
//! data rows.

pub mod config;
pub mod error;
pub mod ingest;
pub mod profiler;
pub mod reporting;
pub mod rules;
pub mod types;
pub mod utils;

use std::path::Path;

use tracing::info;

pub use config::{ConfigValidationError, DEFAULT_OUTPUT_SUBDIR, ProfilerConfig, ProfilerConfigBuilder};
pub use error::{ProfilerError, Result as ProfilerResult, ResultExt};
pub use ingest::{load_csv, load_csv_from_str};
pub use profiler::{ColumnData, DataProfiler, infer_coarse_type};
pub use reporting::{ReportCell, ReportGenerator, ReportPaths, print_summary};
pub use rules::ColumnAnalysis;
pub use types::{
    BooleanStats, CoarseType, ColumnProfile, ColumnStats, DateStats, FieldAnalysis, FlagReason,
    Finding, NumericStats,
};

/// Outcome of [`profile_csv`].
#[derive(Debug, Clone)]
pub struct ProfileRun {
    pub analysis: FieldAnalysis,
    pub paths: ReportPaths,
}

/// Load `input`, analyze it and write every report.
///
/// Nothing is written unless loading and analysis both succeed.
pub fn profile_csv(input: &Path, config: &ProfilerConfig) -> error::Result<ProfileRun> {
    config.validate()?;

    let df = load_csv(input)?;
    let analysis = DataProfiler::analyze(&df)?;

    let generator = ReportGenerator::for_input(input, config.clone());
    let paths = generator.write_all(&analysis, input)?;
    info!(
        "Profiling complete: {} columns, {} findings",
        analysis.profiles.len(),
        analysis.findings.len()
    );

    Ok(ProfileRun { analysis, paths })
}
