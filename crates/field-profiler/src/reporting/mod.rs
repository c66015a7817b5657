//! Report generation module.
//!
//! A run produces:
//! - the Field Analysis document (`field_analysis.md`), a heading and one
//!   table row per column
//! - the flagged records CSV (`flagged_records.csv`), `Row,Column,Reason`
//! - optionally, the whole analysis as JSON (`field_analysis.json`)
//!
//! [`print_summary`] writes a console overview for the binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use field_profiler::reporting::ReportGenerator;
//!
//! let generator = ReportGenerator::for_input(input, config);
//! let paths = generator.write_all(&analysis, input)?;
//! ```

mod generator;
mod summary;
mod table;

pub use generator::{
    AnalysisReport, FLAGGED_HEADERS, ReportGenerator, ReportPaths, flagged_records_frame,
    render_flagged_csv,
};
pub use summary::{print_summary, summary_table};
pub use table::{
    FieldAnalysisRow, REPORT_HEADERS, REPORT_TITLE, ReportCell, field_analysis_rows,
    render_markdown,
};
