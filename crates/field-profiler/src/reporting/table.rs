//! The Field Analysis table: one row per column, rendered as Markdown.

use std::fmt;

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, Table};
use serde::Serialize;

use crate::types::{ColumnProfile, ColumnStats, FieldAnalysis};

/// Document heading of the Field Analysis report.
pub const REPORT_TITLE: &str = "Field Analysis";

pub const REPORT_HEADERS: [&str; 8] = [
    "Field Name",
    "Data Type",
    "Unique Values",
    "Missing Values",
    "Mean",
    "Median",
    "Min",
    "Max",
];

/// A statistic cell of the report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportCell {
    Empty,
    /// Shown with two decimals.
    Number(f64),
    Text(String),
}

impl fmt::Display for ReportCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportCell::Empty => Ok(()),
            ReportCell::Number(v) => write!(f, "{:.2}", v),
            ReportCell::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAnalysisRow {
    pub field_name: String,
    pub data_type: String,
    pub unique_values: usize,
    pub missing_values: usize,
    pub mean: ReportCell,
    pub median: ReportCell,
    pub min: ReportCell,
    pub max: ReportCell,
}

impl From<&ColumnProfile> for FieldAnalysisRow {
    fn from(profile: &ColumnProfile) -> Self {
        use ReportCell::{Empty, Number, Text};

        let (mean, median, min, max) = match &profile.stats {
            ColumnStats::Numeric(Some(s)) => {
                (Number(s.mean), Number(s.median), Number(s.min), Number(s.max))
            }
            ColumnStats::Date(Some(s)) => (
                Empty,
                Empty,
                Text(s.earliest.to_string()),
                Text(s.latest.to_string()),
            ),
            ColumnStats::Boolean(s) => (
                Text(format!("True: {}", s.true_count)),
                Text(format!("False: {}", s.false_count)),
                Empty,
                Empty,
            ),
            ColumnStats::Numeric(None) | ColumnStats::Date(None) | ColumnStats::String => {
                (Empty, Empty, Empty, Empty)
            }
        };

        Self {
            field_name: profile.name.clone(),
            data_type: profile.data_type.to_string(),
            unique_values: profile.unique_values,
            missing_values: profile.missing_values,
            mean,
            median,
            min,
            max,
        }
    }
}

impl FieldAnalysisRow {
    fn cells(&self) -> [String; 8] {
        [
            self.field_name.clone(),
            self.data_type.clone(),
            self.unique_values.to_string(),
            self.missing_values.to_string(),
            self.mean.to_string(),
            self.median.to_string(),
            self.min.to_string(),
            self.max.to_string(),
        ]
    }
}

pub fn field_analysis_rows(analysis: &FieldAnalysis) -> Vec<FieldAnalysisRow> {
    analysis.profiles.iter().map(FieldAnalysisRow::from).collect()
}

// Pipes would end the cell early
fn escape_markdown(cell: &str) -> String {
    cell.replace('|', "\\|")
}

/// Render the report as a Markdown document: a heading and a pipe table.
pub fn render_markdown(analysis: &FieldAnalysis) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(REPORT_HEADERS);

    for row in field_analysis_rows(analysis) {
        table.add_row(row.cells().iter().map(|c| escape_markdown(c)));
    }
    for index in 2..REPORT_HEADERS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    format!("# {}\n\n{}\n", REPORT_TITLE, table)
}
