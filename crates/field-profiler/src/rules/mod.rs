//! Per-type statistics and outlier rules.
//!
//! Each coarse type has a handler holding the column's extracted values. The
//! handlers are plain data with no polars dependency, so every rule can be
//! exercised from a `Vec` in tests.
//!
//! Thresholds are fixed constants:
//! - numeric: IQR fences at 1.5 x IQR, plus a negative-value check
//! - date: a fixed future cutoff and an old-date window below the median
//! - boolean: anything outside `true`/`false`/`1`/`0`
//! - string: missing cells, placeholder tokens, and length outliers at 2 std

mod boolean;
mod date;
mod numeric;
mod text;

pub use boolean::BooleanColumn;
pub use date::DateColumn;
pub use numeric::NumericColumn;
pub use text::TextColumn;

use chrono::NaiveDate;

use crate::types::{ColumnStats, Finding};

/// Multiplier applied to the interquartile range for numeric fences.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Dates after this day are flagged as future dates.
pub const FUTURE_DATE_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2024, 9, 30) {
    Some(date) => date,
    None => panic!("future date cutoff is not a calendar date"),
};

/// Dates more than this many days before the column median are flagged.
pub const OLD_DATE_WINDOW_DAYS: f64 = 30_000.0;

/// Values that stand in for "unknown", matched case-insensitively.
pub const PLACEHOLDER_VALUES: [&str; 3] = ["TBD", "N/A", "Unknown"];

/// Number of standard deviations from the mean length before a string is flagged.
pub const LENGTH_STD_MULTIPLIER: f64 = 2.0;

/// Statistics and flagging for one column of a single coarse type.
pub trait ColumnAnalysis {
    /// Total number of cells, missing ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells.
    fn missing_count(&self) -> usize;

    /// Number of distinct non-missing values.
    fn unique_count(&self) -> usize;

    /// Type-specific summary statistics.
    fn statistics(&self) -> ColumnStats;

    /// Findings for this column, rule by rule, each rule in row order.
    fn flag_outliers(&self, column: &str) -> Vec<Finding>;
}
