//! Dataset profiling.
//!
//! This module turns a loaded table into a [`FieldAnalysis`]:
//! - coarse type inference per column
//! - per-column statistics
//! - per-column findings from the type's rule set
//!
//! Columns are analyzed independently, in table order.

mod columns;
pub(crate) mod statistics;
mod type_inference;

pub use columns::ColumnData;
pub use type_inference::infer_coarse_type;

use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{ProfilerError, Result};
use crate::types::{ColumnProfile, FieldAnalysis};

/// Profiles every column of a dataset and collects its findings.
pub struct DataProfiler;

impl DataProfiler {
    /// Analyze an entire dataset.
    ///
    /// Findings are ordered by column, then by rule, then by row.
    pub fn analyze(df: &DataFrame) -> Result<FieldAnalysis> {
        if df.height() == 0 {
            warn!("Dataset has no data rows; profiles will be empty");
        }

        let mut profiles = Vec::with_capacity(df.width());
        let mut findings = Vec::new();

        for col_name in df.get_column_names() {
            let data = Self::column_data(df, col_name)?;
            let profile = data.profile(col_name);
            let column_findings = data.flag_outliers(col_name);

            debug!(
                "{}: {} ({} unique, {} missing, {} flagged)",
                profile.name,
                profile.data_type,
                profile.unique_values,
                profile.missing_values,
                column_findings.len()
            );

            profiles.push(profile);
            findings.extend(column_findings);
        }

        info!(
            "Profiled {} columns over {} rows, {} findings",
            profiles.len(),
            df.height(),
            findings.len()
        );

        Ok(FieldAnalysis {
            row_count: df.height(),
            profiles,
            findings,
        })
    }

    /// Profile a single column without running its rules.
    pub fn profile_column(df: &DataFrame, col_name: &str) -> Result<ColumnProfile> {
        Ok(Self::column_data(df, col_name)?.profile(col_name))
    }

    fn column_data(df: &DataFrame, col_name: &str) -> Result<ColumnData> {
        let col = df
            .column(col_name)
            .map_err(|_| ProfilerError::ColumnNotFound(col_name.to_string()))?;
        ColumnData::from_series(col.as_materialized_series())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BooleanStats, CoarseType, ColumnStats, FlagReason, Finding};
    use pretty_assertions::assert_eq;

    fn sample_frame() -> DataFrame {
        df! {
            "premium" => &[Some(10.0f64), Some(12.0), Some(11.0), Some(13.0), Some(1000.0)],
            "is_active" => &["True", "False", "Yes", "1", "0"],
            "company" => &[Some("TBD"), Some("Acme Corp"), None, Some("N/A"), Some("Acme Corp")],
        }
        .unwrap()
    }

    #[test]
    fn test_analyze_profiles_every_column() {
        let analysis = DataProfiler::analyze(&sample_frame()).unwrap();

        assert_eq!(analysis.row_count, 5);
        assert_eq!(analysis.profiles.len(), 3);

        let types: Vec<CoarseType> = analysis.profiles.iter().map(|p| p.data_type).collect();
        assert_eq!(
            types,
            vec![CoarseType::Numeric, CoarseType::Boolean, CoarseType::String]
        );

        let is_active = analysis.profile("is_active").unwrap();
        assert_eq!(
            is_active.stats,
            ColumnStats::Boolean(BooleanStats {
                true_count: 3,
                false_count: 2,
            })
        );
        for profile in &analysis.profiles {
            assert_eq!(profile.row_count, 5);
            assert!(profile.unique_values + profile.missing_values <= profile.row_count);
        }
    }

    #[test]
    fn test_findings_are_column_major() {
        let analysis = DataProfiler::analyze(&sample_frame()).unwrap();

        assert_eq!(
            analysis.findings,
            vec![
                Finding::new(4, "premium", FlagReason::OutlierValue(1000.0)),
                Finding::new(2, "is_active", FlagReason::NonBooleanValue("Yes".to_string())),
                Finding::new(2, "company", FlagReason::MissingValue),
                Finding::new(0, "company", FlagReason::PlaceholderValue("TBD".to_string())),
                Finding::new(3, "company", FlagReason::PlaceholderValue("N/A".to_string())),
            ]
        );
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let df = sample_frame();
        let first = DataProfiler::analyze(&df).unwrap();
        let second = DataProfiler::analyze(&df).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_frame() {
        let df = df! {
            "age" => Vec::<i64>::new(),
            "name" => Vec::<String>::new(),
        }
        .unwrap();
        let analysis = DataProfiler::analyze(&df).unwrap();

        assert_eq!(analysis.row_count, 0);
        assert!(analysis.findings.is_empty());
        let age = analysis.profile("age").unwrap();
        assert_eq!(age.stats, ColumnStats::Numeric(None));
        assert_eq!(age.missing_values, 0);
    }

    #[test]
    fn test_profile_column_not_found() {
        let result = DataProfiler::profile_column(&sample_frame(), "missing");
        assert!(matches!(result, Err(ProfilerError::ColumnNotFound(_))));
    }
}
