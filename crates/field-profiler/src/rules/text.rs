use std::collections::HashSet;

use tracing::debug;

use super::{ColumnAnalysis, LENGTH_STD_MULTIPLIER, PLACEHOLDER_VALUES};
use crate::profiler::statistics::{mean, sample_std};
use crate::types::{ColumnStats, FlagReason, Finding};

/// Any column not recognized as boolean, numeric or date.
#[derive(Debug, Clone, PartialEq)]
pub struct TextColumn {
    values: Vec<Option<String>>,
}

impl TextColumn {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    fn present(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.as_deref().map(|v| (row, v)))
    }

    fn missing_findings(&self, column: &str) -> Vec<Finding> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(row, _)| Finding::new(row, column, FlagReason::MissingValue))
            .collect()
    }

    fn placeholder_findings(&self, column: &str) -> Vec<Finding> {
        PLACEHOLDER_VALUES
            .iter()
            .flat_map(move |placeholder| {
                self.present()
                    .filter(move |(_, v)| v.eq_ignore_ascii_case(placeholder))
                    .map(move |(row, v)| {
                        Finding::new(row, column, FlagReason::PlaceholderValue(v.to_string()))
                    })
            })
            .collect()
    }

    /// Values whose character length is more than two standard deviations
    /// from the mean length.
    fn length_findings(&self, column: &str) -> Vec<Finding> {
        let lengths: Vec<f64> = self
            .present()
            .map(|(_, v)| v.chars().count() as f64)
            .collect();

        let (Some(mean), Some(std)) = (mean(&lengths), sample_std(&lengths)) else {
            return Vec::new();
        };
        if std == 0.0 {
            return Vec::new();
        }

        let lower = mean - LENGTH_STD_MULTIPLIER * std;
        let upper = mean + LENGTH_STD_MULTIPLIER * std;

        let short = self
            .present()
            .filter(|(_, v)| (v.chars().count() as f64) < lower)
            .map(|(row, v)| Finding::new(row, column, FlagReason::UnusuallyShort(v.to_string())));
        let long = self
            .present()
            .filter(|(_, v)| (v.chars().count() as f64) > upper)
            .map(|(row, v)| Finding::new(row, column, FlagReason::UnusuallyLong(v.to_string())));

        short.chain(long).collect()
    }
}

impl ColumnAnalysis for TextColumn {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    fn unique_count(&self) -> usize {
        self.present().map(|(_, v)| v).collect::<HashSet<_>>().len()
    }

    fn statistics(&self) -> ColumnStats {
        ColumnStats::String
    }

    fn flag_outliers(&self, column: &str) -> Vec<Finding> {
        let mut findings = self.missing_findings(column);
        let missing = findings.len();

        findings.extend(self.placeholder_findings(column));
        let placeholders = findings.len() - missing;

        findings.extend(self.length_findings(column));
        debug!(
            "{}: {} missing, {} placeholders, {} length outliers",
            column,
            missing,
            placeholders,
            findings.len() - missing - placeholders
        );

        findings
    }
}
