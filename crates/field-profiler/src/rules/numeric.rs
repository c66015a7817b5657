use std::collections::HashSet;

use tracing::debug;

use super::{ColumnAnalysis, IQR_MULTIPLIER};
use crate::profiler::statistics::{mean, median, quantile, round2, sample_std, sorted};
use crate::types::{ColumnStats, FlagReason, Finding, NumericStats};

/// A numeric column. NaN is treated as missing at extraction time.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    values: Vec<Option<f64>>,
}

impl NumericColumn {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    fn present(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }

    /// Lower and upper IQR fences, or `None` for an empty column.
    pub fn fences(&self) -> Option<(f64, f64)> {
        let sorted = sorted(&self.present());
        let q1 = quantile(&sorted, 0.25)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        Some((q1 - IQR_MULTIPLIER * iqr, q3 + IQR_MULTIPLIER * iqr))
    }
}

impl ColumnAnalysis for NumericColumn {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    fn unique_count(&self) -> usize {
        self.values
            .iter()
            .flatten()
            // -0.0 and 0.0 are the same value
            .map(|v| if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
            .collect::<HashSet<_>>()
            .len()
    }

    fn statistics(&self) -> ColumnStats {
        let present = self.present();
        let sorted = sorted(&present);

        let stats = (|| {
            Some(NumericStats {
                mean: round2(mean(&present)?),
                median: round2(median(&sorted)?),
                std: sample_std(&present).map(round2),
                min: round2(*sorted.first()?),
                max: round2(*sorted.last()?),
                q1: round2(quantile(&sorted, 0.25)?),
                q3: round2(quantile(&sorted, 0.75)?),
            })
        })();

        ColumnStats::Numeric(stats)
    }

    fn flag_outliers(&self, column: &str) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .values
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.filter(|v| *v < 0.0).map(|v| (row, v)))
            .map(|(row, v)| Finding::new(row, column, FlagReason::NegativeValue(v)))
            .collect();
        let negatives = findings.len();

        if let Some((lower, upper)) = self.fences() {
            findings.extend(
                self.values
                    .iter()
                    .enumerate()
                    .filter_map(|(row, v)| v.filter(|v| *v < lower || *v > upper).map(|v| (row, v)))
                    .map(|(row, v)| Finding::new(row, column, FlagReason::OutlierValue(v))),
            );
            debug!(
                "{}: fences [{:.2}, {:.2}], {} negative, {} outside",
                column,
                lower,
                upper,
                negatives,
                findings.len() - negatives
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn column(values: &[f64]) -> NumericColumn {
        NumericColumn::new(values.iter().map(|v| Some(*v)).collect())
    }

    #[test]
    fn test_flags_iqr_outlier_without_negatives() {
        let col = column(&[10.0, 12.0, 11.0, 13.0, 1000.0]);
        let findings = col.flag_outliers("premium");

        assert_eq!(
            findings,
            vec![Finding::new(4, "premium", FlagReason::OutlierValue(1000.0))]
        );
        assert_eq!(findings[0].reason.to_string(), "Outlier value: 1000");
    }

    #[test]
    fn test_negative_rule_runs_before_fences() {
        let col = NumericColumn::new(vec![
            Some(100.0),
            Some(-5.0),
            None,
            Some(110.0),
            Some(105.0),
            Some(95.0),
        ]);
        let findings = col.flag_outliers("premium");

        // -5 is both negative and below the lower fence
        assert_eq!(
            findings,
            vec![
                Finding::new(1, "premium", FlagReason::NegativeValue(-5.0)),
                Finding::new(1, "premium", FlagReason::OutlierValue(-5.0)),
            ]
        );
    }

    #[test]
    fn test_negative_values_flagged_inside_fences() {
        let col = column(&[-3.0, -2.0, -1.0, -2.5]);
        let findings = col.flag_outliers("delta");
        assert_eq!(findings.len(), 4);
        assert!(
            findings
                .iter()
                .all(|f| matches!(f.reason, FlagReason::NegativeValue(_)))
        );
    }

    #[test]
    fn test_findings_lie_strictly_outside_fences() {
        let col = column(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 50.0, -40.0, 2.5]);
        let (lower, upper) = col.fences().unwrap();
        for finding in col.flag_outliers("x") {
            if let FlagReason::OutlierValue(v) = finding.reason {
                assert!(v < lower || v > upper);
            }
        }
    }

    #[test]
    fn test_statistics() {
        let col = NumericColumn::new(vec![Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]);
        let ColumnStats::Numeric(Some(stats)) = col.statistics() else {
            panic!("expected numeric stats");
        };

        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.std, Some(1.29));
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.q3, 3.25);
        assert!(stats.q1 <= stats.median && stats.median <= stats.q3);
    }

    #[test]
    fn test_counts() {
        let col = NumericColumn::new(vec![Some(1.0), Some(1.0), None, Some(-0.0), Some(0.0)]);
        assert_eq!(col.len(), 5);
        assert_eq!(col.missing_count(), 1);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let col = column(&[42.0]);
        let ColumnStats::Numeric(Some(stats)) = col.statistics() else {
            panic!("expected numeric stats");
        };
        assert_eq!(stats.std, None);
        assert!(col.flag_outliers("x").is_empty());
    }

    #[test]
    fn test_all_missing_column() {
        let col = NumericColumn::new(vec![None, None, None]);
        assert_eq!(col.statistics(), ColumnStats::Numeric(None));
        assert_eq!(col.missing_count(), 3);
        assert_eq!(col.unique_count(), 0);
        assert!(col.flag_outliers("x").is_empty());
    }
}
