use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::{ColumnAnalysis, FUTURE_DATE_CUTOFF, OLD_DATE_WINDOW_DAYS};
use crate::profiler::statistics::{median, sorted};
use crate::types::{ColumnStats, DateStats, FlagReason, Finding};

#[derive(Debug, Clone, PartialEq)]
pub struct DateColumn {
    values: Vec<Option<NaiveDate>>,
}

impl DateColumn {
    pub fn new(values: Vec<Option<NaiveDate>>) -> Self {
        Self { values }
    }

    /// Median as a fractional day number, interpolated like any other median.
    fn median_day(&self) -> Option<f64> {
        let days: Vec<f64> = self
            .values
            .iter()
            .flatten()
            .map(|d| d.num_days_from_ce() as f64)
            .collect();
        median(&sorted(&days))
    }

    fn flag_where(
        &self,
        column: &str,
        predicate: impl Fn(&NaiveDate) -> bool,
        reason: impl Fn(NaiveDate) -> FlagReason,
    ) -> Vec<Finding> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(row, d)| d.filter(|d| predicate(d)).map(|d| (row, d)))
            .map(|(row, d)| Finding::new(row, column, reason(d)))
            .collect()
    }
}

impl ColumnAnalysis for DateColumn {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    fn unique_count(&self) -> usize {
        self.values.iter().flatten().collect::<HashSet<_>>().len()
    }

    fn statistics(&self) -> ColumnStats {
        let earliest = self.values.iter().flatten().min().copied();
        let latest = self.values.iter().flatten().max().copied();

        ColumnStats::Date(
            earliest
                .zip(latest)
                .map(|(earliest, latest)| DateStats { earliest, latest }),
        )
    }

    fn flag_outliers(&self, column: &str) -> Vec<Finding> {
        let mut findings =
            self.flag_where(column, |d| *d > FUTURE_DATE_CUTOFF, FlagReason::FutureDate);

        if let Some(median_day) = self.median_day() {
            let threshold = median_day - OLD_DATE_WINDOW_DAYS;
            let old = self.flag_where(
                column,
                |d| (d.num_days_from_ce() as f64) < threshold,
                FlagReason::UnusuallyOldDate,
            );
            debug!(
                "{}: {} after {}, {} older than median - {} days",
                column,
                findings.len(),
                FUTURE_DATE_CUTOFF,
                old.len(),
                OLD_DATE_WINDOW_DAYS
            );
            findings.extend(old);
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_future_dates_after_cutoff() {
        let col = DateColumn::new(vec![
            Some(date(2024, 9, 30)),
            Some(date(2024, 10, 1)),
            None,
            Some(date(2023, 1, 15)),
            Some(date(2027, 6, 2)),
        ]);
        let findings = col.flag_outliers("end_date");

        // The cutoff day itself is not in the future
        assert_eq!(
            findings,
            vec![
                Finding::new(1, "end_date", FlagReason::FutureDate(date(2024, 10, 1))),
                Finding::new(4, "end_date", FlagReason::FutureDate(date(2027, 6, 2))),
            ]
        );
        assert_eq!(findings[0].reason.to_string(), "Future date: 2024-10-01");
    }

    #[test]
    fn test_unusually_old_dates() {
        let col = DateColumn::new(vec![
            Some(date(2020, 1, 1)),
            Some(date(2021, 6, 1)),
            Some(date(1900, 1, 1)),
            Some(date(2022, 3, 1)),
            Some(date(2019, 5, 5)),
        ]);
        let findings = col.flag_outliers("start_date");

        // Median 2020-01-01 minus 30000 days is in 1937
        assert_eq!(
            findings,
            vec![Finding::new(
                2,
                "start_date",
                FlagReason::UnusuallyOldDate(date(1900, 1, 1))
            )]
        );
        assert_eq!(
            findings[0].reason.to_string(),
            "Unusually old date: 1900-01-01"
        );
    }

    #[test]
    fn test_future_rule_precedes_old_rule() {
        let col = DateColumn::new(vec![
            Some(date(1850, 1, 1)),
            Some(date(2030, 1, 1)),
            Some(date(2020, 1, 1)),
            Some(date(2020, 2, 1)),
            Some(date(2020, 3, 1)),
        ]);
        let reasons: Vec<String> = col
            .flag_outliers("d")
            .iter()
            .map(|f| f.reason.to_string())
            .collect();
        assert_eq!(
            reasons,
            vec!["Future date: 2030-01-01", "Unusually old date: 1850-01-01"]
        );
    }

    #[test]
    fn test_statistics_and_counts() {
        let col = DateColumn::new(vec![
            Some(date(2022, 5, 1)),
            None,
            Some(date(2019, 12, 31)),
            Some(date(2022, 5, 1)),
        ]);
        assert_eq!(
            col.statistics(),
            ColumnStats::Date(Some(DateStats {
                earliest: date(2019, 12, 31),
                latest: date(2022, 5, 1),
            }))
        );
        assert_eq!(col.missing_count(), 1);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_empty_column() {
        let col = DateColumn::new(vec![None, None]);
        assert_eq!(col.statistics(), ColumnStats::Date(None));
        assert!(col.flag_outliers("d").is_empty());
    }
}
