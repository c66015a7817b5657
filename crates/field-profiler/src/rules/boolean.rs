use std::collections::HashSet;

use super::ColumnAnalysis;
use crate::types::{BooleanStats, ColumnStats, FlagReason, Finding};
use crate::utils::{is_boolean_false, is_boolean_true, is_canonical_boolean};

/// A boolean column, held as the text each cell was written with.
///
/// Native boolean storage is rendered as `True`/`False` on extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanColumn {
    values: Vec<Option<String>>,
}

impl BooleanColumn {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    pub fn from_bools(values: impl IntoIterator<Item = Option<bool>>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|v| v.map(|b| if b { "True" } else { "False" }.to_string()))
                .collect(),
        )
    }
}

impl ColumnAnalysis for BooleanColumn {
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
        let present = || self.values.iter().flatten();
        ColumnStats::Boolean(BooleanStats {
            true_count: present().filter(|v| is_boolean_true(v)).count(),
            false_count: present().filter(|v| is_boolean_false(v)).count(),
        })
    }

    fn flag_outliers(&self, column: &str) -> Vec<Finding> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.as_deref().map(|v| (row, v)))
            .filter(|(_, v)| !is_canonical_boolean(v))
            .map(|(row, v)| {
                Finding::new(row, column, FlagReason::NonBooleanValue(v.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn column(values: &[Option<&str>]) -> BooleanColumn {
        BooleanColumn::new(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn test_flags_only_non_canonical_token() {
        let col = column(&[Some("True"), Some("False"), Some("Yes"), Some("1"), Some("0")]);
        let findings = col.flag_outliers("is_active");

        assert_eq!(
            findings,
            vec![Finding::new(
                2,
                "is_active",
                FlagReason::NonBooleanValue("Yes".to_string())
            )]
        );
        assert_eq!(findings[0].reason.to_string(), "Non-boolean value: Yes");
    }

    #[test]
    fn test_statistics_count_tokens() {
        let col = column(&[Some("True"), Some("False"), Some("Yes"), Some("1"), None, Some("no")]);
        assert_eq!(
            col.statistics(),
            ColumnStats::Boolean(BooleanStats {
                true_count: 3,
                false_count: 2,
            })
        );
        assert_eq!(col.missing_count(), 1);
        assert_eq!(col.unique_count(), 5);
    }

    #[test]
    fn test_native_booleans() {
        let col = BooleanColumn::from_bools([Some(true), None, Some(false), Some(true)]);
        assert!(col.flag_outliers("is_active").is_empty());
        assert_eq!(
            col.statistics(),
            ColumnStats::Boolean(BooleanStats {
                true_count: 2,
                false_count: 1,
            })
        );
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_missing_cells_are_not_flagged() {
        let col = column(&[None, Some("false"), None]);
        assert!(col.flag_outliers("flag").is_empty());
    }
}
