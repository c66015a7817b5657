use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Coarse type assigned to a column for statistics and rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseType {
    Boolean,
    Numeric,
    Date,
    String,
}

impl CoarseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseType::Boolean => "boolean",
            CoarseType::Numeric => "numeric",
            CoarseType::Date => "date",
            CoarseType::String => "string",
        }
    }
}

impl fmt::Display for CoarseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary statistics of a numeric column, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; absent with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStats {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Counts of truthy and falsy tokens; missing cells count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanStats {
    pub true_count: usize,
    pub false_count: usize,
}

/// Type-specific statistics of a column.
///
/// Numeric and date statistics are `None` when the column has no
/// non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum ColumnStats {
    Numeric(Option<NumericStats>),
    Date(Option<DateStats>),
    Boolean(BooleanStats),
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub data_type: CoarseType,
    pub row_count: usize,
    /// Distinct non-missing values.
    pub unique_values: usize,
    pub missing_values: usize,
    pub stats: ColumnStats,
}

/// Why a cell was flagged.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagReason {
    NegativeValue(f64),
    OutlierValue(f64),
    FutureDate(NaiveDate),
    UnusuallyOldDate(NaiveDate),
    NonBooleanValue(String),
    MissingValue,
    PlaceholderValue(String),
    UnusuallyShort(String),
    UnusuallyLong(String),
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagReason::NegativeValue(v) => write!(f, "Negative value: {}", v),
            FlagReason::OutlierValue(v) => write!(f, "Outlier value: {}", v),
            FlagReason::FutureDate(d) => write!(f, "Future date: {}", d),
            FlagReason::UnusuallyOldDate(d) => write!(f, "Unusually old date: {}", d),
            FlagReason::NonBooleanValue(v) => write!(f, "Non-boolean value: {}", v),
            FlagReason::MissingValue => f.write_str("Missing value"),
            FlagReason::PlaceholderValue(v) => write!(f, "Placeholder value: {}", v),
            FlagReason::UnusuallyShort(v) => write!(f, "Unusually short value: {}", v),
            FlagReason::UnusuallyLong(v) => write!(f, "Unusually long value: {}", v),
        }
    }
}

impl Serialize for FlagReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A suspect cell: zero-based data row, column name, reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub row: usize,
    pub column: String,
    pub reason: FlagReason,
}

impl Finding {
    pub fn new(row: usize, column: impl Into<String>, reason: FlagReason) -> Self {
        Self {
            row,
            column: column.into(),
            reason,
        }
    }
}

/// Everything one profiling run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAnalysis {
    pub row_count: usize,
    pub profiles: Vec<ColumnProfile>,
    pub findings: Vec<Finding>,
}

impl FieldAnalysis {
    pub fn profile(&self, column: &str) -> Option<&ColumnProfile> {
        self.profiles.iter().find(|p| p.name == column)
    }

    pub fn findings_for<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.column == column)
    }
}

static_assertions::assert_impl_all!(FieldAnalysis: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            FlagReason::OutlierValue(1000.0).to_string(),
            "Outlier value: 1000"
        );
        assert_eq!(
            FlagReason::NegativeValue(-12.5).to_string(),
            "Negative value: -12.5"
        );
        assert_eq!(
            FlagReason::FutureDate(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).to_string(),
            "Future date: 2025-03-01"
        );
        assert_eq!(FlagReason::MissingValue.to_string(), "Missing value");
        assert_eq!(
            FlagReason::NonBooleanValue("Yes".to_string()).to_string(),
            "Non-boolean value: Yes"
        );
    }

    #[test]
    fn test_finding_serializes_reason_as_text() {
        let finding = Finding::new(3, "gender", FlagReason::MissingValue);
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["row"], 3);
        assert_eq!(json["column"], "gender");
        assert_eq!(json["reason"], "Missing value");
    }

    #[test]
    fn test_column_stats_serialization() {
        let stats = ColumnStats::Boolean(BooleanStats {
            true_count: 4,
            false_count: 1,
        });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["kind"], "boolean");
        assert_eq!(json["values"]["true_count"], 4);

        let json = serde_json::to_value(ColumnStats::String).unwrap();
        assert_eq!(json["kind"], "string");
    }

    #[test]
    fn test_coarse_type_display() {
        assert_eq!(CoarseType::Numeric.to_string(), "numeric");
        assert_eq!(
            serde_json::to_string(&CoarseType::Date).unwrap(),
            "\"date\""
        );
    }
}
