//! The synthetic policy record and its fixed column layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names in the order they are written.
pub const COLUMN_NAMES: [&str; 15] = [
    "policy_id",
    "customer_name",
    "age",
    "gender",
    "policy_type",
    "premium",
    "coverage_amount",
    "start_date",
    "end_date",
    "is_active",
    "risk_score",
    "claim_history",
    "annual_income",
    "zip_code",
    "agent_id",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Auto,
    Home,
    Life,
    Health,
}

impl PolicyType {
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Auto,
        PolicyType::Home,
        PolicyType::Life,
        PolicyType::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Auto => "Auto",
            PolicyType::Home => "Home",
            PolicyType::Life => "Life",
            PolicyType::Health => "Health",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the synthetic insurance dataset.
///
/// `gender` and `premium` are optional because defect injection blanks some
/// of them out; every other field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRecord {
    pub policy_id: String,
    pub customer_name: String,
    pub age: i64,
    pub gender: Option<Gender>,
    pub policy_type: PolicyType,
    pub premium: Option<f64>,
    pub coverage_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub risk_score: i64,
    pub claim_history: i64,
    pub annual_income: f64,
    pub zip_code: String,
    pub agent_id: String,
}

/// Format a one-based sequence number as a policy identifier.
pub fn policy_id(sequence: usize) -> String {
    format!("POL-{:06}", sequence)
}

/// Format an agent number as an agent identifier.
pub fn agent_id(number: u32) -> String {
    format!("AGT-{:03}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_formats() {
        assert_eq!(policy_id(1), "POL-000001");
        assert_eq!(policy_id(1000), "POL-001000");
        assert_eq!(agent_id(7), "AGT-007");
        assert_eq!(agent_id(100), "AGT-100");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Gender::Male.to_string(), "M");
        assert_eq!(Gender::Other.as_str(), "Other");
        assert_eq!(PolicyType::Health.to_string(), "Health");
    }

    #[test]
    fn test_column_names_are_unique() {
        let mut names = COLUMN_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COLUMN_NAMES.len());
    }
}
