//! Configuration for the dataset synthesizer.
//!
//! Uses the builder pattern so the CLI and tests only spell out the
//! settings they care about.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of rows touched by each injected defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectPlan {
    /// Customer names rewritten in upper case.
    pub uppercase_names: usize,
    /// Gender values blanked out.
    pub missing_genders: usize,
    /// Premium values blanked out.
    pub missing_premiums: usize,
    /// Zip codes replaced with the literal `INVALID`.
    pub invalid_zip_codes: usize,
}

impl Default for DefectPlan {
    fn default() -> Self {
        Self {
            uppercase_names: 50,
            missing_genders: 30,
            missing_premiums: 20,
            invalid_zip_codes: 10,
        }
    }
}

impl DefectPlan {
    /// A plan that leaves the generated data untouched.
    pub fn none() -> Self {
        Self {
            uppercase_names: 0,
            missing_genders: 0,
            missing_premiums: 0,
            invalid_zip_codes: 0,
        }
    }

    fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("uppercase_names", self.uppercase_names),
            ("missing_genders", self.missing_genders),
            ("missing_premiums", self.missing_premiums),
            ("invalid_zip_codes", self.invalid_zip_codes),
        ]
    }
}

/// Configuration for one synthesis run.
///
/// # Example
///
/// ```rust,ignore
/// use insurance_synth::SynthConfig;
///
/// let config = SynthConfig::builder()
///     .records(500)
///     .seed(7)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Number of policy records to generate.
    /// Default: 1000
    pub records: usize,

    /// Seed for the pseudorandom generator.
    /// Default: 42
    pub seed: u64,

    /// Date treated as "today" when drawing start and end dates.
    /// Default: the local date at build time
    pub reference_date: NaiveDate,

    /// Probability that a policy is active.
    /// Default: 0.9
    pub active_probability: f64,

    /// Defects injected after generation.
    pub defects: DefectPlan,

    /// Destination CSV file.
    /// Default: "insurance_dummy_data.csv"
    pub output_path: PathBuf,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            records: 1000,
            seed: 42,
            reference_date: Local::now().date_naive(),
            active_probability: 0.9,
            defects: DefectPlan::default(),
            output_path: PathBuf::from("insurance_dummy_data.csv"),
        }
    }
}

impl SynthConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SynthConfigBuilder {
        SynthConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.records == 0 {
            return Err(ConfigValidationError::ZeroRecords);
        }

        if !(0.0..=1.0).contains(&self.active_probability) {
            return Err(ConfigValidationError::InvalidProbability(
                self.active_probability,
            ));
        }

        for (field, count) in self.defects.entries() {
            if count > self.records {
                return Err(ConfigValidationError::TooManyDefects {
                    field: field.to_string(),
                    count,
                    records: self.records,
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Record count must be at least 1")]
    ZeroRecords,

    #[error("Invalid active probability: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),

    #[error("Defect '{field}' touches {count} rows but only {records} records are generated")]
    TooManyDefects {
        field: String,
        count: usize,
        records: usize,
    },
}

/// Builder for [`SynthConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct SynthConfigBuilder {
    records: Option<usize>,
    seed: Option<u64>,
    reference_date: Option<NaiveDate>,
    active_probability: Option<f64>,
    defects: Option<DefectPlan>,
    output_path: Option<PathBuf>,
}

impl SynthConfigBuilder {
    /// Set the number of records to generate.
    pub fn records(mut self, records: usize) -> Self {
        self.records = Some(records);
        self
    }

    /// Set the seed of the pseudorandom generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the reference date so runs on different days produce the same file.
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the probability that a generated policy is active.
    pub fn active_probability(mut self, probability: f64) -> Self {
        self.active_probability = Some(probability);
        self
    }

    /// Set the defect plan.
    pub fn defects(mut self, defects: DefectPlan) -> Self {
        self.defects = Some(defects);
        self
    }

    /// Set the destination CSV file.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `SynthConfig` or an error if validation fails.
    pub fn build(self) -> Result<SynthConfig, ConfigValidationError> {
        let config = SynthConfig {
            records: self.records.unwrap_or(1000),
            seed: self.seed.unwrap_or(42),
            reference_date: self
                .reference_date
                .unwrap_or_else(|| Local::now().date_naive()),
            active_probability: self.active_probability.unwrap_or(0.9),
            defects: self.defects.unwrap_or_default(),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from("insurance_dummy_data.csv")),
        };

        config.validate()?;
        Ok(config)
    }
}
