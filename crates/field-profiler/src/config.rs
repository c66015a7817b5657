//! Configuration types for a profiling run.
//!
//! Only output placement is configurable. Rule thresholds are constants in
//! [`crate::rules`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory created next to the input file when no output directory is set.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "analysis_output";

/// Configuration for report output.
///
/// # Example
///
/// ```rust,ignore
/// use field_profiler::ProfilerConfig;
///
/// let config = ProfilerConfig::builder()
///     .output_dir("reports")
///     .emit_json(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Directory for all outputs.
    /// Default: None (`<input dir>/analysis_output`)
    pub output_dir: Option<PathBuf>,

    /// File name of the Field Analysis document.
    /// Default: "field_analysis.md"
    pub report_name: String,

    /// File name of the Flagged Records CSV.
    /// Default: "flagged_records.csv"
    pub flagged_name: String,

    /// Whether to also write the analysis as JSON.
    /// Default: false
    pub emit_json: bool,

    /// File name of the JSON analysis.
    /// Default: "field_analysis.json"
    pub json_name: String,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            report_name: "field_analysis.md".to_string(),
            flagged_name: "flagged_records.csv".to_string(),
            emit_json: false,
            json_name: "field_analysis.json".to_string(),
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Directory the outputs for `input` are written to.
    pub fn resolve_output_dir(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_OUTPUT_SUBDIR),
        }
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("report_name", &self.report_name),
            ("flagged_name", &self.flagged_name),
            ("json_name", &self.json_name),
        ] {
            if value.trim().is_empty() || value.contains(['/', '\\']) {
                return Err(ConfigValidationError::InvalidFileName {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        if self.report_name == self.flagged_name
            || (self.emit_json
                && (self.json_name == self.report_name || self.json_name == self.flagged_name))
        {
            return Err(ConfigValidationError::DuplicateFileName);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid file name for '{field}': '{value}' (must be a plain, non-empty file name)")]
    InvalidFileName { field: String, value: String },

    #[error("Output file names must be distinct")]
    DuplicateFileName,
}

/// Builder for [`ProfilerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    output_dir: Option<PathBuf>,
    report_name: Option<String>,
    flagged_name: Option<String>,
    emit_json: Option<bool>,
    json_name: Option<String>,
}

impl ProfilerConfigBuilder {
    /// Write all outputs into `path` instead of `<input dir>/analysis_output`.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the file name of the Field Analysis document.
    pub fn report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = Some(name.into());
        self
    }

    /// Set the file name of the Flagged Records CSV.
    pub fn flagged_name(mut self, name: impl Into<String>) -> Self {
        self.flagged_name = Some(name.into());
        self
    }

    /// Enable or disable the JSON analysis output.
    pub fn emit_json(mut self, emit: bool) -> Self {
        self.emit_json = Some(emit);
        self
    }

    /// Set the file name of the JSON analysis.
    pub fn json_name(mut self, name: impl Into<String>) -> Self {
        self.json_name = Some(name.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilerConfig, ConfigValidationError> {
        let defaults = ProfilerConfig::default();
        let config = ProfilerConfig {
            output_dir: self.output_dir,
            report_name: self.report_name.unwrap_or(defaults.report_name),
            flagged_name: self.flagged_name.unwrap_or(defaults.flagged_name),
            emit_json: self.emit_json.unwrap_or(defaults.emit_json),
            json_name: self.json_name.unwrap_or(defaults.json_name),
        };

        config.validate()?;
        Ok(config)
    }
}
