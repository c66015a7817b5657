//! Synthetic Insurance Dataset Generator
//!
//! Produces a fake insurance policy table with a fixed 15-column schema and
//! then damages it on purpose (upper-cased names, missing genders and
//! premiums, invalid zip codes) so downstream data-quality tooling has
//! something to find.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use insurance_synth::{SynthConfig, SyntheticDataset};
//! use std::path::Path;
//!
//! let config = SynthConfig::builder()
//!     .records(1000)
//!     .seed(42)
//!     .build()?;
//!
//! let dataset = SyntheticDataset::synthesize(&config)?;
//! dataset.write_csv(Path::new("insurance_dummy_data.csv"))?;
//! ```
//!
//! All randomness flows through a single seeded [`rand::rngs::StdRng`] owned
//! by the run, so identical configurations produce identical files.

pub mod config;
pub mod dataset;
pub mod defects;
pub mod error;
pub mod generator;
pub mod record;

pub use config::{ConfigValidationError, DefectPlan, SynthConfig, SynthConfigBuilder};
pub use dataset::{DATE_FORMAT, SyntheticDataset};
pub use defects::{INVALID_ZIP_CODE, InjectedDefects, inject_defects};
pub use error::{Result as SynthResult, ResultExt, SynthError};
pub use generator::generate_records;
pub use record::{COLUMN_NAMES, Gender, InsuranceRecord, PolicyType};
