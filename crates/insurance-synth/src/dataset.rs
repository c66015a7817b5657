//! Assembling generated records into a polars frame and persisting it.

use polars::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

use crate::config::SynthConfig;
use crate::defects::{InjectedDefects, inject_defects};
use crate::error::{Result, ResultExt};
use crate::generator::generate_records;
use crate::record::InsuranceRecord;

/// Date format used for the `start_date` and `end_date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output of one synthesis run.
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub records: Vec<InsuranceRecord>,
    pub defects: InjectedDefects,
}

impl SyntheticDataset {
    /// Generate records and inject defects using a generator seeded from
    /// `config.seed`.
    pub fn synthesize(config: &SynthConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut records = generate_records(&mut rng, config)?;
        let defects = inject_defects(&mut rng, &mut records, &config.defects);

        info!(
            "Synthesized {} records (seed {}, {} injected defects)",
            records.len(),
            config.seed,
            defects.total()
        );

        Ok(Self { records, defects })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a frame with the fixed column layout.
    ///
    /// Dates are rendered as `YYYY-MM-DD` text and booleans as `True`/`False`
    /// so the CSV carries exactly those literals.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let records = &self.records;

        let df = df![
            "policy_id" => records.iter().map(|r| r.policy_id.clone()).collect::<Vec<_>>(),
            "customer_name" => records.iter().map(|r| r.customer_name.clone()).collect::<Vec<_>>(),
            "age" => records.iter().map(|r| r.age).collect::<Vec<_>>(),
            "gender" => records
                .iter()
                .map(|r| r.gender.map(|g| g.as_str().to_string()))
                .collect::<Vec<_>>(),
            "policy_type" => records
                .iter()
                .map(|r| r.policy_type.as_str().to_string())
                .collect::<Vec<_>>(),
            "premium" => records.iter().map(|r| r.premium).collect::<Vec<_>>(),
            "coverage_amount" => records.iter().map(|r| r.coverage_amount).collect::<Vec<_>>(),
            "start_date" => records
                .iter()
                .map(|r| r.start_date.format(DATE_FORMAT).to_string())
                .collect::<Vec<_>>(),
            "end_date" => records
                .iter()
                .map(|r| r.end_date.format(DATE_FORMAT).to_string())
                .collect::<Vec<_>>(),
            "is_active" => records
                .iter()
                .map(|r| if r.is_active { "True" } else { "False" }.to_string())
                .collect::<Vec<_>>(),
            "risk_score" => records.iter().map(|r| r.risk_score).collect::<Vec<_>>(),
            "claim_history" => records.iter().map(|r| r.claim_history).collect::<Vec<_>>(),
            "annual_income" => records.iter().map(|r| r.annual_income).collect::<Vec<_>>(),
            "zip_code" => records.iter().map(|r| r.zip_code.clone()).collect::<Vec<_>>(),
            "agent_id" => records.iter().map(|r| r.agent_id.clone()).collect::<Vec<_>>(),
        ]
        .context("Building synthetic dataframe")?;

        Ok(df)
    }

    /// Write the dataset as CSV to `path`, creating parent directories.
    pub fn write_csv(&self, path: &Path) -> Result<DataFrame> {
        let mut df = self.to_dataframe()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Creating output directory {}", parent.display()))?;
        }

        let mut file =
            File::create(path).context(format!("Creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(&mut df)
            .context(format!("Writing {}", path.display()))?;

        info!("Dataset saved: {}", path.display());
        Ok(df)
    }
}
