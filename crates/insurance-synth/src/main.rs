//! CLI entry point for the synthetic insurance dataset generator.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::Parser;
use insurance_synth::{COLUMN_NAMES, DefectPlan, SynthConfig, SyntheticDataset};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Synthetic insurance dataset generator",
    long_about = "Generates a fake insurance policy dataset and injects known data-quality \
                  defects (upper-cased names, missing genders and premiums, invalid zip codes).\n\n\
                  EXAMPLES:\n  \
                  # 1000 records with the default seed\n  \
                  insurance-synth\n\n  \
                  # Reproducible run pinned to a reference date\n  \
                  insurance-synth --seed 7 --reference-date 2024-10-10 -o data/policies.csv\n\n  \
                  # Clean data without injected defects\n  \
                  insurance-synth --no-defects"
)]
struct Args {
    /// Destination CSV file
    #[arg(short, long, default_value = "insurance_dummy_data.csv")]
    output: PathBuf,

    /// Number of records to generate
    #[arg(short = 'n', long, default_value = "1000")]
    records: usize,

    /// Seed for the pseudorandom generator
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Date treated as "today" (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Skip defect injection
    #[arg(long)]
    no_defects: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final summary)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);

    let mut builder = SynthConfig::builder()
        .records(args.records)
        .seed(args.seed)
        .output_path(args.output.clone());

    if let Some(date) = args.reference_date {
        builder = builder.reference_date(date);
    }
    if args.no_defects {
        builder = builder.defects(DefectPlan::none());
    }

    let config = builder.build()?;
    info!(
        "Generating {} records with seed {} (reference date {})",
        config.records, config.seed, config.reference_date
    );

    let dataset = SyntheticDataset::synthesize(&config).map_err(|e| {
        error!("Synthesis failed: {}", e);
        anyhow!("Synthesis failed: {}", e)
    })?;
    let df = dataset.write_csv(&config.output_path)?;

    // Plain stdout so the preview is visible regardless of log level
    println!("{}", df.head(Some(5)));
    println!();
    println!("Dataset shape: ({}, {})", df.height(), df.width());
    println!();
    println!("Column names: {}", COLUMN_NAMES.join(", "));
    println!("Saved to: {}", config.output_path.display());

    Ok(())
}
