//! CLI entry point for the field profiler.

use anyhow::{Result, anyhow};
use clap::Parser;
use field_profiler::{ProfilerConfig, print_summary, profile_csv};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Column profiling and suspect-value flagging for CSV data",
    long_about = "Infers a type for every column of a CSV file, computes per-column statistics \
                  and flags suspect values (outliers, placeholders, out-of-range dates).\n\n\
                  Writes field_analysis.md and flagged_records.csv into <input dir>/analysis_output \
                  unless --output-dir is given.\n\n\
                  EXAMPLES:\n  \
                  # Profile the synthesizer's default output\n  \
                  field-profiler\n\n  \
                  # Custom input and output directory, with a JSON report\n  \
                  field-profiler data/policies.csv -o reports --json-report"
)]
struct Args {
    /// Input CSV file
    #[arg(default_value = "insurance_dummy_data.csv")]
    input: PathBuf,

    /// Directory for the reports (default: <input dir>/analysis_output)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write the analysis as field_analysis.json
    #[arg(long)]
    json_report: bool,

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

    let mut builder = ProfilerConfig::builder().emit_json(args.json_report);
    if let Some(dir) = &args.output_dir {
        builder = builder.output_dir(dir.clone());
    }
    let config = builder.build()?;

    let run = profile_csv(&args.input, &config).map_err(|e| {
        error!("[{}] {}", e.error_code(), e);
        anyhow!("Profiling '{}' failed: {}", args.input.display(), e)
    })?;

    print_summary(&run.analysis, &run.paths);

    Ok(())
}
