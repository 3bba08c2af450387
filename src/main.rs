//! perf-visual CLI
//!
//! Prints descriptive statistics for a benchmark results file and renders
//! one scatter plot per metric.

use anyhow::Result;
use clap::Parser;
use perf_visual::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the statistics table
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
