//! CLI argument parsing and command handling

use crate::config::{AnalysisConfig, DEFAULT_FILE_NAME, DEFAULT_UNIT};
use crate::output::{CsvExporter, ExcelExporter, JsonExporter};
use crate::pipeline::{self, Analysis};
use crate::visualization::PngDirectory;
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// perf-visual - summarize and plot benchmark results
#[derive(Parser, Debug)]
#[command(name = "perf-visual")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the results file [default: current directory]
    #[arg(long)]
    pub path_to_file: Option<PathBuf>,

    /// Results file name
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Unit keyword following every value (e.g. "seconds")
    #[arg(short, long, default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Directory where one scatter plot per metric is rendered
    #[arg(long, default_value = "plots")]
    pub plot_dir: PathBuf,

    /// Output directory for exports
    #[arg(long, default_value = "results")]
    pub output_dir: PathBuf,

    /// Export cleaned data and statistics to CSV
    #[arg(long)]
    pub csv: bool,

    /// Export statistics to JSON
    #[arg(long)]
    pub json: bool,

    /// Export cleaned data and statistics to Excel (.xlsx)
    #[arg(long)]
    pub excel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Analysis settings described by the arguments
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_path_to_file(self.path_to_file.clone().unwrap_or_default())
            .with_file_name(self.file_name.clone())
            .with_unit(self.unit.clone())
    }

    /// Run the analysis based on CLI arguments
    pub fn run(&self) -> Result<()> {
        let config = self.config();
        tracing::debug!("Results file: {}", config.benchmark_file().display());

        let mut plots = PngDirectory::new(self.plot_dir.clone());
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let Some(analysis) = pipeline::run(&config, &mut out, &mut plots)
            .with_context(|| format!("Failed to analyze {}", config.benchmark_file().display()))?
        else {
            return Ok(());
        };

        tracing::info!(
            "Rendered {} plots to {}",
            plots.written().len(),
            plots.dir().display()
        );

        self.export(&analysis)
    }

    fn export(&self, analysis: &Analysis) -> Result<()> {
        if !(self.csv || self.json || self.excel) {
            return Ok(());
        }

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.output_dir.display())
        })?;

        if self.csv {
            let path = self.output_dir.join("cleaned.csv");
            CsvExporter::export(&analysis.table, &path)
                .with_context(|| format!("Failed to export CSV to: {}", path.display()))?;
            tracing::info!("CSV exported to: {}", path.display());

            let summary_path = self.output_dir.join("summary.csv");
            CsvExporter::export_summary(&analysis.description, &summary_path).with_context(
                || format!("Failed to export CSV summary to: {}", summary_path.display()),
            )?;
            tracing::info!("CSV summary exported to: {}", summary_path.display());
        }

        if self.json {
            let path = self.output_dir.join("summary.json");
            JsonExporter::export_summary(&analysis.description, &path)
                .with_context(|| format!("Failed to export JSON to: {}", path.display()))?;
            tracing::info!("JSON exported to: {}", path.display());
        }

        if self.excel {
            let path = self.output_dir.join("results.xlsx");
            ExcelExporter::export(&analysis.table, &analysis.description, &path)
                .with_context(|| format!("Failed to export Excel to: {}", path.display()))?;
            tracing::info!("Excel exported to: {}", path.display());
        }

        Ok(())
    }
}
