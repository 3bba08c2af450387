//! perf-visual - benchmark results summaries and plots
//!
//! Reads a JSON file of benchmark runs whose values carry a unit label
//! (`"1.5 seconds"`), strips the label, and reports on the numbers.
//!
//! # Architecture
//!
//! - **Loader**: JSON records or columns into a [`Table`] of raw strings
//! - **Cleaner**: unit stripping and float parsing
//! - **Stats**: count, mean, std, min, quartiles, max per metric
//! - **Visualization**: one scatter plot per metric, value against run number
//! - **Pipeline**: the load-clean-report sequence for one file
//!
//! # Example
//!
//! ```rust,no_run
//! use perf_visual::{pipeline, AnalysisConfig, PngDirectory};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AnalysisConfig::new().with_path_to_file("runs");
//!     let mut plots = PngDirectory::new("plots");
//!     let mut out = std::io::stdout();
//!
//!     if let Some(analysis) = pipeline::run(&config, &mut out, &mut plots)? {
//!         println!("{} metrics", analysis.description.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod table;
pub mod visualization;

// Re-export commonly used types
pub use cleaner::UnitCleaner;
pub use config::AnalysisConfig;
pub use error::{CleanError, Error, Result};
pub use loader::ResultsLoader;
pub use output::{CsvExporter, ExcelExporter, JsonExporter};
pub use pipeline::Analysis;
pub use stats::{describe, Description, Summary};
pub use table::{Column, Table};
pub use visualization::{PlotTarget, PngDirectory, ScatterPlot};
