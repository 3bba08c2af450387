//! Load, clean, report and plot one results file

use crate::cleaner::UnitCleaner;
use crate::config::AnalysisConfig;
use crate::loader::ResultsLoader;
use crate::stats::Description;
use crate::table::Table;
use crate::visualization::{PlotTarget, ScatterPlot};
use anyhow::Result;
use std::io::Write;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Cleaned numeric table
    pub table: Table<f64>,
    /// Statistics per metric
    pub description: Description,
}

/// Run the whole analysis for `config`.
///
/// Writes the statistics table to `out` and hands one plot per metric to
/// `target`. Returns `Ok(None)` without touching either when the results
/// file does not exist.
pub fn run<W, P>(config: &AnalysisConfig, out: &mut W, target: &mut P) -> Result<Option<Analysis>>
where
    W: Write + ?Sized,
    P: PlotTarget + ?Sized,
{
    let path = config.benchmark_file();

    let Some(raw) = ResultsLoader::load(&path)? else {
        return Ok(None);
    };

    let cleaner = UnitCleaner::new(config.unit.clone())?;

    let table = cleaner.clean(&raw)?;
    let description = Description::from_table(&table);
    tracing::info!("Computed statistics for {} metrics", description.len());

    write!(out, "{}", description)?;
    out.flush()?;

    for column in table.iter() {
        let plot = ScatterPlot::from_column(column, cleaner.unit());
        tracing::debug!("Plotting {} points for {:?}", plot.points.len(), plot.title);
        target.show(&plot)?;
    }

    Ok(Some(Analysis { table, description }))
}
