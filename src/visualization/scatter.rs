//! Per-metric scatter plots of value against run number

use crate::table::Column;
use anyhow::Result;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Scatter plot of one metric, ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// Number of runs in the table, including runs without a value
    pub runs: usize,
    /// `(run_index, value)` for every present cell
    pub points: Vec<(f64, f64)>,
}

impl ScatterPlot {
    /// Build the plot for one cleaned column
    pub fn from_column(column: &Column<f64>, unit: &str) -> Self {
        Self {
            title: column.name.clone(),
            x_desc: "Run #".to_string(),
            y_desc: format!("Time (in {})", unit),
            runs: column.cells.len(),
            points: column
                .present()
                .map(|(run, value)| (run as f64, *value))
                .collect(),
        }
    }

    /// Horizontal extent: every run index with half a run either side
    pub fn x_range(&self) -> Range<f64> {
        -0.5..(self.runs.max(1) as f64 - 0.5)
    }

    /// Vertical extent: value range with 10% headroom
    pub fn y_range(&self) -> Range<f64> {
        let min = self
            .points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max);

        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        let span = max - min;
        let pad = if span.abs() < f64::EPSILON {
            (min.abs() * 0.1).max(1.0)
        } else {
            span * 0.1
        };

        let (lo, hi) = (min - pad, max + pad);
        if lo.is_finite() && hi.is_finite() {
            lo..hi
        } else if span.is_finite() && span > 0.0 {
            // Headroom would overflow; plotters cannot mesh an infinite range
            min..max
        } else {
            0.0..1.0
        }
    }

    /// Draw the plot on any plotters drawing area
    pub fn draw<DB>(&self, root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 40))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(self.x_range(), self.y_range())?;

        // One tick per run, capped so long histories stay legible
        let x_labels = self.runs.clamp(1, 50);

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .x_labels(x_labels)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;

        chart.draw_series(
            self.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 5, BLUE.filled())),
        )?;

        root.present()?;
        Ok(())
    }

    /// Render the plot to a PNG file
    pub fn render_png(&self, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
        self.draw(&root)
    }
}
