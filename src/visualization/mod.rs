//! Visualization and plotting

pub mod scatter;

pub use scatter::ScatterPlot;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Destination for finished plots
pub trait PlotTarget {
    /// Show one plot
    fn show(&mut self, plot: &ScatterPlot) -> Result<()>;
}

/// Renders every plot as a PNG file in one directory
#[derive(Debug)]
pub struct PngDirectory {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths rendered so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File path for the next plot with this title
    pub fn next_path(&self, title: &str) -> PathBuf {
        self.dir
            .join(format!("{:02}_{}.png", self.written.len(), sanitize(title)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PlotTarget for PngDirectory {
    fn show(&mut self, plot: &ScatterPlot) -> Result<()> {
        if self.written.is_empty() {
            std::fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create plot directory: {}", self.dir.display())
            })?;
        }

        let path = self.next_path(&plot.title);
        plot.render_png(&path)
            .with_context(|| format!("Failed to render plot: {}", path.display()))?;
        tracing::info!("Rendered {:?} to {}", plot.title, path.display());

        self.written.push(path);
        Ok(())
    }
}

/// Make a metric name safe to use in a file name
fn sanitize(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        "metric".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("query_latency"), "query_latency");
        assert_eq!(sanitize("Insert 1k rows / s"), "Insert_1k_rows___s");
        assert_eq!(sanitize(""), "metric");
    }

    #[test]
    fn test_next_path_is_numbered() {
        let target = PngDirectory::new("plots");
        assert_eq!(
            target.next_path("load time"),
            Path::new("plots").join("00_load_time.png")
        );
        assert!(target.written().is_empty());
    }

    #[test]
    fn test_show_renders_numbered_pngs() {
        use crate::table::Column;
        use tempfile::tempdir;

        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("plots");
        let mut target = PngDirectory::new(&dir);

        let insert = Column::new("insert rows", vec![Some(1.5), Some(2.5), None]);
        let query = Column::new("query", vec![Some(0.25), Some(0.5), Some(0.75)]);
        target.show(&ScatterPlot::from_column(&insert, "seconds")).unwrap();
        target.show(&ScatterPlot::from_column(&query, "seconds")).unwrap();

        assert_eq!(
            target.written(),
            &[dir.join("00_insert_rows.png"), dir.join("01_query.png")]
        );
        for path in target.written() {
            let metadata = std::fs::metadata(path).unwrap();
            assert!(metadata.len() > 0);
        }
    }
}
