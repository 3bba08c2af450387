//! JSON export functionality

use crate::stats::Description;
use anyhow::Result;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Build the summary document, keyed by metric in column order.
    ///
    /// Statistics that are undefined (NaN) become `null`.
    pub fn summary_value(description: &Description) -> Result<Value> {
        let mut metrics = Map::new();
        for (name, summary) in description.iter() {
            metrics.insert(name.to_string(), serde_json::to_value(summary)?);
        }
        Ok(json!({ "metrics": metrics }))
    }

    /// Export statistics to a JSON file
    pub fn export_summary(description: &Description, path: &Path) -> Result<()> {
        let output = Self::summary_value(description)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &output)?;
        Ok(())
    }
}
