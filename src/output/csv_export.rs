//! CSV export functionality

use crate::stats::{Description, Summary};
use crate::table::Table;
use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Export the cleaned table, one row per run
    pub fn export(table: &Table<f64>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        let mut header = vec!["run"];
        header.extend(table.column_names());
        wtr.write_record(&header)?;

        for (run, label) in table.run_labels().iter().enumerate() {
            let mut record = vec![label.clone()];
            for column in table.iter() {
                record.push(column.cells[run].map(|v| v.to_string()).unwrap_or_default());
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Export statistics, one row per statistic and one column per metric
    pub fn export_summary(description: &Description, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        let mut header = vec!["statistic"];
        header.extend(description.iter().map(|(name, _)| name));
        wtr.write_record(&header)?;

        let values: Vec<[f64; 8]> = description.iter().map(|(_, s)| s.values()).collect();
        for (row, label) in Summary::LABELS.iter().enumerate() {
            let mut record = vec![label.to_string()];
            record.extend(values.iter().map(|v| v[row].to_string()));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
