//! Loading benchmark results from JSON
//!
//! Three layouts are accepted:
//!
//! - records: `[{"metric": "1.5 seconds", ...}, ...]`, one object per run
//! - columns: `{"metric": {"0": "1.5 seconds", ...}, ...}`, keyed by run label
//! - column lists: `{"metric": ["1.5 seconds", ...], ...}`, indexed by position

use crate::error::{Error, Result};
use crate::table::{Column, Table};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads benchmark result files into a raw string table
pub struct ResultsLoader;

impl ResultsLoader {
    /// Load the results file at `path`.
    ///
    /// Returns `Ok(None)` when `path` is not an existing file.
    pub fn load(path: &Path) -> Result<Option<Table<String>>> {
        if !path.is_file() {
            tracing::debug!("No results file at {}, skipping", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let table = Self::from_str(&content)?;
        tracing::info!(
            "Loaded {} metrics over {} runs from {}",
            table.len(),
            table.runs(),
            path.display()
        );
        Ok(Some(table))
    }

    /// Parse results from a JSON document
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Table<String>> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a table from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Table<String>> {
        match value {
            Value::Array(records) => Self::from_records(records),
            Value::Object(map) => {
                if map.values().all(Value::is_object) {
                    Self::from_columns(map)
                } else if map.values().all(Value::is_array) {
                    Self::from_column_lists(map)
                } else {
                    Err(Error::UnsupportedShape(
                        "object values must be all objects or all arrays".to_string(),
                    ))
                }
            }
            other => Err(Error::UnsupportedShape(format!(
                "expected an array or object, found {}",
                json_type(&other)
            ))),
        }
    }

    fn from_records(records: Vec<Value>) -> Result<Table<String>> {
        let runs = records.len();
        let mut names: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut cells: Vec<Vec<Option<String>>> = Vec::new();

        for (run, record) in records.into_iter().enumerate() {
            let fields = match record {
                Value::Object(fields) => fields,
                other => {
                    return Err(Error::UnsupportedShape(format!(
                        "record {} is {}, expected an object",
                        run,
                        json_type(&other)
                    )))
                }
            };

            for (name, value) in fields {
                let idx = match positions.get(&name) {
                    Some(&idx) => idx,
                    None => {
                        let idx = names.len();
                        positions.insert(name.clone(), idx);
                        names.push(name.clone());
                        cells.push(vec![None; runs]);
                        idx
                    }
                };
                cells[idx][run] = cell_text(value, &name, &run.to_string())?;
            }
        }

        let mut table = Table::new((0..runs).map(|run| run.to_string()).collect());
        for (name, column_cells) in names.into_iter().zip(cells) {
            table.push_column(Column::new(name, column_cells));
        }
        Ok(table)
    }

    fn from_columns(map: Map<String, Value>) -> Result<Table<String>> {
        // Run labels in order of first appearance across all columns
        let mut labels: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for value in map.values() {
            if let Value::Object(entries) = value {
                for label in entries.keys() {
                    if !positions.contains_key(label) {
                        positions.insert(label.clone(), labels.len());
                        labels.push(label.clone());
                    }
                }
            }
        }

        let runs = labels.len();
        let mut table = Table::new(labels);
        for (name, value) in map {
            let Value::Object(entries) = value else {
                continue;
            };
            let mut cells = vec![None; runs];
            for (label, cell) in entries {
                let run = positions[&label];
                cells[run] = cell_text(cell, &name, &label)?;
            }
            table.push_column(Column::new(name, cells));
        }
        Ok(table)
    }

    fn from_column_lists(map: Map<String, Value>) -> Result<Table<String>> {
        let runs = map
            .values()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut table = Table::new((0..runs).map(|run| run.to_string()).collect());
        for (name, value) in map {
            let Value::Array(items) = value else {
                continue;
            };
            let cells = items
                .into_iter()
                .enumerate()
                .map(|(run, cell)| cell_text(cell, &name, &run.to_string()))
                .collect::<Result<Vec<_>>>()?;
            table.push_column(Column::new(name, cells));
        }
        Ok(table)
    }
}

/// Convert one JSON cell; `null` is a missing cell
fn cell_text(value: Value, column: &str, run: &str) -> Result<Option<String>> {
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => Err(Error::NonStringCell {
            column: column.to_string(),
            run: run.to_string(),
            found: json_type(&other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
