//! Stripping unit labels and parsing cell values

use crate::config::DEFAULT_UNIT;
use crate::error::{CleanError, Error, Result};
use crate::table::{Column, Table};

/// Turns `"<number> <unit>"` cells into numbers
#[derive(Debug, Clone)]
pub struct UnitCleaner {
    unit: String,
}

impl Default for UnitCleaner {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl UnitCleaner {
    /// Create a cleaner for the given unit keyword
    pub fn new(unit: impl Into<String>) -> Result<Self> {
        let unit = unit.into();
        if unit.is_empty() {
            return Err(Error::Config("unit keyword must not be empty".to_string()));
        }
        Ok(Self { unit })
    }

    /// The unit keyword this cleaner strips
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Parse one cell: everything before the first unit keyword, trimmed
    pub fn clean_cell(&self, raw: &str) -> std::result::Result<f64, CleanError> {
        let (number, _) = raw
            .split_once(self.unit.as_str())
            .ok_or_else(|| CleanError::MissingUnit {
                value: raw.to_string(),
                unit: self.unit.clone(),
            })?;

        let text = number.trim();
        text.parse::<f64>().map_err(|_| CleanError::NotNumeric {
            text: text.to_string(),
        })
    }

    /// Clean every present cell. The first failure aborts the pass.
    pub fn clean(&self, table: &Table<String>) -> Result<Table<f64>> {
        let labels = table.run_labels();
        let mut cleaned = Table::new(labels.to_vec());

        for column in table.iter() {
            let cells = column
                .cells
                .iter()
                .enumerate()
                .map(|(run, cell)| match cell {
                    Some(raw) => self
                        .clean_cell(raw)
                        .map(Some)
                        .map_err(|source| Error::Clean {
                            column: column.name.clone(),
                            run: labels[run].clone(),
                            source,
                        }),
                    None => Ok(None),
                })
                .collect::<Result<Vec<_>>>()?;

            tracing::debug!("Cleaned column {:?}", column.name);
            cleaned.push_column(Column::new(column.name.clone(), cells));
        }

        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ResultsLoader;

    #[test]
    fn test_clean_cell() {
        let cleaner = UnitCleaner::default();
        assert_eq!(cleaner.clean_cell("1.5 seconds").unwrap(), 1.5);
        assert_eq!(cleaner.clean_cell("  42seconds  ").unwrap(), 42.0);
        assert_eq!(cleaner.clean_cell("-3e-2 seconds").unwrap(), -0.03);
    }

    #[test]
    fn test_clean_cell_missing_unit() {
        let cleaner = UnitCleaner::default();
        assert_eq!(
            cleaner.clean_cell("1.5"),
            Err(CleanError::MissingUnit {
                value: "1.5".to_string(),
                unit: "seconds".to_string(),
            })
        );
        assert!(matches!(
            cleaner.clean_cell("1.5 ms"),
            Err(CleanError::MissingUnit { .. })
        ));
    }

    #[test]
    fn test_clean_cell_not_numeric() {
        let cleaner = UnitCleaner::default();
        assert_eq!(
            cleaner.clean_cell("fast seconds"),
            Err(CleanError::NotNumeric {
                text: "fast".to_string()
            })
        );
        assert!(matches!(
            cleaner.clean_cell(" seconds"),
            Err(CleanError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_custom_unit() {
        let cleaner = UnitCleaner::new("ms").unwrap();
        assert_eq!(cleaner.unit(), "ms");
        assert_eq!(cleaner.clean_cell("250 ms").unwrap(), 250.0);
    }

    #[test]
    fn test_empty_unit_rejected() {
        assert!(matches!(UnitCleaner::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn test_clean_table() {
        let raw = ResultsLoader::from_str(
            r#"[{"metric_a": "1.5 seconds", "metric_b": "2.0 seconds"},
                {"metric_a": "2.5 seconds", "metric_b": "3.0 seconds"}]"#,
        )
        .unwrap();

        let table = UnitCleaner::default().clean(&raw).unwrap();
        assert_eq!(table.column_names(), vec!["metric_a", "metric_b"]);
        assert_eq!(table.row(0), Some(vec![Some(&1.5), Some(&2.0)]));
        assert_eq!(table.row(1), Some(vec![Some(&2.5), Some(&3.0)]));
    }

    #[test]
    fn test_clean_table_keeps_missing_cells() {
        let raw = ResultsLoader::from_str(r#"[{"a": "1 seconds"}, {"a": null}]"#).unwrap();
        let table = UnitCleaner::default().clean(&raw).unwrap();
        assert_eq!(table.column("a").unwrap().cells, vec![Some(1.0), None]);
    }

    #[test]
    fn test_clean_table_reports_failing_cell() {
        let raw = ResultsLoader::from_str(
            r#"[{"a": "1 seconds", "b": "2 seconds"}, {"a": "3 seconds", "b": "4"}]"#,
        )
        .unwrap();

        match UnitCleaner::default().clean(&raw).unwrap_err() {
            Error::Clean { column, run, source } => {
                assert_eq!(column, "b");
                assert_eq!(run, "1");
                assert!(matches!(source, CleanError::MissingUnit { .. }));
            }
            other => panic!("Expected Clean error, got {other:?}"),
        }
    }
}
