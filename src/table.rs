//! Benchmark table: one column per metric, one row per run

/// One metric across all runs
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    /// Metric name
    pub name: String,
    /// One cell per run; `None` where the run did not record this metric
    pub cells: Vec<Option<T>>,
}

impl<T> Column<T> {
    /// Create a column from its name and cells
    pub fn new(name: impl Into<String>, cells: Vec<Option<T>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Iterate over `(run_index, value)` for present cells
    pub fn present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.as_ref().map(|v| (idx, v)))
    }
}

/// Benchmark results, columns in source order and rows in run order
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    run_labels: Vec<String>,
    columns: Vec<Column<T>>,
}

impl<T> Table<T> {
    /// Create an empty table with the given run labels
    pub fn new(run_labels: Vec<String>) -> Self {
        Self {
            run_labels,
            columns: Vec::new(),
        }
    }

    /// Append a column, padding or truncating it to the number of runs
    pub fn push_column(&mut self, mut column: Column<T>) {
        column.cells.resize_with(self.run_labels.len(), || None);
        self.columns.push(column);
    }

    /// Number of runs
    pub fn runs(&self) -> usize {
        self.run_labels.len()
    }

    /// Label of each run, in row order
    pub fn run_labels(&self) -> &[String] {
        &self.run_labels
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no metrics
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over the columns in source order
    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    /// Metric names in source order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by metric name
    pub fn column(&self, name: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cells of one run, in column order
    pub fn row(&self, run: usize) -> Option<Vec<Option<&T>>> {
        if run >= self.runs() {
            return None;
        }
        Some(self.columns.iter().map(|c| c.cells[run].as_ref()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_column_pads_to_runs() {
        let mut table = Table::new(vec!["0".into(), "1".into(), "2".into()]);
        table.push_column(Column::new("a", vec![Some(1.0)]));

        let col = table.column("a").unwrap();
        assert_eq!(col.cells, vec![Some(1.0), None, None]);
        assert_eq!(table.runs(), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_row_access() {
        let mut table = Table::new(vec!["0".into(), "1".into()]);
        table.push_column(Column::new("a", vec![Some(1), Some(2)]));
        table.push_column(Column::new("b", vec![None, Some(4)]));

        assert_eq!(table.row(0), Some(vec![Some(&1), None]));
        assert_eq!(table.row(1), Some(vec![Some(&2), Some(&4)]));
        assert_eq!(table.row(2), None);
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_present_skips_missing() {
        let col = Column::new("a", vec![Some(1.5), None, Some(3.0)]);
        let present: Vec<_> = col.present().map(|(i, v)| (i, *v)).collect();
        assert_eq!(present, vec![(0, 1.5), (2, 3.0)]);
    }
}
