//! Descriptive statistics per metric

use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of present values
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub q50: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    /// Row labels, in display order
    pub const LABELS: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// Values in the same order as [`Summary::LABELS`]
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Compute statistics over `values`, ignoring NaN
pub fn describe(values: &[f64]) -> Summary {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    if count == 0 {
        return Summary {
            count,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = if count > 1 {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    } else {
        f64::NAN
    };

    Summary {
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.50),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Quantile of sorted data, interpolating linearly between closest ranks
pub fn quantile(sorted_data: &[f64], q: f64) -> f64 {
    if sorted_data.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted_data.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted_data[lo] + (sorted_data[hi] - sorted_data[lo]) * frac
}

/// Statistics for every metric of a table, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    entries: Vec<(String, Summary)>,
}

impl Description {
    /// Describe each column of a cleaned table
    pub fn from_table(table: &Table<f64>) -> Self {
        let entries = table
            .iter()
            .map(|column| {
                let values: Vec<f64> = column.present().map(|(_, v)| *v).collect();
                (column.name.clone(), describe(&values))
            })
            .collect();
        Self { entries }
    }

    /// Statistics for one metric
    pub fn get(&self, name: &str) -> Option<&Summary> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Iterate over `(metric, summary)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Summary)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = Summary::LABELS.iter().map(|l| l.len()).max().unwrap_or(0);

        // Pre-format so each column can be sized to its widest cell
        let formatted: Vec<(&str, Vec<String>)> = self
            .entries
            .iter()
            .map(|(name, summary)| {
                let cells = summary.values().iter().map(|v| format_value(*v)).collect();
                (name.as_str(), cells)
            })
            .collect();
        let widths: Vec<usize> = formatted
            .iter()
            .map(|(name, cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for ((name, _), width) in formatted.iter().zip(widths.iter().copied()) {
            write!(f, "  {:>width$}", name)?;
        }
        writeln!(f)?;

        for (row, label) in Summary::LABELS.iter().enumerate() {
            write!(f, "{:<label_width$}", label)?;
            for ((_, cells), width) in formatted.iter().zip(widths.iter().copied()) {
                write!(f, "  {:>width$}", cells[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_describe() {
        let summary = describe(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.count, 4);
        assert!(approx_eq(summary.mean, 2.5));
        assert!(approx_eq(summary.std, (5.0f64 / 3.0).sqrt()));
        assert_eq!(summary.min, 1.0);
        assert!(approx_eq(summary.q25, 1.75));
        assert!(approx_eq(summary.q50, 2.5));
        assert!(approx_eq(summary.q75, 3.25));
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_describe_two_values_mean() {
        let summary = describe(&[1.5, 2.5]);
        assert!(approx_eq(summary.mean, (1.5 + 2.5) / 2.0));
    }

    #[test]
    fn test_describe_single_value() {
        let summary = describe(&[7.0]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 7.0);
        assert!(summary.std.is_nan());
        assert_eq!(summary.q25, 7.0);
        assert_eq!(summary.max, 7.0);
    }

    #[test]
    fn test_describe_empty() {
        let summary = describe(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.min.is_nan());
    }

    #[test]
    fn test_quantile_interpolation() {
        let data = [10.0, 20.0, 30.0];
        assert_eq!(quantile(&data, 0.0), 10.0);
        assert_eq!(quantile(&data, 0.5), 20.0);
        assert_eq!(quantile(&data, 0.75), 25.0);
        assert_eq!(quantile(&data, 1.0), 30.0);
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_description_skips_missing_cells() {
        let mut table = Table::new(vec!["0".into(), "1".into(), "2".into()]);
        table.push_column(Column::new("a", vec![Some(1.0), None, Some(3.0)]));

        let description = Description::from_table(&table);
        let summary = description.get("a").unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn test_display_column_order() {
        let mut table = Table::new(vec!["0".into(), "1".into()]);
        table.push_column(Column::new("zeta", vec![Some(1.0), Some(2.0)]));
        table.push_column(Column::new("alpha", vec![Some(3.0), Some(4.0)]));

        let rendered = Description::from_table(&table).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);

        let header = lines[0];
        assert!(header.find("zeta").unwrap() < header.find("alpha").unwrap());
        assert!(lines[1].starts_with("count"));
        assert!(lines[1].contains("2.000000"));
        assert!(lines[2].starts_with("mean"));
        assert!(lines[2].contains("1.500000"));
        assert!(lines[2].contains("3.500000"));
        assert!(lines[8].starts_with("max"));
    }

    #[test]
    fn test_display_nan() {
        let mut table = Table::new(vec!["0".into()]);
        table.push_column(Column::new("a", vec![Some(1.0)]));

        let rendered = Description::from_table(&table).to_string();
        let std_line = rendered.lines().find(|l| l.starts_with("std")).unwrap();
        assert!(std_line.ends_with("NaN"));
    }
}
