//! Excel export functionality

use crate::stats::{Description, Summary};
use crate::table::Table;
use anyhow::Result;
use rust_xlsxwriter::*;
use std::path::Path;

pub struct ExcelExporter;

impl ExcelExporter {
    /// Export statistics and cleaned data to an Excel workbook
    pub fn export(table: &Table<f64>, description: &Description, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();

        let summary_sheet = workbook.add_worksheet();
        summary_sheet.set_name("Summary")?;
        Self::write_summary(summary_sheet, description)?;

        let data_sheet = workbook.add_worksheet();
        data_sheet.set_name("Cleaned Data")?;
        Self::write_table(data_sheet, table)?;

        workbook.save(path)?;
        Ok(())
    }

    fn write_summary(sheet: &mut Worksheet, description: &Description) -> Result<()> {
        let bold = Format::new().set_bold();
        let number_format = Format::new().set_num_format("0.000000");

        sheet.write_with_format(0, 0, "Statistic", &bold)?;
        for (col, (name, _)) in description.iter().enumerate() {
            sheet.write_with_format(0, data_column(col)?, name, &bold)?;
        }

        for (row, label) in Summary::LABELS.iter().enumerate() {
            let row = row as u32 + 1;
            sheet.write(row, 0, *label)?;
            for (col, (_, summary)) in description.iter().enumerate() {
                let value = summary.values()[row as usize - 1];
                // NaN has no spreadsheet representation; leave the cell blank
                if !value.is_nan() {
                    sheet.write_with_format(row, data_column(col)?, value, &number_format)?;
                }
            }
        }

        sheet.autofit();
        Ok(())
    }

    fn write_table(sheet: &mut Worksheet, table: &Table<f64>) -> Result<()> {
        let bold = Format::new().set_bold();

        sheet.write_with_format(0, 0, "Run #", &bold)?;
        for (col, name) in table.column_names().into_iter().enumerate() {
            sheet.write_with_format(0, data_column(col)?, name, &bold)?;
        }

        for (run, label) in table.run_labels().iter().enumerate() {
            let row = run as u32 + 1;
            sheet.write(row, 0, label.as_str())?;
            for (col, column) in table.iter().enumerate() {
                if let Some(value) = column.cells[run] {
                    sheet.write(row, data_column(col)?, value)?;
                }
            }
        }

        Ok(())
    }
}

/// Worksheet column for the `idx`th metric; column 0 holds row labels
fn data_column(idx: usize) -> Result<ColNum> {
    let col = u16::try_from(idx + 1)?;
    if col > MAX_COLUMNS {
        anyhow::bail!("{} metrics exceed the worksheet column limit", idx + 1);
    }
    Ok(col)
}

const MAX_COLUMNS: u16 = 16_383;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;
    use tempfile::tempdir;

    #[test]
    fn test_export_workbook() {
        let mut table = Table::new(vec!["0".into(), "1".into()]);
        table.push_column(Column::new("load", vec![Some(1.5), Some(2.5)]));
        let description = Description::from_table(&table);

        let dir = tempdir().unwrap();
        let path = dir.path().join("results.xlsx");
        ExcelExporter::export(&table, &description, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_data_column_bounds() {
        assert_eq!(data_column(0).unwrap(), 1);
        assert_eq!(data_column(16_382).unwrap(), 16_383);
        assert!(data_column(16_383).is_err());
        assert!(data_column(70_000).is_err());
    }
}
