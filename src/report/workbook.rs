use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::analysis::CohortAnalysis;
use crate::core::metric::Metric;
use crate::error::Result;

pub const WORKBOOK_FILE_NAME: &str = "regional_location_bstrap.xlsx";

/// Named draw columns of one sheet.
pub type SheetColumns = Vec<(String, Vec<f64>)>;

/// Sheet name, e.g. `UER_regional_all_location`.
pub fn sheet_name(metric: Metric, analysis: &CohortAnalysis) -> String {
    format!("{}_{}", metric.sheet_prefix(), analysis.cohort.tag())
}

/// One column per non-empty period, keyed `<region>_<cohort>_<period>`.
pub fn sheet_columns(metric: Metric, analysis: &CohortAnalysis) -> SheetColumns {
    let tag = analysis.cohort.tag();
    let mut columns = Vec::new();
    for (region, draws) in analysis.draws(metric) {
        for (label, period) in metric.period_labels().iter().zip(&draws.draws) {
            if period.is_empty() {
                continue;
            }
            let key = format!("{}_{}_{}", region.column_key(), tag, label);
            columns.push((key, period.clone()));
        }
    }
    columns
}

/// Raw bootstrap draws, one sheet per metric and cohort, laid out like a
/// data frame: an index column, then one column per series.
pub struct BootstrapWorkbook {
    workbook: Workbook,
    sheets: usize,
}

impl Default for BootstrapWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapWorkbook {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            sheets: 0,
        }
    }

    pub fn add_cohort(&mut self, analysis: &CohortAnalysis) -> Result<()> {
        for metric in [Metric::UrbanExpansion, Metric::Density] {
            let name = sheet_name(metric, analysis);
            let columns = sheet_columns(metric, analysis);
            self.add_sheet(&name, &columns)?;
        }
        Ok(())
    }

    pub fn add_sheet(&mut self, name: &str, columns: &SheetColumns) -> Result<()> {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(name)?;

        let rows = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        for row in 0..rows {
            sheet.write_number(row as u32 + 1, 0, row as f64)?;
        }
        for (col, (key, values)) in columns.iter().enumerate() {
            let col = col as u16 + 1;
            sheet.write_string(0, col, key)?;
            for (row, v) in values.iter().enumerate() {
                sheet.write_number(row as u32 + 1, col, *v)?;
            }
        }
        self.sheets += 1;
        debug!(sheet = name, columns = columns.len(), rows, "workbook sheet added");
        Ok(())
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets
    }

    pub fn save(mut self, path: &Path) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}
