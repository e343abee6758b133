//! Spreadsheet export of a summary.

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::domain::{ports::OutputWriter, report::SummaryReport};

/// Header row of the exported sheet.
mod cols {
    pub const SKU: &str = "Seller SKU";
    pub const QUANTITY: &str = "Quantity";
}

/// Single-sheet workbook: `Seller SKU | Quantity`, one row per SKU.
pub struct XlsxWriter {
    pub sheet_name: String,
}

impl OutputWriter for XlsxWriter {
    fn render(&self, report: &SummaryReport) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.sheet_name)
            .with_context(|| format!("Invalid sheet name: {}", self.sheet_name))?;

        let bold = Format::new().set_bold();
        worksheet.write_string_with_format(0, 0, cols::SKU, &bold)?;
        worksheet.write_string_with_format(0, 1, cols::QUANTITY, &bold)?;

        for (idx, row) in report.table.rows().iter().enumerate() {
            let r = (idx + 1) as u32;
            worksheet.write_string(r, 0, &row.sku)?;
            worksheet.write_number(r, 1, row.quantity as f64)?;
        }
        worksheet.set_column_width(0, 30)?;

        workbook
            .save_to_buffer()
            .context("Failed to build xlsx export")
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
