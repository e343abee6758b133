use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::domain::fingerprint::fingerprint;
use crate::domain::ports::TableSource;
use crate::domain::raw_table::{Cell, RawTable};
use crate::domain::value_objects::Fingerprint;

/// An uploaded spreadsheet held in memory.
///
/// Every `read` parses the bytes from scratch, so the same upload can be
/// read at different header offsets. The container format (xlsx, xls, xlsb,
/// ods) is sniffed from the content, not the file name.
pub struct WorkbookSource {
    name: String,
    bytes: Vec<u8>,
}

impl WorkbookSource {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Load a spreadsheet file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_bytes(name, bytes))
    }
}

impl TableSource for WorkbookSource {
    fn read(&self, header_row_offset: usize) -> Result<RawTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(self.bytes.as_slice()))
            .with_context(|| format!("Failed to open spreadsheet: {}", self.name))?;

        let range = workbook
            .worksheet_range_at(0)
            .context("Spreadsheet has no sheets")?
            .with_context(|| format!("Failed to read first sheet of {}", self.name))?;

        let mut rows = range.rows().skip(header_row_offset);
        let Some(header_row) = rows.next() else {
            debug!(source = %self.name, header_row_offset, "no header row, empty table");
            return Ok(RawTable::default());
        };

        let header: Vec<String> = header_row
            .iter()
            .map(|c| cell_from(c).as_text().map(|s| s.into_owned()).unwrap_or_default())
            .collect();
        let data: Vec<Vec<Cell>> = rows
            .map(|row| row.iter().map(cell_from).collect())
            .collect();

        debug!(
            source = %self.name,
            header_row_offset,
            columns = header.len(),
            rows = data.len(),
            "sheet parsed"
        );
        Ok(RawTable::from_rows(header, data))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fingerprint(&self) -> Fingerprint {
        fingerprint(&self.bytes)
    }
}

/// Reduce a calamine cell to text, number or blank.
fn cell_from(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Blank,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        other => Cell::Text(other.to_string()),
    }
}
