use crate::domain::{raw_table::RawTable, report::SummaryReport, value_objects::Fingerprint};
use anyhow::Result;

/// Port: access to the parsed export (implemented by WorkbookSource)
///
/// The same source may be read more than once: the platform decides the
/// header row, so detection reads at offset 0 and TikTok is re-read at 1.
pub trait TableSource {
    /// Parse the first sheet, skipping `header_row_offset` rows before the
    /// header row.
    fn read(&self, header_row_offset: usize) -> Result<RawTable>;

    /// Name used in reports and log lines (usually the file name).
    fn name(&self) -> &str;

    /// Fingerprint of the underlying bytes, empty when unknown.
    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::default()
    }
}

/// Port: output rendering (implemented by HtmlWriter, XlsxWriter, JsonWriter)
pub trait OutputWriter {
    /// Renders the report to bytes (HTML, JSON, XLSX, etc.)
    fn render(&self, report: &SummaryReport) -> Result<Vec<u8>>;
    /// Extension of the produced file (e.g. "html", "xlsx", "json")
    fn extension(&self) -> &'static str;
}
