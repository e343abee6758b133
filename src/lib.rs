use std::path::Path;
use std::rc::Rc;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// ─── Log level ────────────────────────────────────────────────────────────────

/// Controls the verbosity of skusum's internal tracing output.
///
/// Pass to [`init_tracing`] before running the pipeline.
///
/// | Variant | `tracing` level | When to use                               |
/// |---------|-----------------|-------------------------------------------|
/// | `Error` | `error`         | `--quiet` / scripting                     |
/// | `Info`  | `info`          | Default: platform, row counts, timings    |
/// | `Debug` | `debug`         | `--verbose`: matched indicators, columns  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Info,
    Debug,
}

/// Initialise the global `tracing` subscriber for skusum.
///
/// This is a convenience wrapper around `tracing_subscriber`. It respects
/// `RUST_LOG` when set, falling back to `level` otherwise. Output goes to
/// stderr so the summary on stdout stays clean.
///
/// Call this **once** at application startup. Library consumers who manage
/// their own subscriber should skip this and configure tracing themselves.
///
/// Only available when the `cli` feature is enabled (pulls in
/// `tracing-subscriber`).
#[cfg(feature = "cli")]
pub fn init_tracing(level: LogLevel) {
    use tracing_subscriber::fmt::format::FmtSpan;

    let default_filter = match level {
        LogLevel::Error => "skusum=error",
        LogLevel::Info  => "skusum=info",
        LogLevel::Debug => "skusum=debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

// ─── Public API Facade ───

pub use application::aggregate::{aggregate, coerce_quantity};
pub use application::detect::detect;
pub use application::monitoring::PerfReport;
pub use application::resolve::{resolve, rules_for, ColumnRule};
pub use domain::error::{AggregationError, EditError, PipelineError, ResolutionError};
pub use domain::fingerprint::fingerprint;
pub use domain::platform::PlatformTag;
pub use domain::ports::{OutputWriter, TableSource};
pub use domain::raw_table::{Cell, Column, RawTable};
pub use domain::report::{SummaryReport, Totals};
pub use domain::summary::{SummaryRow, SummaryTable};
pub use domain::value_objects::{ColumnName, ColumnRoleMap, Fingerprint, Role};
pub use infrastructure::config::{AppConfig, OutputConfig, ReportConfig};
pub use infrastructure::workbook::WorkbookSource;

use crate::application::monitoring::MonitoringTableSource;
use crate::application::pipeline::SummaryService;

// ─── Public entry points ───

/// Detect, resolve and aggregate one export.
///
/// Use [`summarize_with_timing`] if you also want a performance report.
pub fn summarize(source: &dyn TableSource) -> Result<SummaryReport, PipelineError> {
    let (report, _) = summarize_with_timing(source)?;
    Ok(report)
}

/// Same as [`summarize`], plus a [`PerfReport`] with per-stage timings.
pub fn summarize_with_timing(
    source: &dyn TableSource,
) -> Result<(SummaryReport, PerfReport), PipelineError> {
    let perf = PerfReport::new();
    let monitored = MonitoringTableSource::new(source, Rc::clone(&perf));
    let report = SummaryService::new(Rc::clone(&perf)).run(&monitored)?;
    let timings = perf.borrow().clone();
    Ok((report, timings))
}

/// Summarize a spreadsheet file on disk.
///
/// A file that cannot be read at all is reported as
/// [`PipelineError::FileProcessing`].
pub fn summarize_path(path: impl AsRef<Path>) -> Result<SummaryReport, PipelineError> {
    let source = WorkbookSource::open(path).map_err(PipelineError::FileProcessing)?;
    summarize(&source)
}

/// Summarize an upload held in memory; `name` labels the report.
pub fn summarize_bytes(name: &str, bytes: Vec<u8>) -> Result<SummaryReport, PipelineError> {
    summarize(&WorkbookSource::from_bytes(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn xlsx(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn tiktok_export_end_to_end() {
        let bytes = xlsx(&[
            &["Order ID", "Seller SKU", "Quantity"],
            &[
                "Platform unique order ID.",
                "Seller sku input by the seller in the product system.",
                "SKU sold quantity in the order.",
            ],
            &["577001", "B10", "1"],
            &["577002", "A2", "4"],
            &["577003", "A1", "oops"],
            &["577004", "A2", "1"],
        ]);
        let (report, perf) =
            summarize_with_timing(&WorkbookSource::from_bytes("order_tiktok.xlsx", bytes.clone()))
                .unwrap();

        assert_eq!(report.platform, PlatformTag::TikTok);
        assert_eq!(report.source_rows, 4);
        assert_eq!(report.source_fingerprint, fingerprint(&bytes));
        let rows: Vec<(&str, u64)> = report
            .table
            .rows()
            .iter()
            .map(|r| (r.sku.as_str(), r.quantity))
            .collect();
        assert_eq!(rows, vec![("A1", 0), ("A2", 5), ("B10", 1)]);

        let reads = perf
            .timings
            .iter()
            .filter(|t| t.operation == "read_table")
            .count();
        assert_eq!(reads, 2);
    }

    #[test]
    fn shopee_export_end_to_end() {
        let bytes = xlsx(&[
            &["No. Pesanan", "Status Pesanan", "Nomor Referensi SKU", "Jumlah"],
            &["240901A", "Selesai", "KAOS-L", "2"],
            &["240901B", "Selesai", "", "7"],
            &["240901C", "Batal", "KAOS-L", "1"],
        ]);
        let report = summarize_bytes("order_shopee.xlsx", bytes).unwrap();

        assert_eq!(report.platform, PlatformTag::Shopee);
        assert_eq!(report.table.get("KAOS-L"), Some(3));
        assert_eq!(report.totals.unique_skus, 1);
    }

    #[test]
    fn unrelated_workbook_is_not_recognized() {
        let bytes = xlsx(&[&["Name", "Price"], &["Widget", "10"]]);
        let err = summarize_bytes("inventory.xlsx", bytes).unwrap_err();
        assert!(matches!(err, PipelineError::UnrecognizedFormat));
    }

    #[test]
    fn unreadable_file_is_a_file_processing_error() {
        let err = summarize_path("/no/such/export.xlsx").unwrap_err();
        assert!(matches!(err, PipelineError::FileProcessing(_)));
    }
}
