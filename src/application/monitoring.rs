use crate::domain::ports::TableSource;
use crate::domain::{raw_table::RawTable, value_objects::Fingerprint};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{info, instrument};

// ─── PerfReport ──────────────────────────────────────────────────────────────

/// A single timed operation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OpTiming {
    /// Operation name: "read_table", "detect", "resolve" or "aggregate".
    pub operation: &'static str,
    /// Source the operation worked on.
    pub source: String,
    /// Elapsed wall time in milliseconds.
    pub duration_ms: u128,
    /// Number of rows involved (read or aggregated).
    pub rows: usize,
}

/// Accumulated performance timings for a single pipeline run.
///
/// Runs are single-threaded, so the report is shared through `Rc<RefCell<_>>`.
/// After the run, pass to [`crate::presentation::cli_summary::print_perf_summary`]
/// to render a human-readable table.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct PerfReport {
    pub timings: Vec<OpTiming>,
    pub total_rows_read: usize,
    pub total_ms: u128,
}

impl PerfReport {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn record(report: &Rc<RefCell<Self>>, timing: OpTiming) {
        let mut r = report.borrow_mut();
        r.total_ms += timing.duration_ms;
        if timing.operation == "read_table" {
            r.total_rows_read += timing.rows;
        }
        r.timings.push(timing);
    }

    /// Run `f`, record its wall time under `operation`, and pass its result through.
    pub fn time<T>(
        report: &Rc<RefCell<Self>>,
        operation: &'static str,
        source: &str,
        rows: usize,
        f: impl FnOnce() -> T,
    ) -> T {
        let start = Instant::now();
        let out = f();
        Self::record(
            report,
            OpTiming {
                operation,
                source: source.to_string(),
                duration_ms: start.elapsed().as_millis(),
                rows,
            },
        );
        out
    }
}

// ─── MonitoringTableSource ───────────────────────────────────────────────────

/// Decorator: wraps any `TableSource`, measures wall time per `read` call,
/// and appends the result to the shared `PerfReport`.
pub struct MonitoringTableSource<'a> {
    inner: &'a dyn TableSource,
    report: Rc<RefCell<PerfReport>>,
}

impl<'a> MonitoringTableSource<'a> {
    pub fn new(inner: &'a dyn TableSource, report: Rc<RefCell<PerfReport>>) -> Self {
        Self { inner, report }
    }
}

impl TableSource for MonitoringTableSource<'_> {
    #[instrument(
        name = "read_table",
        skip(self),
        fields(source = %self.inner.name()),
        level = "info"
    )]
    fn read(&self, header_row_offset: usize) -> Result<RawTable> {
        let start = Instant::now();
        let table = self.inner.read(header_row_offset)?;
        let duration_ms = start.elapsed().as_millis();

        info!(
            source = self.inner.name(),
            header_row_offset,
            rows = table.row_count(),
            columns = table.columns().len(),
            duration_ms,
            "read_table completed"
        );

        PerfReport::record(
            &self.report,
            OpTiming {
                operation: "read_table",
                source: self.inner.name().to_string(),
                duration_ms,
                rows: table.row_count(),
            },
        );

        Ok(table)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn fingerprint(&self) -> Fingerprint {
        self.inner.fingerprint()
    }
}
