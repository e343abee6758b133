use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::application::{
    aggregate::aggregate, detect::detect, monitoring::PerfReport, resolve::resolve,
};
use crate::domain::{
    error::PipelineError, platform::PlatformTag, ports::TableSource, report::SummaryReport,
};

// ─── Summary Service ───

/// Runs detection, resolution and aggregation over one export.
///
/// Detection reads the source as-is. When the detected platform needs a
/// different header row the source is read a second time at that offset;
/// the column resolver and aggregator only ever see the second table.
pub struct SummaryService {
    report: Rc<RefCell<PerfReport>>,
}

impl SummaryService {
    pub fn new(report: Rc<RefCell<PerfReport>>) -> Self {
        Self { report }
    }

    pub fn run(&self, source: &dyn TableSource) -> Result<SummaryReport, PipelineError> {
        let name = source.name();

        let first = source.read(0).map_err(PipelineError::FileProcessing)?;
        let platform = PerfReport::time(&self.report, "detect", name, 0, || {
            detect(&first.header())
        });

        if platform == PlatformTag::Unknown {
            warn!(source = name, header = ?first.header(), "format not recognized");
            return Err(PipelineError::UnrecognizedFormat);
        }
        info!(source = name, platform = %platform, "platform detected");

        let offset = platform.header_row_offset();
        let table = if offset == 0 {
            first
        } else {
            source
                .read(offset)
                .map_err(PipelineError::FileProcessing)?
        };

        let header = table.header();
        let roles = PerfReport::time(&self.report, "resolve", name, 0, || {
            resolve(platform, &header)
        })?;

        let summary = PerfReport::time(&self.report, "aggregate", name, table.row_count(), || {
            aggregate(&table, &roles)
        })?;

        info!(
            source = name,
            platform = %platform,
            rows = table.row_count(),
            skus = summary.unique_skus(),
            quantity = summary.total_quantity(),
            "summary built"
        );

        Ok(SummaryReport::new(
            platform,
            name,
            source.fingerprint(),
            table.row_count(),
            roles,
            summary,
        ))
    }
}
