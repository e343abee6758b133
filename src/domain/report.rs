use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::platform::PlatformTag;
use crate::domain::summary::SummaryTable;
use crate::domain::value_objects::{ColumnRoleMap, Fingerprint};

/// Everything the presentation layer needs to render one summary.
#[derive(Debug, Serialize, Clone)]
pub struct SummaryReport {
    pub report_id: String,
    pub created_at: String,
    pub platform: PlatformTag,
    /// File name (or caller-supplied label) of the export.
    pub source_name: String,
    /// Empty when the caller did not hand over the raw bytes.
    pub source_fingerprint: Fingerprint,
    /// Data rows in the table that was aggregated.
    pub source_rows: usize,
    pub roles: ColumnRoleMap,
    pub table: SummaryTable,
    pub totals: Totals,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub unique_skus: usize,
    pub total_quantity: u64,
}

impl Totals {
    pub fn of(table: &SummaryTable) -> Self {
        Self {
            unique_skus: table.unique_skus(),
            total_quantity: table.total_quantity(),
        }
    }
}

impl SummaryReport {
    pub fn new(
        platform: PlatformTag,
        source_name: &str,
        source_fingerprint: Fingerprint,
        source_rows: usize,
        roles: ColumnRoleMap,
        table: SummaryTable,
    ) -> Self {
        SummaryReport {
            report_id: format!(
                "sum_{}_{}",
                Utc::now().format("%Y%m%d_%H%M%S"),
                Uuid::new_v4().simple()
            ),
            created_at: Utc::now().to_rfc3339(),
            platform,
            source_name: source_name.to_string(),
            source_fingerprint,
            source_rows,
            roles,
            totals: Totals::of(&table),
            table,
        }
    }

    /// Apply a quantity correction and keep the cached totals in step.
    pub fn set_quantity(
        &mut self,
        sku: &str,
        quantity: u64,
    ) -> Result<(), crate::domain::error::EditError> {
        self.table.set_quantity(sku, quantity)?;
        self.totals = Totals::of(&self.table);
        Ok(())
    }
}
