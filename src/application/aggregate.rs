use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{
    error::AggregationError,
    raw_table::{Cell, Column, RawTable},
    summary::SummaryTable,
    value_objects::{ColumnRoleMap, Role},
};

/// Sum quantities per SKU.
///
/// - both resolved columns must exist in `table`;
/// - quantity cells that are blank or non-numeric count as 0;
/// - negative quantities reduce their SKU's total, which is floored at 0;
/// - rows with a blank or empty SKU are skipped;
/// - grouping is on exact SKU text, and the output is sorted by it.
///
/// Pure: the same `(table, roles)` always yields the same summary.
pub fn aggregate(table: &RawTable, roles: &ColumnRoleMap) -> Result<SummaryTable, AggregationError> {
    let sku_col = require(table, roles, Role::Sku)?;
    let qty_col = require(table, roles, Role::Quantity)?;

    let mut sums: BTreeMap<String, i64> = BTreeMap::new();
    let mut skipped = 0usize;

    for (sku, qty) in sku_col.cells.iter().zip(qty_col.cells.iter()) {
        let text = match sku.as_text() {
            Some(text) if !sku.is_blank() => text,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let entry = sums.entry(text.into_owned()).or_insert(0);
        *entry = entry.saturating_add(coerce_quantity(qty));
    }

    let totals: BTreeMap<String, u64> = sums
        .into_iter()
        .map(|(sku, sum)| (sku, u64::try_from(sum).unwrap_or(0)))
        .collect();

    debug!(
        rows = table.row_count(),
        skipped,
        skus = totals.len(),
        "aggregated quantities"
    );
    Ok(SummaryTable::from_totals(totals))
}

fn require<'a>(
    table: &'a RawTable,
    roles: &ColumnRoleMap,
    role: Role,
) -> Result<&'a Column, AggregationError> {
    let name = roles.get(role);
    table
        .column(name)
        .ok_or_else(|| AggregationError::MissingColumn {
            role,
            name: name.clone(),
        })
}

/// Signed numeric value of a quantity cell, truncated toward zero.
///
/// Anything that is not a finite number becomes 0 instead of failing the run.
pub fn coerce_quantity(cell: &Cell) -> i64 {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Cell::Blank => 0.0,
    };
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}
