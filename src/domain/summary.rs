use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::error::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub sku: String,
    pub quantity: u64,
}

/// Per-SKU quantity totals for one upload.
///
/// Invariants, upheld by every constructor and mutator:
/// - no two rows share a SKU;
/// - rows are sorted ascending by raw SKU text;
/// - every SKU is non-empty.
///
/// The only edit offered is [`SummaryTable::set_quantity`], which changes a
/// quantity in place and never touches SKU identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Build from already-grouped totals. `BTreeMap` ordering gives the
    /// lexicographic sort; empty keys are dropped.
    pub fn from_totals(totals: BTreeMap<String, u64>) -> Self {
        let rows = totals
            .into_iter()
            .filter(|(sku, _)| !sku.is_empty())
            .map(|(sku, quantity)| SummaryRow { sku, quantity })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn get(&self, sku: &str) -> Option<u64> {
        self.position(sku).map(|idx| self.rows[idx].quantity)
    }

    /// Overwrite the quantity of an existing SKU.
    pub fn set_quantity(&mut self, sku: &str, quantity: u64) -> Result<(), EditError> {
        let idx = self
            .position(sku)
            .ok_or_else(|| EditError::UnknownSku(sku.to_string()))?;
        self.rows[idx].quantity = quantity;
        Ok(())
    }

    pub fn unique_skus(&self) -> usize {
        self.rows.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, sku: &str) -> Option<usize> {
        self.rows
            .binary_search_by(|r| r.sku.as_str().cmp(sku))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> SummaryTable {
        SummaryTable::from_totals(pairs.iter().map(|(s, q)| (s.to_string(), *q)).collect())
    }

    #[test]
    fn rows_are_sorted_and_unique() {
        let t = table(&[("B10", 1), ("A2", 1), ("A1", 1)]);
        let skus: Vec<&str> = t.rows().iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["A1", "A2", "B10"]);
    }

    #[test]
    fn empty_sku_is_dropped() {
        let t = table(&[("", 3), ("A", 2)]);
        assert_eq!(t.unique_skus(), 1);
        assert_eq!(t.get("A"), Some(2));
    }

    #[test]
    fn set_quantity_updates_existing_row() {
        let mut t = table(&[("A", 2), ("B", 5)]);
        t.set_quantity("B", 7).unwrap();
        assert_eq!(t.get("B"), Some(7));
        assert_eq!(t.total_quantity(), 9);
        assert_eq!(t.unique_skus(), 2);
    }

    #[test]
    fn set_quantity_rejects_unknown_sku() {
        let mut t = table(&[("A", 2)]);
        let err = t.set_quantity("Z", 1).unwrap_err();
        assert!(matches!(err, EditError::UnknownSku(ref s) if s == "Z"));
        assert_eq!(t.get("A"), Some(2));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let t = table(&[("abc", 1), ("ABC", 4)]);
        assert_eq!(t.get("abc"), Some(1));
        assert_eq!(t.get("ABC"), Some(4));
        assert_eq!(t.get("Abc"), None);
    }
}
