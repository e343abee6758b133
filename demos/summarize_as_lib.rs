//! # skusum — library usage example
//!
//! Shows three common patterns for consuming skusum as a Rust library:
//!
//! 1. **From a file** — simplest, mirrors the CLI
//! 2. **From an in-memory table** — plug in your own loader via `TableSource`
//! 3. **Step by step** — call detect / resolve / aggregate yourself
//!
//! Run with an export file:
//!   cargo run --example summarize_as_lib -- order_shopee.xlsx
//!
//! Run with the built-in sample table:
//!   cargo run --example summarize_as_lib

use anyhow::Result;
use std::path::Path;
use skusum::{
    aggregate, detect,
    presentation::writers::{write_to_file, writer_for},
    resolve, AppConfig, Cell, PlatformTag, RawTable, SummaryReport, TableSource,
};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some(path) => from_file(path),
        None => from_memory(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern 1 — summarize a spreadsheet file (same as the CLI does internally)
// ─────────────────────────────────────────────────────────────────────────────
fn from_file(path: &str) -> Result<()> {
    println!("=== Pattern 1: from file ({path}) ===\n");

    let cfg = AppConfig::default();
    let report = skusum::summarize_path(path)?;

    let html = writer_for("html", &cfg)
        .ok_or_else(|| anyhow::anyhow!("html writer not registered"))?;
    let written = write_to_file(&*html, &report, Path::new("./output"), &cfg.output.file_stem)?;
    println!("Print view written: {}\n", written.display());

    inspect(&report);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern 2 — any loader works as long as it implements `TableSource`.
// Here a TikTok-shaped sheet lives in memory; the pipeline re-reads it one
// row lower after detection, exactly as it would a real file.
// ─────────────────────────────────────────────────────────────────────────────
struct InMemorySheet(Vec<Vec<&'static str>>);

impl TableSource for InMemorySheet {
    fn read(&self, header_row_offset: usize) -> Result<RawTable> {
        let mut rows = self.0.iter().skip(header_row_offset);
        let header = rows
            .next()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();
        let data = rows
            .map(|r| r.iter().map(|s| Cell::from(*s)).collect())
            .collect();
        Ok(RawTable::from_rows(header, data))
    }

    fn name(&self) -> &str {
        "in-memory tiktok sheet"
    }
}

fn from_memory() -> Result<()> {
    println!("=== Pattern 2: in-memory source ===\n");

    let sheet = InMemorySheet(vec![
        vec!["Order ID", "Seller SKU", "Quantity"],
        vec![
            "Platform unique order ID.",
            "Seller sku input by the seller in the product system.",
            "SKU sold quantity in the order.",
        ],
        vec!["5770001", "KAOS-HITAM-L", "2"],
        vec!["5770002", "KAOS-PUTIH-M", "1"],
        vec!["5770003", "KAOS-HITAM-L", "3"],
        vec!["5770004", "", "9"],
    ]);

    let report = skusum::summarize(&sheet)?;
    inspect(&report);

    step_by_step(&sheet)
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern 3 — drive the three stages yourself, e.g. to show the detected
// platform before committing to a full run.
// ─────────────────────────────────────────────────────────────────────────────
fn step_by_step(source: &dyn TableSource) -> Result<()> {
    println!("\n=== Pattern 3: step by step ===\n");

    let first = source.read(0)?;
    let platform = detect(&first.header());
    println!("detected : {platform}");
    if platform == PlatformTag::Unknown {
        println!("not an order export, stopping");
        return Ok(());
    }

    let table = source.read(platform.header_row_offset())?;
    let roles = resolve(platform, &table.header())?;
    println!("sku col  : {}", roles.sku);
    println!("qty col  : {}", roles.quantity);

    let summary = aggregate(&table, &roles)?;
    for row in summary.rows() {
        println!("  {:<20} {:>6}", row.sku, row.quantity);
    }
    Ok(())
}

fn inspect(report: &SummaryReport) {
    println!("id       : {}", report.report_id);
    println!("platform : {}", report.platform);
    println!("rows     : {}", report.source_rows);
    println!();

    for row in report.table.rows() {
        println!("  {:<20} {:>6}", row.sku, row.quantity);
    }

    println!("\n── summary ──────────────────────");
    println!("  unique SKUs : {}", report.totals.unique_skus);
    println!("  total qty   : {}", report.totals.total_quantity);
}
