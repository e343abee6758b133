use crate::application::monitoring::PerfReport;
use crate::domain::platform::PlatformTag;
use crate::domain::report::SummaryReport;
use colored::*;
use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SkuRow {
    #[tabled(rename = "Seller SKU")]
    sku: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
}

#[derive(Tabled)]
struct MetricRow {
    metric: String,
    value: String,
}

fn platform_badge(platform: PlatformTag) -> String {
    match platform {
        PlatformTag::TikTok => platform.label().black().on_cyan().to_string(),
        PlatformTag::Shopee => platform.label().white().on_red().to_string(),
        PlatformTag::Unknown => platform.label().dimmed().to_string(),
    }
}

pub fn print_summary(report: &SummaryReport) {
    println!();

    println!("{}", "SKU QUANTITY SUMMARY".bold().cyan());
    println!(
        "{} {}",
        platform_badge(report.platform),
        report.source_name.blue()
    );
    println!("Report: {}", report.report_id.bright_yellow());
    println!();

    let metrics = vec![
        MetricRow {
            metric: "Unique SKUs".into(),
            value: report.totals.unique_skus.to_string().green().to_string(),
        },
        MetricRow {
            metric: "Total quantity".into(),
            value: report.totals.total_quantity.to_string().bold().to_string(),
        },
        MetricRow {
            metric: "Data rows".into(),
            value: report.source_rows.to_string(),
        },
    ];

    let metrics_table = Table::new(metrics)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..=1)).with(Alignment::right()))
        .to_string();
    println!("{metrics_table}");
    println!();

    if report.table.is_empty() {
        println!("{}", "No SKUs with a value found.".italic());
        println!();
        return;
    }

    let rows: Vec<SkuRow> = report
        .table
        .rows()
        .iter()
        .map(|r| SkuRow {
            sku: r.sku.clone(),
            quantity: r.quantity.to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..=1)).with(Alignment::right()))
        .to_string();
    println!("{table}");
    println!();
}

// ─── Performance summary ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PerfRow {
    operation: String,
    source: String,
    #[tabled(rename = "rows")]
    rows: String,
    #[tabled(rename = "time (ms)")]
    duration_ms: String,
}

/// Print a performance timing table to stdout.
pub fn print_perf_summary(report: &PerfReport) {
    if report.timings.is_empty() {
        return;
    }

    println!("{}", "PERFORMANCE".bold().cyan());

    let rows: Vec<PerfRow> = report
        .timings
        .iter()
        .map(|t| PerfRow {
            operation: t.operation.dimmed().to_string(),
            source: t.source.bold().to_string(),
            rows: t.rows.to_string(),
            duration_ms: format_duration(t.duration_ms),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..=3)).with(Alignment::right()))
        .to_string();

    println!("{table}");

    println!(
        "  Total: {} row(s) read  ·  {} ms elapsed",
        report.total_rows_read.to_string().bold(),
        format_duration(report.total_ms),
    );
    println!();
}

fn format_duration(ms: u128) -> String {
    if ms >= 1_000 {
        format!("{:.1}s", ms as f64 / 1_000.0).yellow().to_string()
    } else if ms >= 100 {
        ms.to_string().yellow().to_string()
    } else {
        ms.to_string().green().to_string()
    }
}
