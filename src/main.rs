use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use skusum::presentation::cli_summary::{print_perf_summary, print_summary};
use skusum::presentation::writers::{all_writers, write_to_file, writer_for};
use skusum::{AppConfig, LogLevel, PipelineError, Role, WorkbookSource};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "skusum",
    version,
    about = "skusum — Sum sold quantities per SKU from a TikTok Shop or Shopee order export."
)]
struct Cli {
    /// Order export (.xlsx or .xls)
    file: PathBuf,

    /// Config file (TOML); defaults and SKUSUM_* env vars apply without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overrides `output.dir`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// xlsx, html, json or all
    #[arg(short, long, default_value = "all")]
    format: String,

    /// Print the summary only, write no files
    #[arg(long)]
    dry_run: bool,

    /// Correct a quantity before export, e.g. `--set TS-01=4` (repeatable)
    #[arg(long = "set", value_name = "SKU=QTY", value_parser = parse_edit)]
    edits: Vec<(String, u64)>,

    /// Print per-stage timings
    #[arg(long)]
    timing: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_edit(s: &str) -> Result<(String, u64), String> {
    let (sku, qty) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SKU=QTY, got '{s}'"))?;
    if sku.is_empty() {
        return Err("SKU must not be empty".to_string());
    }
    let qty = qty
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("quantity must be a non-negative integer, got '{qty}'"))?;
    Ok((sku.to_string(), qty))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LogLevel::Error
    } else if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    skusum::init_tracing(level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            let code = match err.downcast_ref::<PipelineError>() {
                Some(e) => {
                    if let Some(hint) = hint(e) {
                        eprintln!("{} {}", "hint:".yellow().bold(), hint);
                    }
                    e.exit_code()
                }
                None => 1,
            };
            ExitCode::from(code as u8)
        }
    }
}

fn hint(err: &PipelineError) -> Option<&'static str> {
    match err {
        PipelineError::UnrecognizedFormat => {
            Some("make sure the file is an order export from TikTok Shop or Shopee")
        }
        _ => match err.missing_role() {
            Some(Role::Sku) => Some("the export has no seller SKU column; check the file structure"),
            Some(Role::Quantity) => Some("the export has no quantity column; check the file structure"),
            None => None,
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = AppConfig::load(cli.config.as_deref())?;

    let source = WorkbookSource::open(&cli.file).map_err(PipelineError::FileProcessing)?;
    let (mut report, perf) = skusum::summarize_with_timing(&source)?;

    for (sku, qty) in &cli.edits {
        report
            .set_quantity(sku, *qty)
            .with_context(|| format!("Cannot apply --set {sku}={qty}"))?;
    }

    print_summary(&report);
    if cli.timing {
        print_perf_summary(&perf);
    }

    if cli.dry_run {
        return Ok(());
    }

    let dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.output.dir));

    match cli.format.as_str() {
        "all" => {
            for writer in all_writers(&cfg) {
                written(write_to_file(&*writer, &report, &dir, &cfg.output.file_stem)?);
            }
        }
        fmt => {
            let writer = writer_for(fmt, &cfg)
                .ok_or_else(|| anyhow::anyhow!("Unknown format: {}", fmt))?;
            written(write_to_file(&*writer, &report, &dir, &cfg.output.file_stem)?);
        }
    }

    Ok(())
}

fn written(path: impl AsRef<Path>) {
    println!("Summary written to {}", path.as_ref().display());
}
