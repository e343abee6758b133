use crate::domain::{ports::OutputWriter, report::SummaryReport};
use crate::infrastructure::config::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use self::{html::HtmlWriter, json::JsonWriter, xlsx::XlsxWriter};

pub mod html;
pub mod json;
pub mod xlsx;

/// Register available writers - add new ones without touching main.rs
pub fn all_writers(cfg: &AppConfig) -> Vec<Box<dyn OutputWriter>> {
    vec![
        Box::new(XlsxWriter {
            sheet_name: cfg.output.sheet_name.clone(),
        }),
        Box::new(HtmlWriter {
            title: cfg.report.title.clone(),
        }),
        Box::new(JsonWriter),
    ]
}

pub fn writer_for(format: &str, cfg: &AppConfig) -> Option<Box<dyn OutputWriter>> {
    match format {
        "xlsx" => Some(Box::new(XlsxWriter {
            sheet_name: cfg.output.sheet_name.clone(),
        })),
        "html" => Some(Box::new(HtmlWriter {
            title: cfg.report.title.clone(),
        })),
        "json" => Some(Box::new(JsonWriter)),
        _ => None,
    }
}

/// Writes the report to `<dir>/<file_stem>.<ext>` via the chosen writer
pub fn write_to_file(
    writer: &dyn OutputWriter,
    report: &SummaryReport,
    dir: &Path,
    file_stem: &str,
) -> Result<PathBuf> {
    // Ensure the output directory exists
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let content = writer.render(report)?;
    let path = dir.join(format!("{}.{}", file_stem, writer.extension()));
    fs::write(&path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{
        platform::PlatformTag, summary::SummaryTable, value_objects::ColumnRoleMap,
        value_objects::Fingerprint,
    };
    use tempfile::tempdir;

    pub(crate) fn sample_report() -> SummaryReport {
        SummaryReport::new(
            PlatformTag::Shopee,
            "order_shopee.xlsx",
            Fingerprint::default(),
            3,
            ColumnRoleMap::new("Nomor Referensi SKU", "Jumlah"),
            SummaryTable::from_totals(
                [("B-02".to_string(), 5), ("A-01".to_string(), 2)].into(),
            ),
        )
    }

    #[test]
    fn every_format_is_registered() {
        let cfg = AppConfig::default();
        let exts: Vec<_> = all_writers(&cfg).iter().map(|w| w.extension()).collect();
        assert_eq!(exts, vec!["xlsx", "html", "json"]);
        for ext in exts {
            assert_eq!(writer_for(ext, &cfg).unwrap().extension(), ext);
        }
        assert!(writer_for("pdf", &cfg).is_none());
    }

    #[test]
    fn write_to_file_uses_stem_and_extension() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested");
        let path = write_to_file(&JsonWriter, &sample_report(), &out, "rekap").unwrap();

        assert_eq!(path, out.join("rekap.json"));
        assert!(fs::read_to_string(&path).unwrap().contains("A-01"));
    }
}
