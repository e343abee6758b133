use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for the output writers. Every key has a default, so running
/// without any config file is fine.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory the export files are written to.
    pub dir: String,
    /// File name without extension, shared by every writer.
    pub file_stem: String,
    /// Sheet name of the xlsx export.
    pub sheet_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Heading of the printable HTML page.
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output: OutputConfig {
                dir: ".".to_string(),
                file_stem: "sku_summary".to_string(),
                sheet_name: "SKU Summary".to_string(),
            },
            report: ReportConfig {
                title: "Summarized SKU Quantities".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Layered load: built-in defaults, then the per-user file
    /// (`<config dir>/skusum/config.toml`) if present, then `path` if given,
    /// then `SKUSUM_*` environment variables (e.g. `SKUSUM_OUTPUT__DIR`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::defaults_builder()?;

        if let Some(user) = user_config_path() {
            debug!(path = %user.display(), "checking user config");
            builder = builder.add_source(File::from(user).format(FileFormat::Toml).required(false));
        }

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("SKUSUM")
                .prefix_separator("_")
                .separator("__"),
        );

        let cfg = builder
            .build()
            .with_context(|| match path {
                Some(p) => format!("Failed to read config file: {}", p.display()),
                None => "Failed to load configuration".to_string(),
            })?
            .try_deserialize::<AppConfig>()
            .context("Failed to parse config TOML")?;
        Ok(cfg)
    }

    /// Parse a TOML document on top of the defaults, without touching the
    /// filesystem or environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::defaults_builder()?
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .context("Failed to parse config TOML")?
            .try_deserialize()
            .context("Failed to parse config TOML")
    }

    fn defaults_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let d = AppConfig::default();
        Ok(Config::builder()
            .set_default("output.dir", d.output.dir)?
            .set_default("output.file_stem", d.output.file_stem)?
            .set_default("output.sheet_name", d.output.sheet_name)?
            .set_default("report.title", d.report.title)?)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("skusum").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_apply_without_overrides() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.output.dir, ".");
        assert_eq!(cfg.output.file_stem, "sku_summary");
        assert_eq!(cfg.output.sheet_name, "SKU Summary");
        assert_eq!(cfg.report.title, "Summarized SKU Quantities");
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [output]
            dir = "out"

            [report]
            title = "Rekap SKU"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.output.dir, "out");
        assert_eq!(cfg.output.sheet_name, "SKU Summary");
        assert_eq!(cfg.report.title, "Rekap SKU");
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nfile_stem = \"rekap\"").unwrap();
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.output.file_stem, "rekap");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/no/such/skusum.toml"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/skusum.toml"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[output\ndir = ").is_err());
    }
}
