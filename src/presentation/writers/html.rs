use anyhow::Result;
use sailfish::TemplateOnce;

use crate::domain::{ports::OutputWriter, report::SummaryReport};

#[derive(TemplateOnce)]
#[template(path = "html/summary.stpl")] // base dir declared inside sailfish.toml
struct SummaryTemplate<'a> {
    title: &'a str,
    report: &'a SummaryReport,
}

/// Printable page: title, platform, totals and a two-column table.
pub struct HtmlWriter {
    pub title: String,
}

impl OutputWriter for HtmlWriter {
    fn render(&self, report: &SummaryReport) -> Result<Vec<u8>> {
        let html = SummaryTemplate {
            title: &self.title,
            report,
        }
        .render_once()?;
        Ok(html.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
