use anyhow::Result;

use crate::domain::{ports::OutputWriter, report::SummaryReport};

pub struct JsonWriter;

impl OutputWriter for JsonWriter {
    fn render(&self, report: &SummaryReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::writers::tests::sample_report;
    use serde_json::Value;

    #[test]
    fn json_output_carries_rows_and_metadata() {
        let output = JsonWriter.render(&sample_report()).unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["platform"], "shopee");
        assert_eq!(parsed["source_rows"], 3);
        assert_eq!(parsed["roles"]["sku"], "Nomor Referensi SKU");
        assert_eq!(parsed["roles"]["quantity"], "Jumlah");
        assert_eq!(parsed["totals"]["total_quantity"], 7);
        assert_eq!(parsed["table"][0]["sku"], "A-01");
        assert_eq!(parsed["table"][1]["quantity"], 5);
    }
}
