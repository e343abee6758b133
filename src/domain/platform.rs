use serde::Serialize;

/// Marketplace whose order-export format produced a table.
///
/// `Unknown` is terminal: the pipeline stops as soon as it sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    TikTok,
    Shopee,
    Unknown,
}

impl PlatformTag {
    /// Display label shown to the seller.
    pub fn label(&self) -> &'static str {
        match self {
            PlatformTag::TikTok => "TikTok Shop",
            PlatformTag::Shopee => "Shopee",
            PlatformTag::Unknown => "Unknown",
        }
    }

    /// Rows the loader must skip before the header row it hands to the
    /// column resolver.
    ///
    /// TikTok exports carry a description row under the title row, and the
    /// column resolver expects the table re-read one row lower.
    pub fn header_row_offset(&self) -> usize {
        match self {
            PlatformTag::TikTok => 1,
            PlatformTag::Shopee | PlatformTag::Unknown => 0,
        }
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiktok_requires_one_row_offset() {
        assert_eq!(PlatformTag::TikTok.header_row_offset(), 1);
        assert_eq!(PlatformTag::Shopee.header_row_offset(), 0);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PlatformTag::TikTok).unwrap(), "\"tiktok\"");
        assert_eq!(serde_json::to_string(&PlatformTag::Shopee).unwrap(), "\"shopee\"");
    }
}
