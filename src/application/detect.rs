use tracing::debug;

use crate::domain::platform::PlatformTag;

/// Shopee column titles, matched exactly against a single header identifier.
pub const SHOPEE_INDICATORS: &[&str] = &[
    "No. Pesanan",
    "Nomor Referensi SKU",
    "Status Pesanan",
    "Jumlah",
];

/// TikTok fragments, matched as substrings of the whole header text.
///
/// The first parse of a TikTok export picks up the title row, while the
/// description row below it carries the long-form names, so matching is
/// done on fragments rather than exact identifiers.
pub const TIKTOK_INDICATORS: &[&str] = &[
    "Seller SKU",
    "Order ID",
    "Seller sku input by the seller",
    "SKU sold quantity",
];

/// Classify an export from its header row alone.
///
/// Shopee is tested first: its rule is exact and cannot be triggered by a
/// TikTok header, while the TikTok substring rule is loose. A header that
/// matches neither is `Unknown`, which is a normal outcome, not an error.
pub fn detect<S: AsRef<str>>(header: &[S]) -> PlatformTag {
    let shopee_hit = header
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|col| SHOPEE_INDICATORS.contains(col));
    if let Some(col) = shopee_hit {
        debug!(indicator = col, "shopee indicator matched");
        return PlatformTag::Shopee;
    }

    let joined = header
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(fragment) = TIKTOK_INDICATORS.iter().find(|f| joined.contains(**f)) {
        debug!(indicator = *fragment, "tiktok indicator matched");
        return PlatformTag::TikTok;
    }

    debug!(columns = header.len(), "no platform indicator matched");
    PlatformTag::Unknown
}
