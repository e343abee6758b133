use tracing::debug;

use crate::domain::{
    error::ResolutionError,
    platform::PlatformTag,
    value_objects::{ColumnRoleMap, Role},
};

/// One way an export can name its SKU and quantity columns.
///
/// A rule applies when its `sku` identifier is in the header; its `quantity`
/// identifier must then be present as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRule {
    pub variant: &'static str,
    pub sku: &'static str,
    pub quantity: &'static str,
}

const SHOPEE_RULES: &[ColumnRule] = &[ColumnRule {
    variant: "standard",
    sku: "Nomor Referensi SKU",
    quantity: "Jumlah",
}];

// Short form first: it is the stable naming for current exports.
const TIKTOK_RULES: &[ColumnRule] = &[
    ColumnRule {
        variant: "short",
        sku: "Seller SKU",
        quantity: "Quantity",
    },
    ColumnRule {
        variant: "long",
        sku: "Seller sku input by the seller in the product system.",
        quantity: "SKU sold quantity in the order.",
    },
];

/// Priority-ordered rules for a platform. `None` for `Unknown`.
pub fn rules_for(platform: PlatformTag) -> Option<&'static [ColumnRule]> {
    match platform {
        PlatformTag::Shopee => Some(SHOPEE_RULES),
        PlatformTag::TikTok => Some(TIKTOK_RULES),
        PlatformTag::Unknown => None,
    }
}

/// Map the `sku` and `quantity` roles to columns of `header`.
///
/// Rules are evaluated top-down and the first whose SKU column is present
/// wins, even when a later rule would also match.
pub fn resolve<S: AsRef<str>>(
    platform: PlatformTag,
    header: &[S],
) -> Result<ColumnRoleMap, ResolutionError> {
    let rules = rules_for(platform).ok_or(ResolutionError::UnknownPlatform)?;
    let has = |name: &str| header.iter().any(|h| AsRef::<str>::as_ref(h) == name);

    let rule = rules
        .iter()
        .find(|r| has(r.sku))
        .ok_or_else(|| ResolutionError::MissingRole {
            platform,
            role: Role::Sku,
            expected: rules.iter().map(|r| r.sku.to_string()).collect(),
        })?;

    if !has(rule.quantity) {
        return Err(ResolutionError::MissingRole {
            platform,
            role: Role::Quantity,
            expected: vec![rule.quantity.to_string()],
        });
    }

    debug!(
        platform = %platform,
        variant = rule.variant,
        sku = rule.sku,
        quantity = rule.quantity,
        "columns resolved"
    );
    Ok(ColumnRoleMap::new(rule.sku, rule.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_SKU: &str = "Seller sku input by the seller in the product system.";
    const LONG_QTY: &str = "SKU sold quantity in the order.";

    #[test]
    fn shopee_fixed_mapping() {
        let roles = resolve(
            PlatformTag::Shopee,
            &["No. Pesanan", "Nomor Referensi SKU", "Jumlah"],
        )
        .unwrap();
        assert_eq!(roles, ColumnRoleMap::new("Nomor Referensi SKU", "Jumlah"));
    }

    #[test]
    fn shopee_without_jumlah_reports_quantity() {
        let err = resolve(PlatformTag::Shopee, &["Nomor Referensi SKU", "Status Pesanan"])
            .unwrap_err();
        assert_eq!(err.role(), Some(Role::Quantity));
    }

    #[test]
    fn shopee_without_sku_reports_sku() {
        let err = resolve(PlatformTag::Shopee, &["No. Pesanan", "Jumlah"]).unwrap_err();
        assert_eq!(err.role(), Some(Role::Sku));
    }

    #[test]
    fn tiktok_short_form() {
        let roles = resolve(PlatformTag::TikTok, &["Order ID", "Seller SKU", "Quantity"]).unwrap();
        assert_eq!(roles, ColumnRoleMap::new("Seller SKU", "Quantity"));
    }

    #[test]
    fn tiktok_long_form() {
        let roles = resolve(PlatformTag::TikTok, &["Order ID", LONG_SKU, LONG_QTY]).unwrap();
        assert_eq!(roles, ColumnRoleMap::new(LONG_SKU, LONG_QTY));
    }

    #[test]
    fn tiktok_prefers_short_form_when_both_present() {
        let header = [LONG_SKU, LONG_QTY, "Seller SKU", "Quantity"];
        let roles = resolve(PlatformTag::TikTok, &header).unwrap();
        assert_eq!(roles, ColumnRoleMap::new("Seller SKU", "Quantity"));
    }

    #[test]
    fn tiktok_short_form_wins_even_without_its_quantity() {
        let header = ["Seller SKU", LONG_SKU, LONG_QTY];
        let err = resolve(PlatformTag::TikTok, &header).unwrap_err();
        assert_eq!(
            err,
            ResolutionError::MissingRole {
                platform: PlatformTag::TikTok,
                role: Role::Quantity,
                expected: vec!["Quantity".to_string()],
            }
        );
    }

    #[test]
    fn tiktok_long_form_matches_exact_identifier_only() {
        // A truncated long-form title is not accepted.
        let header = ["Seller sku input by the seller", LONG_QTY];
        let err = resolve(PlatformTag::TikTok, &header).unwrap_err();
        assert_eq!(err.role(), Some(Role::Sku));
        assert!(err.to_string().contains("Seller SKU or Seller sku input"));
    }

    #[test]
    fn unknown_platform_has_no_rules() {
        let err = resolve(PlatformTag::Unknown, &["Seller SKU", "Quantity"]).unwrap_err();
        assert_eq!(err, ResolutionError::UnknownPlatform);
    }
}
