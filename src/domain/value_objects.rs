use serde::{Deserialize, Serialize};

/// Newtype for a column identifier as it appears in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnName(pub String);

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// SHA-256 hex fingerprint of the uploaded file bytes.
///
/// Computed by `skusum::fingerprint(bytes)`. Lets a caller tell whether two
/// summaries were produced from the same export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

impl Fingerprint {
    /// Returns the raw hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Semantic purpose of a column, independent of its literal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Sku,
    Quantity,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sku => "sku",
            Role::Quantity => "quantity",
        }
    }

    /// Human-facing column label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Sku => "SKU",
            Role::Quantity => "Quantity",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved mapping from the two fixed roles to actual column identifiers.
///
/// Built once per (platform, header) pair by the column resolver and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoleMap {
    pub sku: ColumnName,
    pub quantity: ColumnName,
}

impl ColumnRoleMap {
    pub fn new(sku: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            sku: ColumnName(sku.into()),
            quantity: ColumnName(quantity.into()),
        }
    }

    pub fn get(&self, role: Role) -> &ColumnName {
        match role {
            Role::Sku => &self.sku,
            Role::Quantity => &self.quantity,
        }
    }
}
