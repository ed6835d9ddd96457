use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service tiers offered by the configurator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Essential,
    Growth,
    Enterprise,
}

impl PackageId {
    pub const ALL: [PackageId; 3] = [PackageId::Essential, PackageId::Growth, PackageId::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Essential => "essential",
            PackageId::Growth => "growth",
            PackageId::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "essential" => Ok(PackageId::Essential),
            "growth" => Ok(PackageId::Growth),
            "enterprise" => Ok(PackageId::Enterprise),
            other => Err(CatalogError::UnknownPackage(other.to_string())),
        }
    }
}

/// Pre-formatted marketing ranges shown for a package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsBundle {
    pub impressions: String,
    pub community_reach: String,
    pub engagement: String,
    pub platform_coverage: String,
}

/// Catalog entry for a service tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    /// Monthly price in whole dollars
    pub price: i64,
    pub metrics: MetricsBundle,
}

impl Package {
    pub fn new(id: PackageId, name: &str, price: i64, metrics: MetricsBundle) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            metrics,
        }
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("Add-on already registered: {0}")]
    DuplicateAddon(String),

    #[error("Add-on id is reserved for another page element: {0}")]
    ReservedAddonId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_id_parsing() {
        assert_eq!("growth".parse::<PackageId>(), Ok(PackageId::Growth));
        assert_eq!(
            "platinum".parse::<PackageId>(),
            Err(CatalogError::UnknownPackage("platinum".to_string()))
        );

        for id in PackageId::ALL {
            assert_eq!(id.as_str().parse::<PackageId>(), Ok(id));
        }
    }

    #[test]
    fn test_package_id_serializes_lowercase() {
        let json = serde_json::to_string(&PackageId::Enterprise).unwrap();
        assert_eq!(json, "\"enterprise\"");
    }
}
