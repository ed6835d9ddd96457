use crate::package::{MetricsBundle, Package, PackageId};
use std::collections::HashMap;

/// Static pricing table, fixed at process start
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    packages: HashMap<PackageId, Package>,
}

impl PricingCatalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages: packages.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// The three published tiers
    pub fn standard() -> Self {
        Self::new(vec![
            Package::new(
                PackageId::Essential,
                "Essential",
                2999,
                metrics(
                    "25,000-50,000",
                    "5,000-8,000 developers",
                    "500-1,000 interactions",
                    "8-10 developer platforms",
                ),
            ),
            Package::new(
                PackageId::Growth,
                "Growth",
                4999,
                metrics(
                    "75,000-125,000",
                    "15,000-25,000 developers",
                    "2,000-3,500 interactions",
                    "15-20 developer platforms",
                ),
            ),
            Package::new(
                PackageId::Enterprise,
                "Enterprise",
                8999,
                metrics(
                    "150,000-300,000",
                    "40,000-75,000 developers",
                    "5,000-10,000 interactions",
                    "25+ developer platforms",
                ),
            ),
        ])
    }

    /// Look up a package; a missing entry means "no package selected" to callers
    pub fn lookup(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    /// Look up by the raw control identifier
    pub fn lookup_str(&self, id: &str) -> Option<&Package> {
        id.parse::<PackageId>().ok().and_then(|id| self.lookup(id))
    }

    /// Package ids in display order
    pub fn ids(&self) -> Vec<PackageId> {
        let mut ids: Vec<PackageId> = self.packages.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn metrics(impressions: &str, community_reach: &str, engagement: &str, platform_coverage: &str) -> MetricsBundle {
    MetricsBundle {
        impressions: impressions.to_string(),
        community_reach: community_reach.to_string(),
        engagement: engagement.to_string(),
        platform_coverage: platform_coverage.to_string(),
    }
}
