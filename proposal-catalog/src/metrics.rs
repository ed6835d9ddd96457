use crate::catalog::PricingCatalog;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// Display strings for the four marketing metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsView {
    pub impressions: String,
    pub community_reach: String,
    pub engagement: String,
    pub platform_coverage: String,
}

impl MetricsView {
    /// Shown while no package is selected. Reach keeps its unit, the others are bare zeros.
    pub fn empty() -> Self {
        Self {
            impressions: "0".to_string(),
            community_reach: "0 developers".to_string(),
            engagement: "0".to_string(),
            platform_coverage: "0".to_string(),
        }
    }
}

impl Default for MetricsView {
    fn default() -> Self {
        Self::empty()
    }
}

/// Metrics of the selected package verbatim, or the empty view
pub fn present_metrics(selection: &Selection, catalog: &PricingCatalog) -> MetricsView {
    match selection.package().and_then(|id| catalog.lookup(id)) {
        Some(package) => MetricsView {
            impressions: package.metrics.impressions.clone(),
            community_reach: package.metrics.community_reach.clone(),
            engagement: package.metrics.engagement.clone(),
            platform_coverage: package.metrics.platform_coverage.clone(),
        },
        None => MetricsView::empty(),
    }
}
