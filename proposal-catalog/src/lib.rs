pub mod package;
pub mod catalog;
pub mod addon;
pub mod selection;
pub mod pricing;
pub mod metrics;

pub use package::{CatalogError, MetricsBundle, Package, PackageId};
pub use catalog::PricingCatalog;
pub use addon::{Addon, AddonId, AddonLookup, AddonRegistry, AddonTerms, Cadence};
pub use selection::Selection;
pub use pricing::{format_currency, prorate, PricingEngine};
pub use metrics::{present_metrics, MetricsView};
