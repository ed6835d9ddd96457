use proposal_catalog::{AddonRegistry, PricingCatalog};
use proposal_core::{targets, MemorySurface};

/// Mount every element the configurator page declares
pub fn mount_layout(surface: &MemorySurface, catalog: &PricingCatalog, addons: &AddonRegistry) {
    for id in [
        targets::TOTAL_INVESTMENT,
        targets::CTA_TOTAL,
        targets::EXPECTED_IMPRESSIONS,
        targets::COMMUNITY_REACH,
        targets::EXPECTED_ENGAGEMENT,
        targets::PLATFORM_COVERAGE,
        targets::CTA_REACH,
        targets::CTA_BUTTON,
        targets::PACKAGES_SECTION,
    ] {
        surface.mount(id);
    }

    for id in catalog.ids() {
        surface.mount(&targets::package_control(id.as_str()));
        if let Some(package) = catalog.lookup(id) {
            surface.mount_with_text(&targets::package_card(id.as_str()), &package.name);
        }
    }

    for addon in addons.iter() {
        surface.mount(&targets::addon_control(addon.id.as_str()));
        surface.mount_with_text(&targets::addon_item(addon.id.as_str()), &addon.name);
    }
}
