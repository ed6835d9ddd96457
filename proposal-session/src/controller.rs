use crate::feedback::FeedbackLayer;
use proposal_catalog::{format_currency, present_metrics, AddonId, AddonLookup, MetricsView, PackageId, PricingEngine, Selection};
use proposal_core::{targets, AnalyticsSink, DisplaySurface, FeedbackTimings, Scheduler, DEFAULT_REMINDER};
use proposal_shared::{now_millis, AddonToggledEvent, CtaClickedEvent, InteractionEvent, PackageSelectedEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const SELECTED_CLASS: &str = "selected";
const DISABLED_CLASS: &str = "disabled";

/// Result of activating the call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CtaOutcome {
    /// Navigation to the booking destination may proceed
    Proceed,
    /// Navigation suppressed, the user was pointed back at the packages
    Reminded,
}

/// Element that holds keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    PackageLabel(PackageId),
    AddonLabel(AddonId),
    Other,
}

/// Element under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    PackageCard(PackageId),
    AddonItem(AddonId),
}

/// Derived view of the session at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub session_id: Uuid,
    pub package: Option<PackageId>,
    pub addons: Vec<AddonId>,
    pub total: i64,
    pub metrics: MetricsView,
}

/// Owns the session selection and keeps the display surface in step with it
pub struct InteractionController {
    session_id: Uuid,
    selection: Selection,
    total: i64,
    engine: PricingEngine,
    addons: Arc<dyn AddonLookup>,
    surface: Arc<dyn DisplaySurface>,
    analytics: Arc<dyn AnalyticsSink>,
    feedback: FeedbackLayer,
    reminder: String,
}

impl InteractionController {
    pub fn new(
        engine: PricingEngine,
        addons: Arc<dyn AddonLookup>,
        surface: Arc<dyn DisplaySurface>,
        analytics: Arc<dyn AnalyticsSink>,
        scheduler: Arc<dyn Scheduler>,
        timings: FeedbackTimings,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            selection: Selection::new(),
            total: 0,
            engine,
            addons,
            feedback: FeedbackLayer::new(surface.clone(), scheduler, timings),
            surface,
            analytics,
            reminder: DEFAULT_REMINDER.to_string(),
        }
    }

    pub fn with_reminder(mut self, message: impl Into<String>) -> Self {
        self.reminder = message.into();
        self
    }

    /// Render the initial, empty state
    pub fn init(&mut self) {
        self.sync_metrics(false);
        self.sync_total(false);
        self.sync_validation();
        info!("Proposal session {} initialized", self.session_id);
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Total as last pushed to the display
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn metrics(&self) -> MetricsView {
        present_metrics(&self.selection, self.engine.catalog())
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            session_id: self.session_id,
            package: self.selection.package(),
            addons: self.selection.addons().cloned().collect(),
            total: self.total,
            metrics: self.metrics(),
        }
    }

    /// A package checkbox changed. Checking one unchecks every other package.
    pub fn toggle_package(&mut self, package: PackageId, checked: bool) {
        for other in self.engine.catalog().ids() {
            if other != package {
                self.surface.set_checked(&targets::package_control(other.as_str()), false);
                self.surface.remove_class(&targets::package_card(other.as_str()), SELECTED_CLASS);
            }
        }

        let control = targets::package_control(package.as_str());
        let card = targets::package_card(package.as_str());
        self.surface.set_checked(&control, checked);

        if checked {
            self.selection.choose_package(package);
            self.surface.add_class(&card, SELECTED_CLASS);
            self.feedback.flash_package(package.as_str());
        } else {
            self.selection.clear_package();
            self.surface.remove_class(&card, SELECTED_CLASS);
        }
        debug!("Package {} {}", package, if checked { "selected" } else { "deselected" });

        self.analytics.record_event(InteractionEvent::PackageSelected(PackageSelectedEvent {
            session_id: self.session_id,
            package: package.to_string(),
            selected: checked,
            timestamp: now_millis(),
        }));

        self.sync_metrics(true);
        self.sync_total(true);
        self.sync_validation();
    }

    /// An add-on checkbox changed. Add-ons affect only the total.
    pub fn toggle_addon(&mut self, addon: AddonId, checked: bool) {
        let item = targets::addon_item(addon.as_str());
        self.surface.set_checked(&targets::addon_control(addon.as_str()), checked);

        if checked {
            self.surface.add_class(&item, SELECTED_CLASS);
        } else {
            self.surface.remove_class(&item, SELECTED_CLASS);
        }
        self.feedback.flash_addon(addon.as_str(), checked);
        debug!("Add-on {} {}", addon, if checked { "selected" } else { "deselected" });

        self.analytics.record_event(InteractionEvent::AddonToggled(AddonToggledEvent {
            session_id: self.session_id,
            addon: addon.to_string(),
            selected: checked,
            timestamp: now_millis(),
        }));

        self.selection.set_addon(addon, checked);
        self.sync_total(true);
    }

    /// The call to action was activated. Proceeds only with a package chosen.
    pub fn activate_cta(&mut self) -> CtaOutcome {
        let is_valid = self.sync_validation();

        self.analytics.record_event(InteractionEvent::CtaClicked(CtaClickedEvent {
            session_id: self.session_id,
            selected_package: self.selection.package().map(|p| p.to_string()),
            selected_addons: self.selection.addons().map(|a| a.to_string()).collect(),
            total_investment: self.total,
            is_valid,
            timestamp: now_millis(),
        }));

        if is_valid {
            info!("Redirecting to booking with total {}", format_currency(self.total));
            return CtaOutcome::Proceed;
        }

        info!("CTA activated without a package, showing reminder");
        let cards: Vec<String> = self
            .engine
            .catalog()
            .ids()
            .into_iter()
            .map(|id| targets::package_card(id.as_str()))
            .collect();
        self.feedback.highlight_packages(&cards);
        self.feedback.show_toast(&self.reminder);

        CtaOutcome::Reminded
    }

    pub fn pointer_enter(&self, target: &HoverTarget) {
        match target {
            HoverTarget::PackageCard(id) => {
                self.feedback.hover_lift(&targets::package_card(id.as_str()), "-4px", "var(--shadow-lg)")
            }
            HoverTarget::AddonItem(id) => {
                self.feedback.hover_lift(&targets::addon_item(id.as_str()), "-2px", "var(--shadow-md)")
            }
        }
    }

    pub fn pointer_leave(&self, target: &HoverTarget) {
        match target {
            HoverTarget::PackageCard(id) => self.feedback.hover_reset(&targets::package_card(id.as_str())),
            HoverTarget::AddonItem(id) => self.feedback.hover_reset(&targets::addon_item(id.as_str())),
        }
    }

    /// Enter or Space on a focused label flips its checkbox. Returns whether the key was consumed.
    pub fn key_pressed(&mut self, key: &str, focus: &FocusTarget) -> bool {
        if key != "Enter" && key != " " {
            return false;
        }

        match focus {
            FocusTarget::PackageLabel(id) => {
                if let Some(checked) = self.surface.is_checked(&targets::package_control(id.as_str())) {
                    self.toggle_package(*id, !checked);
                }
                true
            }
            FocusTarget::AddonLabel(id) => {
                if let Some(checked) = self.surface.is_checked(&targets::addon_control(id.as_str())) {
                    self.toggle_addon(id.clone(), !checked);
                }
                true
            }
            FocusTarget::Other => false,
        }
    }

    /// Scroll to an in-page `#section` anchor. Returns whether a section was found.
    pub fn follow_anchor(&self, href: &str) -> bool {
        match href.strip_prefix('#') {
            Some(section) if self.surface.exists(section) => {
                self.surface.scroll_into_view(section);
                true
            }
            _ => false,
        }
    }

    fn has_package(&self) -> bool {
        self.selection
            .package()
            .and_then(|id| self.engine.catalog().lookup(id))
            .is_some()
    }

    fn sync_total(&mut self, animate: bool) {
        self.total = self.engine.compute_total(&self.selection, self.addons.as_ref());

        let formatted = format_currency(self.total);
        for target in [targets::TOTAL_INVESTMENT, targets::CTA_TOTAL] {
            self.surface.set_text(target, &formatted);
            if animate {
                self.feedback.pulse_value(target);
            }
        }
    }

    fn sync_metrics(&self, animate: bool) {
        let view = self.metrics();
        let writes = [
            (targets::EXPECTED_IMPRESSIONS, &view.impressions),
            (targets::COMMUNITY_REACH, &view.community_reach),
            (targets::EXPECTED_ENGAGEMENT, &view.engagement),
            (targets::PLATFORM_COVERAGE, &view.platform_coverage),
            (targets::CTA_REACH, &view.community_reach),
        ];

        // The empty view is written without emphasis
        let animate = animate && self.has_package();
        for (target, text) in writes {
            self.surface.set_text(target, text);
            if animate {
                self.feedback.pulse_value(target);
            }
        }
    }

    /// Style the call to action by whether a package is chosen; it stays clickable either way
    fn sync_validation(&self) -> bool {
        let valid = self.has_package();

        if valid {
            self.surface.remove_class(targets::CTA_BUTTON, DISABLED_CLASS);
            self.surface.set_style(targets::CTA_BUTTON, "opacity", "1");
        } else {
            self.surface.add_class(targets::CTA_BUTTON, DISABLED_CLASS);
            self.surface.set_style(targets::CTA_BUTTON, "opacity", "0.7");
        }
        self.surface.set_style(targets::CTA_BUTTON, "pointer-events", "auto");

        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::mount_layout;
    use proposal_catalog::{Addon, AddonRegistry, Cadence, PricingCatalog};
    use proposal_core::{ManualScheduler, MemorySurface, RecordingSink};
    use std::time::Duration;

    struct Harness {
        controller: InteractionController,
        surface: Arc<MemorySurface>,
        analytics: Arc<RecordingSink>,
        scheduler: Arc<ManualScheduler>,
    }

    fn harness() -> Harness {
        let catalog = Arc::new(PricingCatalog::standard());
        let mut registry = AddonRegistry::new();
        registry.register(Addon::new("addon_x", "Addon X", 300, Cadence::Quarterly)).unwrap();
        registry.register(Addon::new("newsletter", "Newsletter", 750, Cadence::Monthly)).unwrap();

        let surface = Arc::new(MemorySurface::new());
        mount_layout(&surface, &catalog, &registry);

        let analytics = Arc::new(RecordingSink::new());
        let scheduler = Arc::new(ManualScheduler::new());
        let mut controller = InteractionController::new(
            PricingEngine::new(catalog),
            Arc::new(registry),
            surface.clone(),
            analytics.clone(),
            scheduler.clone(),
            FeedbackTimings::default(),
        );
        controller.init();

        Harness {
            controller,
            surface,
            analytics,
            scheduler,
        }
    }

    #[test]
    fn test_init_renders_empty_state() {
        let h = harness();
        assert_eq!(h.surface.text(targets::TOTAL_INVESTMENT).as_deref(), Some("$0"));
        assert_eq!(h.surface.text(targets::CTA_TOTAL).as_deref(), Some("$0"));
        assert_eq!(h.surface.text(targets::EXPECTED_IMPRESSIONS).as_deref(), Some("0"));
        assert_eq!(h.surface.text(targets::CTA_REACH).as_deref(), Some("0 developers"));
        assert!(h.surface.has_class(targets::CTA_BUTTON, "disabled"));
        assert_eq!(h.surface.style(targets::CTA_BUTTON, "opacity").as_deref(), Some("0.7"));
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_package_exclusivity() {
        let mut h = harness();

        h.controller.toggle_package(PackageId::Essential, true);
        h.controller.toggle_package(PackageId::Growth, true);

        assert_eq!(h.controller.selection().package(), Some(PackageId::Growth));
        assert_eq!(h.surface.is_checked("essential"), Some(false));
        assert_eq!(h.surface.is_checked("growth"), Some(true));
        assert!(!h.surface.has_class(&targets::package_card("essential"), "selected"));
        assert!(h.surface.has_class(&targets::package_card("growth"), "selected"));
        assert_eq!(h.controller.total(), 4999);
        assert_eq!(h.surface.text(targets::TOTAL_INVESTMENT).as_deref(), Some("$4,999"));
        assert_eq!(
            h.surface.text(targets::COMMUNITY_REACH).as_deref(),
            Some("15,000-25,000 developers")
        );
        assert!(!h.surface.has_class(targets::CTA_BUTTON, "disabled"));
    }

    #[test]
    fn test_deselect_resets_metrics_and_total() {
        let mut h = harness();

        h.controller.toggle_package(PackageId::Essential, true);
        h.controller.toggle_package(PackageId::Essential, false);

        assert_eq!(h.controller.total(), 0);
        assert_eq!(h.controller.metrics(), MetricsView::empty());
        assert_eq!(h.surface.text(targets::PLATFORM_COVERAGE).as_deref(), Some("0"));
        assert_eq!(h.surface.text(targets::COMMUNITY_REACH).as_deref(), Some("0 developers"));
        assert!(h.surface.has_class(targets::CTA_BUTTON, "disabled"));
    }

    #[test]
    fn test_addon_affects_total_only() {
        let mut h = harness();

        h.controller.toggle_package(PackageId::Essential, true);
        let metrics = h.controller.metrics();
        h.controller.toggle_addon(AddonId::from("addon_x"), true);

        assert_eq!(h.controller.total(), 3099);
        assert_eq!(h.surface.text(targets::CTA_TOTAL).as_deref(), Some("$3,099"));
        assert_eq!(h.controller.metrics(), metrics);
        assert!(h.surface.has_class(&targets::addon_item("addon_x"), "selected"));

        h.controller.toggle_addon(AddonId::from("addon_x"), false);
        assert_eq!(h.controller.total(), 2999);
        assert!(!h.surface.has_class(&targets::addon_item("addon_x"), "selected"));
    }

    #[test]
    fn test_tracking_events() {
        let mut h = harness();

        h.controller.toggle_package(PackageId::Enterprise, true);
        h.controller.toggle_addon(AddonId::from("newsletter"), true);
        h.controller.toggle_package(PackageId::Enterprise, false);

        let names: Vec<&str> = h.analytics.events().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["package_selected", "addon_toggled", "package_selected"]);

        match &h.analytics.events()[2] {
            InteractionEvent::PackageSelected(e) => {
                assert_eq!(e.package, "enterprise");
                assert!(!e.selected);
                assert_eq!(e.session_id, h.controller.session_id());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_cta_without_package_reminds() {
        let mut h = harness();
        h.controller.toggle_addon(AddonId::from("newsletter"), true);

        assert_eq!(h.controller.activate_cta(), CtaOutcome::Reminded);
        assert_eq!(h.surface.scroll_history(), vec![targets::PACKAGES_SECTION.to_string()]);
        assert!(h.surface.style(&targets::package_card("growth"), "animation").is_some());

        let toasts = h.surface.ids_with_prefix(targets::TOAST_PREFIX);
        assert_eq!(toasts.len(), 1);
        assert_eq!(h.surface.text(&toasts[0]).as_deref(), Some(DEFAULT_REMINDER));

        match &h.analytics.named("cta_clicked")[0] {
            InteractionEvent::CtaClicked(e) => {
                assert!(!e.is_valid);
                assert_eq!(e.total_investment, 750);
                assert_eq!(e.selected_package, None);
            }
            other => panic!("unexpected event {:?}", other),
        }

        h.scheduler.run_all();
        assert!(h.surface.ids_with_prefix(targets::TOAST_PREFIX).is_empty());
        assert!(h.surface.style(&targets::package_card("growth"), "animation").is_none());
    }

    #[test]
    fn test_cta_with_package_proceeds() {
        let mut h = harness();
        h.controller.toggle_package(PackageId::Growth, true);
        h.controller.toggle_addon(AddonId::from("addon_x"), true);

        assert_eq!(h.controller.activate_cta(), CtaOutcome::Proceed);
        assert!(h.surface.scroll_history().is_empty());
        assert!(h.surface.ids_with_prefix(targets::TOAST_PREFIX).is_empty());

        match &h.analytics.named("cta_clicked")[0] {
            InteractionEvent::CtaClicked(e) => {
                assert!(e.is_valid);
                assert_eq!(e.total_investment, 5099);
                assert_eq!(e.selected_package.as_deref(), Some("growth"));
                assert_eq!(e.selected_addons, vec!["addon_x".to_string()]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_animations_revert_without_touching_selection() {
        let mut h = harness();
        h.controller.toggle_package(PackageId::Essential, true);

        let card = targets::package_card("essential");
        assert!(h.surface.has_class(&card, "package-selected-animation"));
        assert!(h.surface.style(targets::TOTAL_INVESTMENT, "transform").is_some());

        h.scheduler.advance(Duration::from_millis(600));
        assert!(!h.surface.has_class(&card, "package-selected-animation"));
        assert!(h.surface.style(targets::TOTAL_INVESTMENT, "transform").is_none());
        assert!(h.surface.has_class(&card, "selected"));
        assert_eq!(h.controller.selection().package(), Some(PackageId::Essential));
    }

    #[test]
    fn test_keyboard_toggles_focused_label() {
        let mut h = harness();

        assert!(h.controller.key_pressed("Enter", &FocusTarget::PackageLabel(PackageId::Growth)));
        assert_eq!(h.controller.selection().package(), Some(PackageId::Growth));

        assert!(h.controller.key_pressed(" ", &FocusTarget::PackageLabel(PackageId::Growth)));
        assert_eq!(h.controller.selection().package(), None);

        assert!(h.controller.key_pressed(" ", &FocusTarget::AddonLabel(AddonId::from("newsletter"))));
        assert!(h.controller.selection().has_addon(&AddonId::from("newsletter")));

        assert!(!h.controller.key_pressed("Tab", &FocusTarget::PackageLabel(PackageId::Growth)));
        assert!(!h.controller.key_pressed("Enter", &FocusTarget::Other));
        assert_eq!(h.controller.selection().package(), None);
    }

    #[test]
    fn test_hover_and_anchor() {
        let h = harness();
        let item = targets::addon_item("newsletter");

        h.controller.pointer_enter(&HoverTarget::AddonItem(AddonId::from("newsletter")));
        assert_eq!(h.surface.style(&item, "transform").as_deref(), Some("translateY(-2px)"));
        h.controller.pointer_leave(&HoverTarget::AddonItem(AddonId::from("newsletter")));
        assert!(h.surface.style(&item, "transform").is_none());

        assert!(h.controller.follow_anchor("#packages-section"));
        assert!(!h.controller.follow_anchor("#pricing-faq"));
        assert!(!h.controller.follow_anchor("https://example.com"));
    }

    #[test]
    fn test_missing_display_targets_are_ignored() {
        let surface = Arc::new(MemorySurface::new());
        let mut controller = InteractionController::new(
            PricingEngine::new(Arc::new(PricingCatalog::standard())),
            Arc::new(AddonRegistry::new()),
            surface.clone(),
            Arc::new(RecordingSink::new()),
            Arc::new(ManualScheduler::new()),
            FeedbackTimings::default(),
        );

        controller.init();
        controller.toggle_package(PackageId::Growth, true);
        controller.toggle_addon(AddonId::from("unknown"), true);

        assert_eq!(controller.total(), 4999);
        assert_eq!(controller.activate_cta(), CtaOutcome::Proceed);
        assert!(surface.text(targets::TOTAL_INVESTMENT).is_none());
    }
}
