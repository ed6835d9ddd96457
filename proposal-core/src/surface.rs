use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Element ids of the configurator page
pub mod targets {
    pub const TOTAL_INVESTMENT: &str = "total-investment";
    pub const CTA_TOTAL: &str = "cta-total";
    pub const EXPECTED_IMPRESSIONS: &str = "expected-impressions";
    pub const COMMUNITY_REACH: &str = "community-reach";
    pub const EXPECTED_ENGAGEMENT: &str = "expected-engagement";
    pub const PLATFORM_COVERAGE: &str = "platform-coverage";
    pub const CTA_REACH: &str = "cta-reach";
    pub const CTA_BUTTON: &str = "cta-button";
    pub const PACKAGES_SECTION: &str = "packages-section";

    pub const TOAST_PREFIX: &str = "toast-";

    const FIXED: [&str; 9] = [
        TOTAL_INVESTMENT,
        CTA_TOTAL,
        EXPECTED_IMPRESSIONS,
        COMMUNITY_REACH,
        EXPECTED_ENGAGEMENT,
        PLATFORM_COVERAGE,
        CTA_REACH,
        CTA_BUTTON,
        PACKAGES_SECTION,
    ];

    const GENERATED_PREFIXES: [&str; 3] = ["package-card-", "addon-item-", TOAST_PREFIX];

    /// Whether `id` names a fixed page element or falls in a generated id range
    pub fn is_reserved(id: &str) -> bool {
        FIXED.contains(&id) || GENERATED_PREFIXES.iter().any(|prefix| id.starts_with(prefix))
    }

    /// Checkbox of a package; the control id is the package id itself
    pub fn package_control(package: &str) -> String {
        package.to_string()
    }

    pub fn package_card(package: &str) -> String {
        format!("package-card-{}", package)
    }

    /// Checkbox of an add-on; the control id is the add-on id itself
    pub fn addon_control(addon: &str) -> String {
        addon.to_string()
    }

    pub fn addon_item(addon: &str) -> String {
        format!("addon-item-{}", addon)
    }
}

/// The display layer the configurator reads controls from and writes values to.
///
/// Every write addressed to an element that does not exist is a silent no-op.
pub trait DisplaySurface: Send + Sync {
    fn exists(&self, id: &str) -> bool;

    fn text(&self, id: &str) -> Option<String>;
    fn set_text(&self, id: &str, text: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;
    fn add_class(&self, id: &str, class: &str);
    fn remove_class(&self, id: &str, class: &str);

    fn style(&self, id: &str, property: &str) -> Option<String>;
    fn set_style(&self, id: &str, property: &str, value: &str);
    fn clear_style(&self, id: &str, property: &str);

    /// `None` when the control does not exist
    fn is_checked(&self, id: &str) -> Option<bool>;
    fn set_checked(&self, id: &str, checked: bool);

    fn scroll_into_view(&self, id: &str);

    /// Creates a transient top-level element, such as a toast
    fn append_element(&self, id: &str, text: &str);
    fn remove_element(&self, id: &str);
}

#[derive(Debug, Clone, Default)]
struct Element {
    text: String,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    checked: bool,
}

#[derive(Debug, Default)]
struct SurfaceState {
    elements: HashMap<String, Element>,
    scrolled: Vec<String>,
}

/// Headless in-memory surface; only mounted elements accept writes
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self, id: &str) {
        self.state().elements.entry(id.to_string()).or_default();
    }

    pub fn mount_with_text(&self, id: &str, text: &str) {
        self.state().elements.insert(
            id.to_string(),
            Element {
                text: text.to_string(),
                ..Default::default()
            },
        );
    }

    /// Ids of mounted elements starting with `prefix`, sorted
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .state()
            .elements
            .keys()
            .filter(|id| id.starts_with(prefix))
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Every element scrolled into view, oldest first
    pub fn scroll_history(&self) -> Vec<String> {
        self.state().scrolled.clone()
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_element(&self, id: &str, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.state().elements.get_mut(id) {
            f(element);
        }
    }
}

impl DisplaySurface for MemorySurface {
    fn exists(&self, id: &str) -> bool {
        self.state().elements.contains_key(id)
    }

    fn text(&self, id: &str) -> Option<String> {
        self.state().elements.get(id).map(|e| e.text.clone())
    }

    fn set_text(&self, id: &str, text: &str) {
        self.with_element(id, |e| e.text = text.to_string());
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.state()
            .elements
            .get(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, id: &str, class: &str) {
        self.with_element(id, |e| {
            e.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, id: &str, class: &str) {
        self.with_element(id, |e| {
            e.classes.remove(class);
        });
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        self.state()
            .elements
            .get(id)
            .and_then(|e| e.styles.get(property).cloned())
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        self.with_element(id, |e| {
            e.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn clear_style(&self, id: &str, property: &str) {
        self.with_element(id, |e| {
            e.styles.remove(property);
        });
    }

    fn is_checked(&self, id: &str) -> Option<bool> {
        self.state().elements.get(id).map(|e| e.checked)
    }

    fn set_checked(&self, id: &str, checked: bool) {
        self.with_element(id, |e| e.checked = checked);
    }

    fn scroll_into_view(&self, id: &str) {
        let mut state = self.state();
        if state.elements.contains_key(id) {
            state.scrolled.push(id.to_string());
        }
    }

    fn append_element(&self, id: &str, text: &str) {
        self.mount_with_text(id, text);
    }

    fn remove_element(&self, id: &str) {
        self.state().elements.remove(id);
    }
}
