use proposal_core::{targets, DisplaySurface, FeedbackTimings, Scheduler};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const SELECTED_CLASS: &str = "selected";
const PACKAGE_SELECTED_ANIMATION: &str = "package-selected-animation";
const ADDON_SELECTED_ANIMATION: &str = "addon-selected-animation";
const ADDON_DESELECTED_ANIMATION: &str = "addon-deselected-animation";

/// Transient visual emphasis. Every effect is applied now and reverted by a scheduled callback;
/// nothing here touches the selection.
pub struct FeedbackLayer {
    surface: Arc<dyn DisplaySurface>,
    scheduler: Arc<dyn Scheduler>,
    timings: FeedbackTimings,
}

impl FeedbackLayer {
    pub fn new(surface: Arc<dyn DisplaySurface>, scheduler: Arc<dyn Scheduler>, timings: FeedbackTimings) -> Self {
        Self {
            surface,
            scheduler,
            timings,
        }
    }

    /// Scale up and recolour an updated value.
    ///
    /// Reverts are not coalesced: a pulse still pending on the same target clears this one early.
    pub fn pulse_value(&self, id: &str) {
        if !self.surface.exists(id) {
            return;
        }

        self.surface.set_style(id, "transform", "scale(1.05)");
        self.surface.set_style(id, "color", "var(--color-primary)");

        let id = id.to_string();
        self.after(self.timings.value_pulse(), move |surface| {
            surface.clear_style(&id, "transform");
            surface.clear_style(&id, "color");
        });
    }

    pub fn flash_package(&self, package: &str) {
        let card = targets::package_card(package);
        if !self.surface.exists(&card) {
            return;
        }

        self.surface.add_class(&card, PACKAGE_SELECTED_ANIMATION);
        self.after(self.timings.package_flash(), move |surface| {
            surface.remove_class(&card, PACKAGE_SELECTED_ANIMATION);
        });
    }

    pub fn flash_addon(&self, addon: &str, selected: bool) {
        let item = targets::addon_item(addon);
        if !self.surface.exists(&item) {
            return;
        }

        let class = if selected {
            ADDON_SELECTED_ANIMATION
        } else {
            ADDON_DESELECTED_ANIMATION
        };
        self.surface.add_class(&item, class);
        self.after(self.timings.addon_flash(), move |surface| {
            surface.remove_class(&item, ADDON_SELECTED_ANIMATION);
            surface.remove_class(&item, ADDON_DESELECTED_ANIMATION);
        });
    }

    /// Scroll the package section into view and pulse its cards
    pub fn highlight_packages(&self, cards: &[String]) {
        if !self.surface.exists(targets::PACKAGES_SECTION) {
            return;
        }

        self.surface.scroll_into_view(targets::PACKAGES_SECTION);

        let animation = format!("pulse {}ms ease-in-out", self.timings.card_pulse_ms);
        for card in cards {
            self.surface.set_style(card, "animation", &animation);
        }

        let cards = cards.to_vec();
        self.after(self.timings.card_pulse(), move |surface| {
            for card in &cards {
                surface.clear_style(card, "animation");
            }
        });
    }

    /// Show a temporary message; returns the id of the toast element
    pub fn show_toast(&self, message: &str) -> String {
        let id = format!("{}{}", targets::TOAST_PREFIX, Uuid::new_v4());
        self.surface.append_element(&id, message);
        self.surface.set_style(&id, "animation", "slideIn 0.3s ease-out");

        let scheduler = self.scheduler.clone();
        let exit = self.timings.toast_exit();
        let toast = id.clone();
        self.after(self.timings.toast_display(), move |surface| {
            if !surface.exists(&toast) {
                return;
            }
            surface.set_style(&toast, "animation", "slideOut 0.3s ease-in");

            let remover = surface.clone();
            scheduler.schedule(
                exit,
                Box::new(move || {
                    if remover.exists(&toast) {
                        remover.remove_element(&toast);
                    }
                }),
            );
        });

        id
    }

    /// Lift a card or item under the pointer unless it is selected
    pub fn hover_lift(&self, id: &str, offset: &str, shadow: &str) {
        if self.surface.has_class(id, SELECTED_CLASS) {
            return;
        }
        self.surface.set_style(id, "transform", &format!("translateY({})", offset));
        self.surface.set_style(id, "box-shadow", shadow);
    }

    pub fn hover_reset(&self, id: &str) {
        if self.surface.has_class(id, SELECTED_CLASS) {
            return;
        }
        self.surface.clear_style(id, "transform");
        self.surface.clear_style(id, "box-shadow");
    }

    fn after(&self, delay: Duration, revert: impl FnOnce(&Arc<dyn DisplaySurface>) + Send + 'static) {
        let surface = self.surface.clone();
        self.scheduler.schedule(delay, Box::new(move || revert(&surface)));
    }
}
