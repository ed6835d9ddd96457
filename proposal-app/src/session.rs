use crate::commands::Command;
use proposal_catalog::{format_currency, CatalogError, PricingCatalog, PricingEngine};
use proposal_core::{AnalyticsSink, MemorySurface, Scheduler};
use proposal_session::{mount_layout, CtaOutcome, InteractionController};
use proposal_store::Config;
use std::sync::Arc;
use tracing::info;

/// What the input loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

/// A headless proposal session over an in-memory page
pub struct App {
    controller: InteractionController,
    surface: Arc<MemorySurface>,
    booking_url: String,
    reminder: String,
}

impl App {
    pub fn build(
        config: &Config,
        analytics: Arc<dyn AnalyticsSink>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, CatalogError> {
        let catalog = Arc::new(PricingCatalog::standard());
        let registry = config.addon_registry()?;

        let surface = Arc::new(MemorySurface::new());
        mount_layout(&surface, &catalog, &registry);
        info!("Mounted {} packages and {} add-ons", catalog.len(), registry.len());

        let mut controller = InteractionController::new(
            PricingEngine::new(catalog),
            Arc::new(registry),
            surface.clone(),
            analytics,
            scheduler,
            config.feedback.clone(),
        )
        .with_reminder(config.reminder.message.clone());
        controller.init();

        Ok(Self {
            controller,
            surface,
            booking_url: config.booking.url.clone(),
            reminder: config.reminder.message.clone(),
        })
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    pub fn apply(&mut self, command: Command) -> Reply {
        match command {
            Command::Package { id, checked } => {
                self.controller.toggle_package(id, checked);
                Reply::Continue(self.summary())
            }
            Command::Addon { id, checked } => {
                self.controller.toggle_addon(id, checked);
                Reply::Continue(self.summary())
            }
            Command::Cta => match self.controller.activate_cta() {
                CtaOutcome::Proceed => Reply::Continue(format!("proceed to {}", self.booking_url)),
                CtaOutcome::Reminded => Reply::Continue(format!("blocked: {}", self.reminder)),
            },
            Command::Hover(target) => {
                self.controller.pointer_enter(&target);
                Reply::Continue("ok".to_string())
            }
            Command::Leave(target) => {
                self.controller.pointer_leave(&target);
                Reply::Continue("ok".to_string())
            }
            Command::Key { key, focus } => {
                if self.controller.key_pressed(&key, &focus) {
                    Reply::Continue(self.summary())
                } else {
                    Reply::Continue("ignored".to_string())
                }
            }
            Command::Goto(anchor) => {
                if self.controller.follow_anchor(&anchor) {
                    Reply::Continue(format!("scrolled to {}", anchor))
                } else {
                    Reply::Continue(format!("no section {}", anchor))
                }
            }
            Command::Show => {
                let snapshot = self.controller.snapshot();
                Reply::Continue(serde_json::to_string(&snapshot).unwrap_or_else(|e| e.to_string()))
            }
            Command::Quit => Reply::Quit,
        }
    }

    /// One-line view of the derived values
    pub fn summary(&self) -> String {
        let metrics = self.controller.metrics();
        let package = self
            .controller
            .selection()
            .package()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "none".to_string());

        format!(
            "total={} package={} impressions={} reach={} engagement={} platforms={}",
            format_currency(self.controller.total()),
            package,
            metrics.impressions,
            metrics.community_reach,
            metrics.engagement,
            metrics.platform_coverage,
        )
    }
}
