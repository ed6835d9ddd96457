use proposal_catalog::{Addon, AddonRegistry, Cadence, CatalogError, PackageId};
use proposal_core::{targets, FeedbackTimings, DEFAULT_REMINDER};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub booking: BookingConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub feedback: FeedbackTimings,
    /// Add-ons declared on the page
    #[serde(default)]
    pub addons: Vec<AddonConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReminderConfig {
    #[serde(default = "default_reminder")]
    pub message: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            message: default_reminder(),
        }
    }
}

fn default_reminder() -> String {
    DEFAULT_REMINDER.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AddonConfig {
    pub id: String,
    pub name: String,
    pub price: i64,
    /// Billing tag; only "quarterly" is pro-rated
    #[serde(default = "default_cadence")]
    pub cadence: String,
}

fn default_cadence() -> String { "monthly".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base settings, always required
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `PROPOSAL_BOOKING__URL=https://...` sets `booking.url`
            .add_source(
                config::Environment::with_prefix("PROPOSAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Build from an inline TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Registry of the declared add-ons, in declaration order.
    ///
    /// An add-on control shares its id with the add-on, so ids that already name a package
    /// control or another page element are rejected.
    pub fn addon_registry(&self) -> Result<AddonRegistry, CatalogError> {
        let mut registry = AddonRegistry::new();
        for addon in &self.addons {
            if addon.id.parse::<PackageId>().is_ok() || targets::is_reserved(&addon.id) {
                return Err(CatalogError::ReservedAddonId(addon.id.clone()));
            }
            registry.register(Addon::new(
                addon.id.clone(),
                &addon.name,
                addon.price,
                Cadence::from_tag(&addon.cadence),
            ))?;
        }
        tracing::debug!("Registered {} add-ons", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_catalog::{AddonId, AddonLookup};

    const DOCUMENT: &str = r#"
        [booking]
        url = "https://calendar.example.com/book"

        [feedback]
        toast_display_ms = 1500

        [[addons]]
        id = "video-series"
        name = "Video Series"
        price = 3000
        cadence = "quarterly"

        [[addons]]
        id = "newsletter"
        name = "Newsletter Placement"
        price = 750
    "#;

    #[test]
    fn test_parse_document() {
        let config = Config::from_toml_str(DOCUMENT).unwrap();

        assert_eq!(config.booking.url, "https://calendar.example.com/book");
        assert_eq!(config.reminder.message, DEFAULT_REMINDER);
        assert_eq!(config.feedback.toast_display_ms, 1500);
        assert_eq!(config.feedback.toast_exit_ms, 300);
        assert_eq!(config.addons.len(), 2);
        assert_eq!(config.addons[1].cadence, "monthly");
    }

    #[test]
    fn test_addon_registry() {
        let registry = Config::from_toml_str(DOCUMENT).unwrap().addon_registry().unwrap();

        let terms = registry.terms(&AddonId::from("video-series")).unwrap();
        assert_eq!(terms.cadence, Cadence::Quarterly);
        assert_eq!(registry.terms(&AddonId::from("newsletter")).unwrap().cadence, Cadence::Monthly);
    }

    #[test]
    fn test_duplicate_addon_rejected() {
        let document = format!(
            "{}\n[[addons]]\nid = \"newsletter\"\nname = \"Again\"\nprice = 1\n",
            DOCUMENT
        );
        let config = Config::from_toml_str(&document).unwrap();

        assert_eq!(
            config.addon_registry().unwrap_err(),
            CatalogError::DuplicateAddon("newsletter".to_string())
        );
    }

    #[test]
    fn test_reserved_addon_ids_rejected() {
        for id in ["growth", "cta-button", "package-card-essential", "toast-1"] {
            let document = format!(
                "[booking]\nurl = \"https://calendar.example.com/book\"\n\n[[addons]]\nid = \"{}\"\nname = \"Clash\"\nprice = 100\n",
                id
            );
            let config = Config::from_toml_str(&document).unwrap();

            assert_eq!(
                config.addon_registry().unwrap_err(),
                CatalogError::ReservedAddonId(id.to_string())
            );
        }
    }

    #[test]
    fn test_missing_booking_fails() {
        assert!(Config::from_toml_str("[reminder]\nmessage = \"hi\"\n").is_err());
    }
}
