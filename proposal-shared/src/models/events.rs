use uuid::Uuid;

/// Unix timestamp in milliseconds, the clock every interaction event is stamped with
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct PackageSelectedEvent {
    pub session_id: Uuid,
    pub package: String,
    pub selected: bool,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct AddonToggledEvent {
    pub session_id: Uuid,
    pub addon: String,
    pub selected: bool,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CtaClickedEvent {
    pub session_id: Uuid,
    pub selected_package: Option<String>,
    pub selected_addons: Vec<String>,
    pub total_investment: i64,
    pub is_valid: bool,
    pub timestamp: i64,
}

/// A tracked user interaction, tagged with its analytics event name
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InteractionEvent {
    PackageSelected(PackageSelectedEvent),
    AddonToggled(AddonToggledEvent),
    CtaClicked(CtaClickedEvent),
}

impl InteractionEvent {
    /// Event name as the analytics collector knows it
    pub fn name(&self) -> &'static str {
        match self {
            InteractionEvent::PackageSelected(_) => "package_selected",
            InteractionEvent::AddonToggled(_) => "addon_toggled",
            InteractionEvent::CtaClicked(_) => "cta_clicked",
        }
    }

    pub fn session_id(&self) -> Uuid {
        match self {
            InteractionEvent::PackageSelected(e) => e.session_id,
            InteractionEvent::AddonToggled(e) => e.session_id,
            InteractionEvent::CtaClicked(e) => e.session_id,
        }
    }

    /// Structured payload without the name tag
    pub fn payload(&self) -> serde_json::Value {
        let value = match self {
            InteractionEvent::PackageSelected(e) => serde_json::to_value(e),
            InteractionEvent::AddonToggled(e) => serde_json::to_value(e),
            InteractionEvent::CtaClicked(e) => serde_json::to_value(e),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}
