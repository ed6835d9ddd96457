use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reminder shown when the call to action is activated without a package
pub const DEFAULT_REMINDER: &str = "Please select a package to continue";

/// Durations of the cosmetic feedback effects, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackTimings {
    /// Emphasis on an updated value
    pub value_pulse_ms: u64,
    /// Highlight on a freshly selected package card
    pub package_flash_ms: u64,
    /// Highlight on a toggled add-on item
    pub addon_flash_ms: u64,
    /// Pulse on every package card during the reminder
    pub card_pulse_ms: u64,
    pub toast_display_ms: u64,
    pub toast_exit_ms: u64,
}

impl FeedbackTimings {
    pub fn value_pulse(&self) -> Duration {
        Duration::from_millis(self.value_pulse_ms)
    }

    pub fn package_flash(&self) -> Duration {
        Duration::from_millis(self.package_flash_ms)
    }

    pub fn addon_flash(&self) -> Duration {
        Duration::from_millis(self.addon_flash_ms)
    }

    pub fn card_pulse(&self) -> Duration {
        Duration::from_millis(self.card_pulse_ms)
    }

    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        Self {
            value_pulse_ms: 200,
            package_flash_ms: 600,
            addon_flash_ms: 300,
            card_pulse_ms: 1000,
            toast_display_ms: 3000,
            toast_exit_ms: 300,
        }
    }
}
