pub mod app_config;

pub use app_config::{AddonConfig, BookingConfig, Config, ReminderConfig};
