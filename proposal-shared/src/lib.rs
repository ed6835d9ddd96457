pub mod models;

pub use models::events::{now_millis, AddonToggledEvent, CtaClickedEvent, InteractionEvent, PackageSelectedEvent};
