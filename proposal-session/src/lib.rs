pub mod feedback;
pub mod controller;
pub mod layout;

pub use feedback::FeedbackLayer;
pub use controller::{CtaOutcome, FocusTarget, HoverTarget, InteractionController, SelectionSnapshot};
pub use layout::mount_layout;
