pub mod surface;
pub mod analytics;
pub mod scheduler;
pub mod timings;

pub use surface::{targets, DisplaySurface, MemorySurface};
pub use analytics::{AnalyticsCollector, AnalyticsSink, ChannelSink, LogCollector, RecordingSink};
pub use scheduler::{ManualScheduler, Scheduler, Task, TokioScheduler};
pub use timings::{FeedbackTimings, DEFAULT_REMINDER};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No async runtime available: {0}")]
    RuntimeUnavailable(String),
    #[error("Analytics delivery failed: {0}")]
    DeliveryFailed(String),
    #[error("Analytics channel closed")]
    ChannelClosed,
}

pub type CoreResult<T> = Result<T, CoreError>;
