use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use proposal_shared::InteractionEvent;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Fire-and-forget capability for tracked interactions
pub trait AnalyticsSink: Send + Sync {
    fn record_event(&self, event: InteractionEvent);
}

/// Keeps every recorded interaction in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<InteractionEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InteractionEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Recorded events with the given analytics name
    pub fn named(&self, name: &str) -> Vec<InteractionEvent> {
        self.events().into_iter().filter(|e| e.name() == name).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn record_event(&self, event: InteractionEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

/// Downstream analytics collector that actually delivers events
#[async_trait]
pub trait AnalyticsCollector: Send + Sync {
    async fn deliver(&self, event: InteractionEvent) -> CoreResult<()>;
}

/// Collector that only logs deliveries
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCollector;

#[async_trait]
impl AnalyticsCollector for LogCollector {
    async fn deliver(&self, event: InteractionEvent) -> CoreResult<()> {
        let json = serde_json::to_string(&event.payload()).map_err(|e| CoreError::DeliveryFailed(e.to_string()))?;
        info!(
            event = event.name(),
            session_id = %event.session_id(),
            "User interaction: {}",
            json
        );
        Ok(())
    }
}

/// Sink that queues events for a background delivery task.
///
/// Recording never blocks: when the queue is full or the task has stopped the event is dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<InteractionEvent>,
}

impl ChannelSink {
    /// Spawn the delivery task on the current runtime.
    ///
    /// The task finishes once every sink clone is dropped and yields the number of delivered events.
    pub fn spawn(
        collector: Arc<dyn AnalyticsCollector>,
        capacity: usize,
    ) -> CoreResult<(Self, JoinHandle<usize>)> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| CoreError::RuntimeUnavailable(e.to_string()))?;
        let (tx, mut rx) = mpsc::channel::<InteractionEvent>(capacity.max(1));

        let task = handle.spawn(async move {
            let mut delivered = 0;
            while let Some(event) = rx.recv().await {
                let name = event.name();
                match collector.deliver(event).await {
                    Ok(()) => delivered += 1,
                    Err(e) => warn!("Failed to deliver {} event: {}", name, e),
                }
            }
            delivered
        });

        Ok((Self { tx }, task))
    }

    pub fn try_send(&self, event: InteractionEvent) -> CoreResult<()> {
        self.tx.try_send(event).map_err(|e| match e {
            TrySendError::Full(event) => {
                CoreError::DeliveryFailed(format!("analytics queue full, dropped {}", event.name()))
            }
            TrySendError::Closed(_) => CoreError::ChannelClosed,
        })
    }
}

impl AnalyticsSink for ChannelSink {
    fn record_event(&self, event: InteractionEvent) {
        if let Err(e) = self.try_send(event) {
            warn!("Dropping analytics event: {}", e);
        }
    }
}
