use crate::{CoreError, CoreResult};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;

/// A delayed callback. Tasks only touch presentation state and must tolerate missing elements.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs fire-and-forget callbacks after a delay
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Scheduler backed by tokio timers
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Bind to the runtime the caller is running on
    pub fn current() -> CoreResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| CoreError::RuntimeUnavailable(e.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler: callbacks run only when the clock is advanced
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.state().now
    }

    pub fn pending(&self) -> usize {
        self.state().pending.len()
    }

    /// Move the clock forward, running due callbacks in due-time order.
    ///
    /// Callbacks scheduled by a running callback also fire if they fall due within the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            let next = {
                let mut state = self.state();
                let index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);

                match index {
                    Some(i) => {
                        let pending = state.pending.swap_remove(i);
                        state.now = pending.due;
                        Some(pending.task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    /// Advance until nothing is pending
    pub fn run_all(&self) {
        loop {
            let latest = {
                let state = self.state();
                state.pending.iter().map(|p| p.due).max().map(|due| due.saturating_sub(state.now))
            };

            match latest {
                Some(remaining) => self.advance(remaining),
                None => break,
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state();
        let due = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.pending.push(Pending { due, seq, task });
    }
}
