use std::time::Duration;

use tracing::debug;

/// Deferred UI work, labelled so callers and tests can tell timers apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    PageReload,
    PanelFade,
    ToastFade,
    ToastRemove,
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Runs `task` once after `delay`.
    fn schedule(&self, kind: TimerKind, delay: Duration, task: Task);
}

/// Runs each task on its own tokio task after sleeping. Must be used from
/// inside a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, kind: TimerKind, delay: Duration, task: Task) {
        debug!(?kind, delay_ms = delay.as_millis() as u64, "timer scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
