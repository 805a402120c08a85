//! Single-flight guard with a cooldown window.
//!
//! The first call fires and opens the window; calls landing inside the
//! window are swallowed. Time comes from the tokio clock, so paused-time
//! tests can step through the window deterministically.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct Cooldown {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// True while a previous firing is still inside its window.
    pub fn is_cooling(&self) -> bool {
        self.last_fired
            .is_some_and(|at| at.elapsed() < self.window)
    }

    /// Runs `action` unless the guard is cooling. Returns whether it ran.
    pub fn try_fire(&mut self, action: impl FnOnce()) -> bool {
        if self.is_cooling() {
            return false;
        }
        self.last_fired = Some(Instant::now());
        action();
        true
    }
}
