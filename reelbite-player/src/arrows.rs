//! Navigation-arrow visibility debounce.
//!
//! Leading-edge show with trailing hide: any scroll event makes the arrows
//! visible immediately and re-arms the decay deadline; the arrows hide once
//! the deadline passes without a newer event. Time is injected so the
//! behaviour is testable without real timers.

use std::time::{Duration, Instant};

/// How long the arrows stay visible after the last scroll event.
pub const ARROW_HIDE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub struct ArrowVisibility {
    deadline: Option<Instant>,
}

impl ArrowVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scroll event: show and (re)arm the decay timer.
    pub fn on_scroll(&mut self, now: Instant) {
        self.deadline = Some(now + ARROW_HIDE_DELAY);
    }

    /// Advance time; hides the arrows when the deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.deadline.is_some()
    }
}
