//! Cancellable follow-up timers.

use gloo_timers::callback::Timeout;

/// Holds at most one pending timeout. Scheduling a new one drops, and so
/// cancels, whatever was pending.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(delay_ms, callback));
    }
}
