//! Lightbox lifecycle: one enlarged image above the dialog.
//!
//! Every open builds a fresh overlay instance; closing detaches it for good.
//! At most one instance exists: opening while another is on the page
//! detaches the old one immediately and retires its pending timer.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use super::{Ticket, TicketIssuer};
use crate::config::Timings;

/// Identifies one overlay instance in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightboxId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxPhase {
    Opening { ticket: Ticket },
    Open,
    Closing { ticket: Ticket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTimer {
    Reveal,
    Detach,
}

/// Page mutations requested by the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEffect {
    /// Build an overlay for the image and append it to the page.
    Mount { id: LightboxId, path: String, alt_text: String },
    Activate { id: LightboxId },
    Deactivate { id: LightboxId },
    /// Remove the overlay from the page and drop its listeners.
    Detach { id: LightboxId },
    /// Swap the overlay image for the placeholder.
    SubstitutePlaceholder { id: LightboxId },
    Schedule { ticket: Ticket, delay_ms: u32, timer: LightboxTimer },
}

#[derive(Debug)]
struct Instance {
    id: LightboxId,
    phase: LightboxPhase,
    showing_placeholder: bool,
}

#[derive(Debug)]
pub struct LightboxState {
    current: Option<Instance>,
    next_id: u64,
    tickets: TicketIssuer,
    reveal_ms: u32,
    close_ms: u32,
}

impl LightboxState {
    #[must_use]
    pub fn new(timings: &Timings) -> Self {
        Self {
            current: None,
            next_id: 0,
            tickets: TicketIssuer::default(),
            reveal_ms: timings.reveal_ms,
            close_ms: timings.close_ms,
        }
    }

    /// The overlay currently in the page, if any.
    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<LightboxId> {
        self.current.as_ref().map(|instance| instance.id)
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Option<LightboxPhase> {
        self.current.as_ref().map(|instance| instance.phase)
    }

    /// The overlay that owns keyboard input: mounted and not on its way out.
    #[must_use]
    pub fn showing(&self) -> Option<LightboxId> {
        self.current
            .as_ref()
            .filter(|instance| !matches!(instance.phase, LightboxPhase::Closing { .. }))
            .map(|instance| instance.id)
    }

    /// Close whichever overlay is showing. Empty when none is.
    pub fn close_current(&mut self) -> Vec<LightboxEffect> {
        match self.showing() {
            Some(id) => self.close(id),
            None => Vec::new(),
        }
    }

    /// Escape belongs to the lightbox while one is showing, since it sits
    /// above the dialog. `None` passes the key on to the dialog.
    pub fn on_escape(&mut self) -> Option<Vec<LightboxEffect>> {
        self.showing()?;
        Some(self.close_current())
    }

    /// Open a new overlay for `path`, replacing any existing one.
    pub fn open(&mut self, path: &str, alt_text: &str) -> Vec<LightboxEffect> {
        let mut effects = Vec::new();
        if let Some(previous) = self.current.take() {
            log::debug!("lightbox: replacing open overlay {:?}", previous.id);
            effects.push(LightboxEffect::Detach { id: previous.id });
        }

        self.next_id += 1;
        let id = LightboxId(self.next_id);
        let ticket = self.tickets.issue();
        self.current = Some(Instance { id, phase: LightboxPhase::Opening { ticket }, showing_placeholder: false });

        effects.push(LightboxEffect::Mount { id, path: path.to_owned(), alt_text: alt_text.to_owned() });
        effects.push(LightboxEffect::Schedule { ticket, delay_ms: self.reveal_ms, timer: LightboxTimer::Reveal });
        effects
    }

    /// Start closing overlay `id`. Stale or already closing overlays are ignored.
    pub fn close(&mut self, id: LightboxId) -> Vec<LightboxEffect> {
        let close_ms = self.close_ms;
        let Some(instance) = self.current.as_mut().filter(|instance| instance.id == id) else {
            return Vec::new();
        };
        if matches!(instance.phase, LightboxPhase::Closing { .. }) {
            return Vec::new();
        }
        let ticket = self.tickets.issue();
        instance.phase = LightboxPhase::Closing { ticket };
        vec![
            LightboxEffect::Deactivate { id },
            LightboxEffect::Schedule { ticket, delay_ms: close_ms, timer: LightboxTimer::Detach },
        ]
    }

    /// The overlay image failed to load. Swaps in the placeholder once.
    pub fn on_image_error(&mut self, id: LightboxId) -> Vec<LightboxEffect> {
        match self.current.as_mut() {
            Some(instance) if instance.id == id && !instance.showing_placeholder => {
                instance.showing_placeholder = true;
                vec![LightboxEffect::SubstitutePlaceholder { id }]
            }
            _ => Vec::new(),
        }
    }

    /// Handle a fired timer. Tickets that are no longer pending are ignored.
    pub fn on_timer(&mut self, ticket: Ticket, timer: LightboxTimer) -> Vec<LightboxEffect> {
        let Some(instance) = self.current.as_mut() else {
            return Vec::new();
        };
        let id = instance.id;
        match (instance.phase, timer) {
            (LightboxPhase::Opening { ticket: pending }, LightboxTimer::Reveal) if pending == ticket => {
                instance.phase = LightboxPhase::Open;
                vec![LightboxEffect::Activate { id }]
            }
            (LightboxPhase::Closing { ticket: pending }, LightboxTimer::Detach) if pending == ticket => {
                self.current = None;
                vec![LightboxEffect::Detach { id }]
            }
            _ => {
                log::debug!("lightbox: ignoring stale {timer:?}");
                Vec::new()
            }
        }
    }
}
