//! Project dialog lifecycle.
//!
//! `Hidden` → open → `Revealing` (content rendered, dialog displayed, page
//! scroll locked) → reveal timer → `Open` (active class, focus on the close
//! control) → close → `Closing` (active class removed) → hide timer →
//! `Hidden` (dialog hidden, scroll restored, focus back on the trigger).
//!
//! The trigger type is generic so the machine can hold a browser element in
//! the page binding and a plain label in tests.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use super::{Ticket, TicketIssuer};
use crate::catalog::Catalog;
use crate::config::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    Revealing { ticket: Ticket },
    Open,
    Closing { ticket: Ticket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTimer {
    Reveal,
    Hide,
}

/// Page mutations requested by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect<T> {
    /// Render the record into the dialog body and label the dialog with `title`.
    Render { project_id: String, title: String },
    /// Make the dialog container displayed (not yet active).
    Show,
    LockScroll,
    Schedule { ticket: Ticket, delay_ms: u32, timer: ModalTimer },
    /// Add the active class, starting the entrance transition.
    Activate,
    FocusClose,
    /// Remove the active class, starting the exit transition.
    Deactivate,
    /// Take the dialog container out of the layout.
    Hide,
    UnlockScroll,
    RestoreFocus(T),
}

/// Which of the two trigger listeners saw a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerListener {
    /// Attached to the trigger at setup.
    Direct,
    /// Document-level, for triggers added after setup.
    Delegated,
}

impl TriggerListener {
    /// Whether this listener takes the click, cancelling its default action
    /// and opening the dialog. `bound` marks triggers that carry a direct
    /// listener, so every click is taken exactly once.
    #[must_use]
    pub fn claims(self, bound: bool) -> bool {
        match self {
            Self::Direct => true,
            Self::Delegated => !bound,
        }
    }
}

#[derive(Debug)]
pub struct ModalState<T> {
    phase: ModalPhase,
    project: Option<String>,
    trigger: Option<T>,
    scroll_locked: bool,
    tickets: TicketIssuer,
    reveal_ms: u32,
    close_ms: u32,
}

impl<T> ModalState<T> {
    #[must_use]
    pub fn new(timings: &Timings) -> Self {
        Self {
            phase: ModalPhase::Hidden,
            project: None,
            trigger: None,
            scroll_locked: false,
            tickets: TicketIssuer::default(),
            reveal_ms: timings.reveal_ms,
            close_ms: timings.close_ms,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// The project currently rendered into the dialog.
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    #[must_use]
    pub fn trigger(&self) -> Option<&T> {
        self.trigger.as_ref()
    }

    /// Whether the dialog carries the active class.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Whether the dialog container is displayed at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Open the dialog for `project_id`. Unknown ids change nothing.
    ///
    /// Opening while the dialog is closing cancels the pending hide and
    /// reveals the new record instead.
    pub fn open(&mut self, catalog: &Catalog, project_id: &str, trigger: T) -> Vec<ModalEffect<T>> {
        let Some(record) = catalog.get(project_id) else {
            return Vec::new();
        };

        let ticket = self.tickets.issue();
        let mut effects = vec![
            ModalEffect::Render { project_id: record.id.clone(), title: record.title.clone() },
            ModalEffect::Show,
        ];
        if !self.scroll_locked {
            self.scroll_locked = true;
            effects.push(ModalEffect::LockScroll);
        }
        effects.push(ModalEffect::Schedule { ticket, delay_ms: self.reveal_ms, timer: ModalTimer::Reveal });

        self.project = Some(record.id.clone());
        self.trigger = Some(trigger);
        self.phase = ModalPhase::Revealing { ticket };
        effects
    }

    /// Start closing. A no-op unless the dialog is revealing or open.
    pub fn close(&mut self) -> Vec<ModalEffect<T>> {
        match self.phase {
            ModalPhase::Revealing { .. } | ModalPhase::Open => {
                let ticket = self.tickets.issue();
                self.phase = ModalPhase::Closing { ticket };
                vec![
                    ModalEffect::Deactivate,
                    ModalEffect::Schedule { ticket, delay_ms: self.close_ms, timer: ModalTimer::Hide },
                ]
            }
            ModalPhase::Hidden | ModalPhase::Closing { .. } => Vec::new(),
        }
    }

    /// Escape closes the dialog only while it is active.
    pub fn on_escape(&mut self) -> Vec<ModalEffect<T>> {
        if self.is_active() { self.close() } else { Vec::new() }
    }

    /// Handle a fired timer. Tickets that are no longer pending are ignored.
    pub fn on_timer(&mut self, ticket: Ticket, timer: ModalTimer) -> Vec<ModalEffect<T>> {
        match (self.phase, timer) {
            (ModalPhase::Revealing { ticket: pending }, ModalTimer::Reveal) if pending == ticket => {
                self.phase = ModalPhase::Open;
                vec![ModalEffect::Activate, ModalEffect::FocusClose]
            }
            (ModalPhase::Closing { ticket: pending }, ModalTimer::Hide) if pending == ticket => {
                self.phase = ModalPhase::Hidden;
                self.project = None;
                self.scroll_locked = false;
                let mut effects = vec![ModalEffect::Hide, ModalEffect::UnlockScroll];
                if let Some(trigger) = self.trigger.take() {
                    effects.push(ModalEffect::RestoreFocus(trigger));
                }
                effects
            }
            _ => {
                log::debug!("modal: ignoring stale {timer:?}");
                Vec::new()
            }
        }
    }
}
