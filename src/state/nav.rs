//! Section navigation: one visible section, handed over with an exit/enter
//! animation pair.
//!
//! `Idle` → request for another section → `Exiting` (old section animates
//! out, control highlight moves at once) → exit timer → `Entering` (target
//! becomes the only active section and animates in) → enter timer → `Idle`.
//!
//! A request that arrives while `Exiting` preempts the pending hand-over: the
//! exit timer restarts toward the newest target and the section already on
//! its way out keeps leaving.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::{Ticket, TicketIssuer};
use crate::config::Timings;

/// Where the navigator is in a hand-over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    Exiting { from: String, to: String, ticket: Ticket },
    Entering { section: String, ticket: Ticket },
}

/// Which follow-up a scheduled timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTimer {
    ExitElapsed,
    EnterElapsed,
}

/// Page mutations requested by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Clear every control highlight, then highlight the control(s) targeting `section`.
    HighlightControl { section: String },
    /// Start the exit animation on `section`.
    AnimateExit { section: String },
    /// Clear `active` and animation classes on every section, then activate
    /// `section`, with the enter animation when `animate` is set.
    Activate { section: String, animate: bool },
    /// Drop the enter animation class from `section`.
    ClearAnimation { section: String },
    Schedule { ticket: Ticket, delay_ms: u32, timer: NavTimer },
}

#[derive(Debug)]
pub struct NavState {
    sections: Vec<String>,
    active: Option<String>,
    phase: NavPhase,
    tickets: TicketIssuer,
    exit_ms: u32,
    enter_ms: u32,
}

impl NavState {
    /// `sections` are the ids found in the page; `active` is whichever one
    /// the markup already shows, if any.
    #[must_use]
    pub fn new(sections: Vec<String>, active: Option<String>, timings: &Timings) -> Self {
        let active = active.filter(|id| sections.contains(id));
        Self {
            sections,
            active,
            phase: NavPhase::Idle,
            tickets: TicketIssuer::default(),
            exit_ms: timings.exit_ms,
            enter_ms: timings.enter_ms,
        }
    }

    /// The section currently carrying `active`.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> &NavPhase {
        &self.phase
    }

    /// Where the navigator is heading: the exit target while `Exiting`,
    /// otherwise the active section.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        match &self.phase {
            NavPhase::Exiting { to, .. } => Some(to.as_str()),
            _ => self.active(),
        }
    }

    #[must_use]
    pub fn knows(&self, section: &str) -> bool {
        self.sections.iter().any(|id| id == section)
    }

    /// Handle a click on a navigation control targeting `target`.
    pub fn request(&mut self, target: &str) -> Vec<NavEffect> {
        if !self.knows(target) {
            log::warn!("nav: no section with id '{target}'");
            return Vec::new();
        }
        if self.destination() == Some(target) {
            return Vec::new();
        }

        let highlight = NavEffect::HighlightControl { section: target.to_owned() };

        if let NavPhase::Exiting { from, .. } = &self.phase {
            let from = from.clone();
            let ticket = self.tickets.issue();
            log::debug!("nav: retargeting exit of '{from}' to '{target}'");
            self.phase = NavPhase::Exiting { from, to: target.to_owned(), ticket };
            return vec![highlight, self.schedule_exit(ticket)];
        }

        match self.active.clone() {
            Some(current) => {
                let ticket = self.tickets.issue();
                self.phase = NavPhase::Exiting { from: current.clone(), to: target.to_owned(), ticket };
                vec![
                    highlight,
                    NavEffect::AnimateExit { section: current },
                    self.schedule_exit(ticket),
                ]
            }
            None => {
                self.active = Some(target.to_owned());
                self.phase = NavPhase::Idle;
                vec![highlight, NavEffect::Activate { section: target.to_owned(), animate: false }]
            }
        }
    }

    /// Show `target` immediately, abandoning any hand-over in flight.
    pub fn force_activate(&mut self, target: &str) -> Vec<NavEffect> {
        if !self.knows(target) {
            log::warn!("nav: cannot activate unknown section '{target}'");
            return Vec::new();
        }
        self.active = Some(target.to_owned());
        self.phase = NavPhase::Idle;
        vec![
            NavEffect::HighlightControl { section: target.to_owned() },
            NavEffect::Activate { section: target.to_owned(), animate: false },
        ]
    }

    /// Handle a fired timer. Tickets that are no longer pending are ignored.
    pub fn on_timer(&mut self, ticket: Ticket, timer: NavTimer) -> Vec<NavEffect> {
        match (self.phase.clone(), timer) {
            (NavPhase::Exiting { to: section, ticket: pending, .. }, NavTimer::ExitElapsed) if pending == ticket => {
                let next = self.tickets.issue();
                self.active = Some(section.clone());
                self.phase = NavPhase::Entering { section: section.clone(), ticket: next };
                vec![
                    NavEffect::Activate { section, animate: true },
                    NavEffect::Schedule { ticket: next, delay_ms: self.enter_ms, timer: NavTimer::EnterElapsed },
                ]
            }
            (NavPhase::Entering { section, ticket: pending }, NavTimer::EnterElapsed) if pending == ticket => {
                self.phase = NavPhase::Idle;
                vec![NavEffect::ClearAnimation { section }]
            }
            _ => {
                log::debug!("nav: ignoring stale {timer:?}");
                Vec::new()
            }
        }
    }

    fn schedule_exit(&self, ticket: Ticket) -> NavEffect {
        NavEffect::Schedule { ticket, delay_ms: self.exit_ms, timer: NavTimer::ExitElapsed }
    }
}
