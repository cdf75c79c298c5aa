//! Browser-free controller state machines.
//!
//! DESIGN
//! ======
//! Each machine takes an input (a click, a key, a fired timer) and returns the
//! effects the page binding must apply, in order. Follow-up timers are
//! requested as `Schedule` effects carrying a [`Ticket`]; when the timer fires
//! the binding hands the ticket back and the machine ignores it unless it is
//! still the one it is waiting for. That makes every pending timer
//! cancellable: issuing a new ticket is enough to retire the old one.

pub mod focus;
pub mod lightbox;
pub mod modal;
pub mod nav;
pub mod trail;

/// Identifies one scheduled follow-up of a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}
