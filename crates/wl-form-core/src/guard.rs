//! Per-action in-flight tracking.
//!
//! Each remote action moves `Idle -> InFlight -> Idle`. Cancelling moves an
//! in-flight action to `Cancelled`; its response is then discarded when it
//! arrives. Uses `RefCell`/`Cell` (single-threaded UI loop).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    InFlight,
    Cancelled,
}

/// What to do with a response when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Apply,
    Discard,
}

/// Identifies one dispatch of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    action: Action,
    generation: u64,
}

impl Ticket {
    pub fn action(&self) -> Action {
        self.action
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    InFlight(u64),
    Cancelled(u64),
}

#[derive(Debug, Default)]
pub struct InFlightGuard {
    slots: RefCell<HashMap<Action, Slot>>,
    next_generation: Cell<u64>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a dispatch, or returns `None` while the action is in flight.
    /// A cancelled action may be restarted before its old response lands.
    pub fn begin(&self, action: Action) -> Option<Ticket> {
        let mut slots = self.slots.borrow_mut();
        if let Some(Slot::InFlight(_)) = slots.get(&action) {
            return None;
        }
        let generation = self.next_generation.get() + 1;
        self.next_generation.set(generation);
        slots.insert(action, Slot::InFlight(generation));
        Some(Ticket { action, generation })
    }

    /// Returns `true` if the action was in flight.
    pub fn cancel(&self, action: Action) -> bool {
        let mut slots = self.slots.borrow_mut();
        match slots.get(&action).copied() {
            Some(Slot::InFlight(generation)) => {
                slots.insert(action, Slot::Cancelled(generation));
                true
            }
            _ => false,
        }
    }

    /// Cancels everything in flight, returning the affected actions.
    pub fn cancel_all(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.cancel(*action))
            .collect()
    }

    pub fn finish(&self, ticket: Ticket) -> Completion {
        let mut slots = self.slots.borrow_mut();
        match slots.get(&ticket.action).copied() {
            Some(Slot::InFlight(generation)) if generation == ticket.generation => {
                slots.remove(&ticket.action);
                Completion::Apply
            }
            Some(Slot::Cancelled(generation)) if generation == ticket.generation => {
                slots.remove(&ticket.action);
                Completion::Discard
            }
            _ => Completion::Discard,
        }
    }

    pub fn state(&self, action: Action) -> ActionState {
        match self.slots.borrow().get(&action) {
            None => ActionState::Idle,
            Some(Slot::InFlight(_)) => ActionState::InFlight,
            Some(Slot::Cancelled(_)) => ActionState::Cancelled,
        }
    }
}
