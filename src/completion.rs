//! One-shot completion handles for transitions.
//!
//! A [`Completion`] is handed to a strategy or driver and consumed by
//! [`Completion::fire`], so it can fire at most once. The matching
//! [`CompletionWatch`] stays with the popup, which polls it after every call
//! into the strategy and after every driver tick.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Pending,
    Fired,
    Abandoned,
}

/// Sending half: signals that a transition finished
pub struct Completion {
    slot: Rc<Cell<Slot>>,
    fired: bool,
}

/// Receiving half, owned by the popup
#[derive(Debug)]
pub struct CompletionWatch {
    slot: Rc<Cell<Slot>>,
}

/// Create a linked completion / watch pair
pub fn completion() -> (Completion, CompletionWatch) {
    let slot = Rc::new(Cell::new(Slot::Pending));
    (
        Completion {
            slot: slot.clone(),
            fired: false,
        },
        CompletionWatch { slot },
    )
}

impl Completion {
    /// Mark the transition as finished
    pub fn fire(mut self) {
        self.fired = true;
        self.slot.set(Slot::Fired);
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.fired {
            return;
        }
        // Nobody is watching once the popup itself is gone
        if Rc::strong_count(&self.slot) > 1 {
            log::warn!("transition completion dropped without firing");
        }
        self.slot.set(Slot::Abandoned);
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("state", &self.slot.get())
            .finish()
    }
}

impl CompletionWatch {
    pub fn is_fired(&self) -> bool {
        self.slot.get() == Slot::Fired
    }

    /// True when the sending half was dropped without firing
    pub fn is_abandoned(&self) -> bool {
        self.slot.get() == Slot::Abandoned
    }
}
