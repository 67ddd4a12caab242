//! Flight Guard
//!
//! Single-slot lock serializing add-to-cart flights. Acquiring hands out a
//! `FlightToken`; the slot frees itself when the token is dropped, whether the
//! flight landed or was aborted.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct FlightGuard {
    busy: Rc<Cell<bool>>,
}

impl FlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another token is alive
    pub fn try_acquire(&self) -> Option<FlightToken> {
        if self.busy.replace(true) {
            return None;
        }
        Some(FlightToken {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Exclusive ownership of the flight slot
pub struct FlightToken {
    busy: Rc<Cell<bool>>,
}

impl Drop for FlightToken {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
