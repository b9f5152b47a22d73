//! Clock module - injectable millisecond time source
//!
//! Combo timing reads the clock at the moment a triple is removed. Tests use
//! [`ManualClock`] to step time explicitly; the terminal binary uses
//! [`MonotonicClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond time source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since construction, backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock.
///
/// Clones share the same time, so a test can keep a handle while the session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(100);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_ms(), 350);
        clock.set(10);
        assert_eq!(handle.now_ms(), 10);
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
