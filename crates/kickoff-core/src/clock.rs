//! Millisecond time source for the frame loop
//!
//! The engine only ever sees `now_ms` values, so a match can be driven by
//! the wall clock or by a hand-advanced clock in tests and the harness.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Milliseconds since the clock was created.
    fn now_ms(&self) -> u64;

    /// Wait for `duration` before the next frame.
    fn sleep(&mut self, duration: Duration);
}

/// Monotonic wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only moves when told to. Sleeping advances it instantly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration.as_millis() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_on_sleep() {
        let mut clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.sleep(Duration::from_millis(16));
        assert_eq!(clock.now_ms(), 116);
        clock.advance(884);
        assert_eq!(clock.now_ms(), 1_000);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep(Duration::from_millis(2));
        assert!(clock.now_ms() >= before + 2);
    }
}
