//! Match clock arithmetic on millisecond timestamps.

use serde::{Deserialize, Serialize};

/// Fixed-length match timer anchored at the kickoff timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchTimer {
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl MatchTimer {
    pub fn new(start_ms: u64, duration_ms: u64) -> Self {
        Self {
            start_ms,
            duration_ms,
        }
    }

    /// Time since kickoff. A timestamp before kickoff counts as zero.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= self.duration_ms
    }

    /// Whole seconds left on the scoreboard, never negative.
    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms)) / 1000
    }
}
