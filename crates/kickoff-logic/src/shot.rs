//! Shot power from charge time.
//!
//! Holding the charge key accumulates time; on release the held duration is
//! normalized against the charge window and interpolated between the minimum
//! and maximum shot speeds.

use serde::{Deserialize, Serialize};

/// Shot power curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShotParams {
    /// Speed (pixels per tick) of an instant tap.
    pub min_power: f32,
    /// Speed of a fully charged shot.
    pub max_power: f32,
    /// Hold time that reaches full power, in milliseconds.
    pub max_charge_ms: u64,
}

impl Default for ShotParams {
    fn default() -> Self {
        Self {
            min_power: 5.0,
            max_power: 20.0,
            max_charge_ms: 2000,
        }
    }
}

impl ShotParams {
    /// Normalized charge in `[0, 1]` for a hold of `held_ms`.
    pub fn charge_fraction(&self, held_ms: u64) -> f32 {
        if self.max_charge_ms == 0 {
            return 1.0;
        }
        (held_ms as f32 / self.max_charge_ms as f32).clamp(0.0, 1.0)
    }

    /// Shot speed for a hold of `held_ms`.
    pub fn speed(&self, held_ms: u64) -> f32 {
        self.speed_for_fraction(self.charge_fraction(held_ms))
    }

    pub fn speed_for_fraction(&self, fraction: f32) -> f32 {
        self.min_power + (self.max_power - self.min_power) * fraction.clamp(0.0, 1.0)
    }
}
