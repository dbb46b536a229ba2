//! Goal mouths.

use kickoff_logic::constants::Side;
use kickoff_logic::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A goal rectangle and the team credited when the ball centre enters it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub rect: Rect,
    pub scorer: Side,
}

impl Goal {
    pub fn new(rect: Rect, scorer: Side) -> Self {
        Self { rect, scorer }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}
