//! Player component and stable player identity.

use kickoff_logic::constants::{Color, Side};
use serde::{Deserialize, Serialize};

/// Identity of a player that outlives ECS handles: team plus roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId {
    pub side: Side,
    pub slot: usize,
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.side.label(), self.slot)
    }
}

/// An outfield player. Spawned at kickoff with `Position`, `Facing` and
/// `Body`; never despawned during a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub side: Side,
    pub slot: usize,
    pub color: Color,
    /// Receives this team's movement and shooting input.
    pub active: bool,
}

impl Player {
    pub fn new(side: Side, slot: usize, color: Color) -> Self {
        Self {
            side,
            slot,
            color,
            active: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        PlayerId {
            side: self.side,
            slot: self.slot,
        }
    }

    pub fn select(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
