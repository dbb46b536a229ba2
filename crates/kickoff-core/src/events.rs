//! Match events emitted by `MatchEngine::update`, in the order they happen
//! within a tick.

use kickoff_logic::constants::Side;
use kickoff_logic::scoreboard::Verdict;
use serde::{Deserialize, Serialize};

use crate::components::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A team handed control to another roster slot.
    ActivePlayerChanged { player: PlayerId },
    /// A loose ball touched a player and is now carried.
    PossessionGained { player: PlayerId },
    ChargeStarted { player: PlayerId, at_ms: u64 },
    ShotReleased {
        player: PlayerId,
        speed: f32,
        charge_fraction: f32,
    },
    GoalScored { scorer: Side, home: u32, away: u32 },
    FullTime { home: u32, away: u32, verdict: Verdict },
}

impl MatchEvent {
    pub fn is_goal(&self) -> bool {
        matches!(self, MatchEvent::GoalScored { .. })
    }
}
