//! Ball component and its possession state machine.
//!
//! ```text
//!   Free ──touch──▶ Held ──charge pressed──▶ Charging
//!    ▲                                          │
//!    └──────────── charge released (shot) ──────┘
//!   goal: any state ──▶ Free (reset to centre spot)
//! ```

use hecs::Entity;

use super::Vec2;

/// Who has the ball.
///
/// Holder handles are weak: the ball never owns a player, and a handle that
/// no longer resolves is treated as a loose ball by the systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Possession {
    /// Loose, moving under its own velocity.
    #[default]
    Free,
    /// Carried in front of a player.
    Held { by: Entity },
    /// Carried while the holder's team holds the charge key.
    Charging { by: Entity, since_ms: u64 },
}

impl Possession {
    pub fn holder(&self) -> Option<Entity> {
        match *self {
            Possession::Free => None,
            Possession::Held { by } | Possession::Charging { by, .. } => Some(by),
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self, Possession::Charging { .. })
    }

    /// Timestamp the current charge began, if charging.
    pub fn charge_started_at(&self) -> Option<u64> {
        match *self {
            Possession::Charging { since_ms, .. } => Some(since_ms),
            _ => None,
        }
    }
}

/// The match ball. Paired with `Position` and `Body` on its entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ball {
    /// Pixels per tick. Always zero while held.
    pub velocity: Vec2,
    pub possession: Possession,
}

impl Ball {
    pub fn new(velocity: Vec2) -> Self {
        Self {
            velocity,
            possession: Possession::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.possession.holder().is_none()
    }

    /// Free → Held. Kills the ball's own velocity.
    pub fn attach(&mut self, player: Entity) {
        self.possession = Possession::Held { by: player };
        self.velocity = Vec2::ZERO;
    }

    /// Held → Charging. Returns false (and changes nothing) unless held.
    pub fn start_charging(&mut self, now_ms: u64) -> bool {
        match self.possession {
            Possession::Held { by } => {
                self.possession = Possession::Charging {
                    by,
                    since_ms: now_ms,
                };
                true
            }
            _ => false,
        }
    }

    /// Charging → Free with the given launch velocity.
    pub fn launch(&mut self, velocity: Vec2) {
        self.possession = Possession::Free;
        self.velocity = velocity;
    }

    /// Dead ball: no holder, no charge, no motion.
    pub fn reset(&mut self) {
        self.possession = Possession::Free;
        self.velocity = Vec2::ZERO;
    }
}
