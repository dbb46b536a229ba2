//! Systems - logic that operates on components
//!
//! Run once per tick by `MatchEngine::update`, in this order: movement,
//! shooting, ball flight, pickup, goals.

mod ball;
mod collision;
mod movement;
mod possession;
mod scoring;

pub use ball::*;
pub use collision::*;
pub use movement::*;
pub use possession::*;
pub use scoring::*;

use hecs::{Component, Entity, World};

use crate::components::{Player, PlayerId};

/// Copy a component out of the world so no borrow outlives the read.
pub(crate) fn copied<T: Component + Copy>(world: &World, entity: Entity) -> Option<T> {
    world.get::<&T>(entity).ok().map(|c| *c)
}

pub(crate) fn player_id(world: &World, entity: Entity) -> Option<PlayerId> {
    copied::<Player>(world, entity).map(|p| p.id())
}
