//! Pickup system - a loose ball sticks to the first player touching it

use hecs::{Entity, World};
use kickoff_logic::geometry::circles_touch;

use super::{copied, player_id};
use crate::components::{Ball, Body, Position};
use crate::events::MatchEvent;
use crate::team::Team;

/// Attach a loose ball to the first touching player, scanning teams in the
/// order given (home before away) and each roster in slot order. No
/// closest-player tie-break: first match wins, at most once per tick.
pub fn attach_system(world: &mut World, ball_entity: Entity, teams: &[Team]) -> Option<MatchEvent> {
    let ball = copied::<Ball>(world, ball_entity)?;
    if !ball.is_free() {
        return None;
    }
    let ball_pos = copied::<Position>(world, ball_entity)?.0;
    let ball_radius = copied::<Body>(world, ball_entity)?.radius;

    let taker = teams
        .iter()
        .flat_map(|team| team.roster.iter().copied())
        .find(|&player| {
            match (copied::<Position>(world, player), copied::<Body>(world, player)) {
                (Some(pos), Some(body)) => circles_touch(pos.0, body.radius, ball_pos, ball_radius),
                _ => false,
            }
        })?;

    world.get::<&mut Ball>(ball_entity).ok()?.attach(taker);

    let player = player_id(world, taker)?;
    log::debug!("{} picks up the ball", player);
    Some(MatchEvent::PossessionGained { player })
}
