//! Movement system - moves each team's active player by its input delta

use hecs::World;
use kickoff_logic::geometry::{FieldBounds, Vec2};

use crate::components::{Body, Facing, Position};
use crate::input::TeamIntent;
use crate::team::Team;

/// Move one player: turn to face the delta (only if nonzero), translate,
/// then clamp so the whole body stays on the field.
pub fn step_player(
    position: &mut Position,
    facing: &mut Facing,
    radius: f32,
    delta: Vec2,
    bounds: FieldBounds,
) {
    if let Some(dir) = delta.try_normalize() {
        facing.0 = dir;
    }
    position.0 = bounds.clamp_circle(position.0 + delta, radius);
}

/// Apply each team's intent to its active player. Idle teams are skipped.
pub fn movement_system(
    world: &mut World,
    teams: &[Team],
    intents: &[TeamIntent],
    bounds: FieldBounds,
) {
    for (team, intent) in teams.iter().zip(intents) {
        if intent.delta.is_zero() {
            continue;
        }
        let Some(entity) = team.active_player() else {
            continue;
        };
        if let Ok((pos, facing, body)) =
            world.query_one_mut::<(&mut Position, &mut Facing, &Body)>(entity)
        {
            step_player(pos, facing, body.radius, intent.delta, bounds);
        }
    }
}
