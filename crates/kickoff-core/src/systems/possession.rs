//! Shooting system - charge while the key is held, shoot on release

use hecs::{Entity, World};
use kickoff_logic::config::MatchConfig;

use super::{copied, player_id};
use crate::components::{Ball, Body, Facing, Position, Possession};
use crate::events::MatchEvent;
use crate::input::TeamIntent;
use crate::team::Team;

/// Advance the charge/shot state machine for one team's input.
///
/// - Held by this team's active player and charge down → start charging.
/// - Charging by one of this team's players and charge up → shoot.
///
/// The charging player is read straight from the possession state, so a
/// team that switches its active player mid-charge still shoots with the
/// player holding the ball.
pub fn charge_system(
    world: &mut World,
    ball_entity: Entity,
    team: &Team,
    intent: &TeamIntent,
    now_ms: u64,
    config: &MatchConfig,
) -> Option<MatchEvent> {
    let possession = copied::<Ball>(world, ball_entity)?.possession;
    match possession {
        Possession::Held { by } if intent.charge_held && team.active_player() == Some(by) => {
            let started = world
                .get::<&mut Ball>(ball_entity)
                .ok()?
                .start_charging(now_ms);
            if !started {
                return None;
            }
            let player = player_id(world, by)?;
            log::debug!("{} starts charging at {}ms", player, now_ms);
            Some(MatchEvent::ChargeStarted {
                player,
                at_ms: now_ms,
            })
        }
        Possession::Charging { by, since_ms } if !intent.charge_held && team.contains(by) => {
            release_shot(world, ball_entity, by, now_ms.saturating_sub(since_ms), config)
        }
        _ => None,
    }
}

/// Launch the ball along the shooter's facing. Speed comes from the shot
/// curve; the ball is placed just clear of the shooter so it cannot be
/// picked straight back up.
pub fn release_shot(
    world: &mut World,
    ball_entity: Entity,
    shooter: Entity,
    held_ms: u64,
    config: &MatchConfig,
) -> Option<MatchEvent> {
    let origin = copied::<Position>(world, shooter)?.0;
    let dir = copied::<Facing>(world, shooter)?.0;
    let shooter_radius = copied::<Body>(world, shooter)?.radius;
    let ball_radius = copied::<Body>(world, ball_entity)?.radius;
    let player = player_id(world, shooter)?;

    let charge_fraction = config.shot.charge_fraction(held_ms);
    let speed = config.shot.speed_for_fraction(charge_fraction);

    let (ball, pos) = world
        .query_one_mut::<(&mut Ball, &mut Position)>(ball_entity)
        .ok()?;
    pos.0 = origin + dir * (shooter_radius + ball_radius + config.shot_clearance);
    ball.launch(dir * speed);

    log::debug!(
        "{} shoots: held {}ms, charge {:.2}, speed {:.1}",
        player,
        held_ms,
        charge_fraction,
        speed
    );
    Some(MatchEvent::ShotReleased {
        player,
        speed,
        charge_fraction,
    })
}
