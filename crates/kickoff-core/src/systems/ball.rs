//! Ball system - carried balls follow their holder, loose balls fly and
//! bounce off the side lines

use hecs::{Entity, World};
use kickoff_logic::geometry::{FieldBounds, Vec2};

use super::copied;
use crate::components::{Ball, Body, Facing, Position, Possession};

/// Where a carried ball sits: in front of the holder along its facing, with
/// `gap` pixels between the two bodies.
pub fn carry_position(holder: Vec2, facing: Vec2, holder_radius: f32, ball_radius: f32, gap: f32) -> Vec2 {
    holder + facing * (holder_radius + ball_radius + gap)
}

/// Advance the ball one tick.
pub fn ball_system(world: &mut World, ball_entity: Entity, bounds: FieldBounds, gap: f32) {
    let Some(mut ball) = copied::<Ball>(world, ball_entity) else {
        return;
    };
    let Some(mut pos) = copied::<Position>(world, ball_entity) else {
        return;
    };
    let Some(body) = copied::<Body>(world, ball_entity) else {
        return;
    };

    match ball.possession.holder() {
        Some(holder) => {
            let anchor = copied::<Position>(world, holder)
                .zip(copied::<Facing>(world, holder))
                .zip(copied::<Body>(world, holder));
            match anchor {
                Some(((holder_pos, facing), holder_body)) => {
                    pos.0 = carry_position(
                        holder_pos.0,
                        facing.0,
                        holder_body.radius,
                        body.radius,
                        gap,
                    );
                    ball.velocity = Vec2::ZERO;
                }
                None => {
                    log::warn!("ball holder {:?} no longer exists, dropping the ball", holder);
                    ball.possession = Possession::Free;
                    ball.velocity = Vec2::ZERO;
                }
            }
        }
        None => {
            pos.0 += ball.velocity;
            ball.velocity = bounds.reflect(pos.0, body.radius, ball.velocity);
        }
    }

    if let Ok((b, p)) = world.query_one_mut::<(&mut Ball, &mut Position)>(ball_entity) {
        *b = ball;
        *p = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Player, PlayerId};
    use kickoff_logic::constants::{colors, Side};

    fn field() -> FieldBounds {
        FieldBounds::new(800.0, 600.0)
    }

    fn spawn_ball(world: &mut World, at: Vec2, velocity: Vec2) -> Entity {
        world.spawn((Ball::new(velocity), Position(at), Body { radius: 5.0 }))
    }

    fn spawn_player(world: &mut World, at: Vec2, facing: Vec2) -> Entity {
        world.spawn((
            Player::new(Side::Home, 1, colors::RED),
            Position(at),
            Facing(facing),
            Body { radius: 20.0 },
        ))
    }

    #[test]
    fn free_ball_flies_by_velocity() {
        let mut world = World::new();
        let ball = spawn_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 3.0));
        ball_system(&mut world, ball, field(), 5.0);
        assert_eq!(copied::<Position>(&world, ball).unwrap().0, Vec2::new(404.0, 303.0));
        assert_eq!(copied::<Ball>(&world, ball).unwrap().velocity, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn free_ball_bounces_off_bottom_line() {
        let mut world = World::new();
        let ball = spawn_ball(&mut world, Vec2::new(400.0, 592.0), Vec2::new(4.0, 3.0));
        ball_system(&mut world, ball, field(), 5.0);
        // centre 595 + radius 5 reaches the line
        assert_eq!(copied::<Ball>(&world, ball).unwrap().velocity, Vec2::new(4.0, -3.0));
    }

    #[test]
    fn carried_ball_sits_in_front_of_holder() {
        let mut world = World::new();
        let holder = spawn_player(&mut world, Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0));
        let ball = spawn_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 3.0));
        world.get::<&mut Ball>(ball).unwrap().attach(holder);

        ball_system(&mut world, ball, field(), 5.0);
        assert_eq!(copied::<Position>(&world, ball).unwrap().0, Vec2::new(130.0, 300.0));
        assert_eq!(copied::<Ball>(&world, ball).unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn carried_ball_ignores_walls() {
        let mut world = World::new();
        let holder = spawn_player(&mut world, Vec2::new(20.0, 100.0), Vec2::new(-1.0, 0.0));
        let ball = spawn_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::ZERO);
        world.get::<&mut Ball>(ball).unwrap().attach(holder);

        for _ in 0..3 {
            ball_system(&mut world, ball, field(), 5.0);
        }
        let b = copied::<Ball>(&world, ball).unwrap();
        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(copied::<Position>(&world, ball).unwrap().0, Vec2::new(-10.0, 100.0));
        assert_eq!(
            copied::<Player>(&world, holder).map(|p| p.id()),
            Some(PlayerId {
                side: Side::Home,
                slot: 1
            })
        );
    }

    #[test]
    fn vanished_holder_drops_the_ball() {
        let mut world = World::new();
        let holder = spawn_player(&mut world, Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0));
        let ball = spawn_ball(&mut world, Vec2::new(130.0, 300.0), Vec2::ZERO);
        world.get::<&mut Ball>(ball).unwrap().attach(holder);
        world.despawn(holder).unwrap();

        ball_system(&mut world, ball, field(), 5.0);
        assert!(copied::<Ball>(&world, ball).unwrap().is_free());
    }
}
