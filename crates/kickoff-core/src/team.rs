//! Teams: roster ownership, active-player selection and the score.

use hecs::{Entity, World};
use kickoff_logic::config::MatchConfig;
use kickoff_logic::constants::Side;
use kickoff_logic::geometry::Vec2;

use crate::components::{Body, Facing, Player, Position};
use crate::input::ControlScheme;

/// One side of the match. Owns its players' entities for the whole match;
/// everything else refers to them by handle.
#[derive(Debug, Clone)]
pub struct Team {
    pub side: Side,
    /// Player entities in slot order.
    pub roster: Vec<Entity>,
    /// Only ever incremented.
    pub score: u32,
    pub active_index: usize,
    pub controls: ControlScheme,
}

impl Team {
    /// Spawn the team's players at their formation spots, facing right,
    /// with slot 0 active.
    pub fn spawn(
        world: &mut World,
        config: &MatchConfig,
        side: Side,
        controls: ControlScheme,
    ) -> Self {
        let color = config.kit(side);
        let roster = config
            .formation(side)
            .iter()
            .enumerate()
            .map(|(slot, spot)| {
                world.spawn((
                    Player::new(side, slot, color),
                    Position(*spot),
                    Facing(Vec2::RIGHT),
                    Body {
                        radius: config.player_radius,
                    },
                ))
            })
            .collect();

        let mut team = Self {
            side,
            roster,
            score: 0,
            active_index: 0,
            controls,
        };
        team.select(world, 0);
        team
    }

    pub fn active_player(&self) -> Option<Entity> {
        self.roster.get(self.active_index).copied()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.roster.contains(&entity)
    }

    pub fn deactivate_all(&self, world: &mut World) {
        for &entity in &self.roster {
            if let Ok(mut player) = world.get::<&mut Player>(entity) {
                player.deactivate();
            }
        }
    }

    /// Make `slot` the only active player. Out-of-range slots change nothing.
    pub fn select(&mut self, world: &mut World, slot: usize) -> Option<Entity> {
        let entity = *self.roster.get(slot)?;
        self.deactivate_all(world);
        if let Ok(mut player) = world.get::<&mut Player>(entity) {
            player.select();
        }
        self.active_index = slot;
        Some(entity)
    }

    /// Hand control to the next slot, wrapping at the end of the roster.
    pub fn activate_next(&mut self, world: &mut World) -> Option<Entity> {
        if self.roster.is_empty() {
            return None;
        }
        let next = (self.active_index + 1) % self.roster.len();
        self.select(world, next)
    }

    /// Credit a goal and return the new score.
    pub fn award_goal(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_slots(world: &World, team: &Team) -> Vec<usize> {
        team.roster
            .iter()
            .filter_map(|&e| world.get::<&Player>(e).ok().map(|p| *p))
            .filter(|p| p.active)
            .map(|p| p.slot)
            .collect()
    }

    #[test]
    fn spawn_activates_first_slot() {
        let mut world = World::new();
        let team = Team::spawn(
            &mut world,
            &MatchConfig::default(),
            Side::Home,
            ControlScheme::wasd(),
        );
        assert_eq!(team.roster.len(), 3);
        assert_eq!(active_slots(&world, &team), vec![0]);
        let pos = world.get::<&Position>(team.roster[1]).unwrap();
        assert_eq!(pos.0, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn activate_next_wraps() {
        let mut world = World::new();
        let mut team = Team::spawn(
            &mut world,
            &MatchConfig::default(),
            Side::Away,
            ControlScheme::arrows(),
        );
        team.activate_next(&mut world);
        assert_eq!(active_slots(&world, &team), vec![1]);
        team.activate_next(&mut world);
        team.activate_next(&mut world);
        assert_eq!(team.active_index, 0);
        assert_eq!(active_slots(&world, &team), vec![0]);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut world = World::new();
        let mut team = Team::spawn(
            &mut world,
            &MatchConfig::default(),
            Side::Home,
            ControlScheme::wasd(),
        );
        assert!(team.select(&mut world, 7).is_none());
        assert_eq!(active_slots(&world, &team), vec![0]);
    }

    #[test]
    fn empty_roster_has_no_active_player() {
        let mut world = World::new();
        let mut config = MatchConfig::default();
        config.home_formation.clear();
        let mut team = Team::spawn(&mut world, &config, Side::Home, ControlScheme::wasd());
        assert!(team.active_player().is_none());
        assert!(team.activate_next(&mut world).is_none());
    }

    #[test]
    fn score_only_goes_up() {
        let mut world = World::new();
        let mut team = Team::spawn(
            &mut world,
            &MatchConfig::default(),
            Side::Home,
            ControlScheme::wasd(),
        );
        assert_eq!(team.award_goal(), 1);
        assert_eq!(team.award_goal(), 2);
    }
}
