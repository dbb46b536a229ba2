//! Read-only view of a match for the presentation layer.
//!
//! Everything a renderer needs to draw one frame, with ECS handles replaced
//! by `PlayerId`s so the snapshot can be serialized or sent elsewhere.

use kickoff_logic::constants::{Color, Side};
use kickoff_logic::scoreboard::{verdict, Verdict};
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::engine::MatchEngine;
use crate::systems::copied;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub position: Vec2,
    pub facing: Vec2,
    pub radius: f32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub side: Side,
    pub color: Color,
    pub score: u32,
    pub active_slot: usize,
    pub players: Vec<PlayerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub holder: Option<PlayerId>,
    pub charging: bool,
    /// Fill level of the power bar, `0.0` when not charging.
    pub charge_fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub home: TeamSnapshot,
    pub away: TeamSnapshot,
    pub ball: BallSnapshot,
    pub goals: Vec<Goal>,
    pub remaining_secs: u64,
    pub game_over: bool,
    /// Set once the match is over.
    pub verdict: Option<Verdict>,
}

impl MatchSnapshot {
    pub fn team(&self, side: Side) -> &TeamSnapshot {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

impl MatchEngine {
    /// Capture the current state as seen at `now_ms`.
    pub fn snapshot(&self, now_ms: u64) -> MatchSnapshot {
        let ball = self.ball();
        let holder = ball
            .possession
            .holder()
            .and_then(|e| copied::<Player>(&self.world, e))
            .map(|p| p.id());
        let charge_fraction = ball
            .possession
            .charge_started_at()
            .map(|since| {
                self.config()
                    .shot
                    .charge_fraction(now_ms.saturating_sub(since))
            })
            .unwrap_or(0.0);

        let (home, away) = self.score();
        MatchSnapshot {
            tick: self.ticks(),
            home: self.team_snapshot(Side::Home),
            away: self.team_snapshot(Side::Away),
            ball: BallSnapshot {
                position: self.ball_position(),
                velocity: ball.velocity,
                radius: self.config().ball_radius,
                holder,
                charging: ball.possession.is_charging(),
                charge_fraction,
            },
            goals: self.goals().to_vec(),
            remaining_secs: self.remaining_secs(now_ms),
            game_over: self.is_game_over(),
            verdict: self.is_game_over().then(|| verdict(home, away)),
        }
    }

    fn team_snapshot(&self, side: Side) -> TeamSnapshot {
        let team = self.team(side);
        let players = team
            .roster
            .iter()
            .filter_map(|&e| {
                let player = copied::<Player>(&self.world, e)?;
                Some(PlayerSnapshot {
                    id: player.id(),
                    position: copied::<Position>(&self.world, e)?.0,
                    facing: copied::<Facing>(&self.world, e)?.0,
                    radius: copied::<Body>(&self.world, e)?.radius,
                    active: player.active,
                })
            })
            .collect();

        TeamSnapshot {
            side,
            color: self.config().kit(side),
            score: team.score,
            active_slot: team.active_index,
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyboardState};
    use kickoff_logic::config::MatchConfig;
    use kickoff_logic::constants::colors;

    #[test]
    fn kickoff_snapshot() {
        let engine = MatchEngine::new(MatchConfig::default(), 0);
        let snap = engine.snapshot(0);
        assert_eq!(snap.home.players.len(), 3);
        assert_eq!(snap.home.color, colors::RED);
        assert_eq!(snap.away.color, colors::BLUE);
        assert!(snap.home.players[0].active);
        assert!(!snap.home.players[1].active);
        assert_eq!(snap.ball.holder, None);
        assert_eq!(snap.remaining_secs, 60);
        assert_eq!(snap.goals.len(), 2);
        assert!(!snap.game_over);
        assert_eq!(snap.verdict, None);
    }

    #[test]
    fn power_bar_fills_while_charging() {
        let mut engine = MatchEngine::new(MatchConfig::default(), 0);
        let striker = engine.player(Side::Home, 0).unwrap();
        let ball = engine.ball_entity();
        engine.world.get::<&mut Ball>(ball).unwrap().attach(striker);

        engine.update(&KeyboardState::new().hold(Key::E), 1_000);
        let snap = engine.snapshot(2_000);
        assert!(snap.ball.charging);
        assert!((snap.ball.charge_fraction - 0.5).abs() < 1e-6);
        assert_eq!(
            snap.ball.holder,
            Some(PlayerId {
                side: Side::Home,
                slot: 0
            })
        );
    }

    #[test]
    fn verdict_only_after_full_time() {
        let mut engine = MatchEngine::new(MatchConfig::default(), 0);
        engine.update(&KeyboardState::new(), 60_000);
        let snap = engine.snapshot(60_000);
        assert!(snap.game_over);
        assert_eq!(snap.verdict, Some(Verdict::Draw));
        assert_eq!(snap.remaining_secs, 0);
    }
}
