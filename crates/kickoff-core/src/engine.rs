//! Match engine - main entry point for running a match

use hecs::{Entity, World};
use kickoff_logic::config::MatchConfig;
use kickoff_logic::constants::Side;
use kickoff_logic::scoreboard::verdict;
use kickoff_logic::timer::MatchTimer;

use crate::components::*;
use crate::events::MatchEvent;
use crate::input::{ControlScheme, KeyboardState, TeamIntent};
use crate::systems::*;
use crate::team::Team;

/// One match: two teams, one ball, two goals and the clock.
///
/// All match state lives here and is passed explicitly to the frame loop
/// and the presentation layer; there are no globals.
pub struct MatchEngine {
    /// ECS world containing players and the ball
    pub world: World,
    config: MatchConfig,
    ball: Entity,
    teams: [Team; 2],
    goals: [Goal; 2],
    timer: MatchTimer,
    game_over: bool,
    ticks: u64,
}

impl MatchEngine {
    /// Kick off a match at `start_ms` with the standard key layout
    /// (home on WASD, away on the arrow keys).
    pub fn new(config: MatchConfig, start_ms: u64) -> Self {
        Self::with_controls(
            config,
            start_ms,
            [ControlScheme::wasd(), ControlScheme::arrows()],
        )
    }

    pub fn with_controls(config: MatchConfig, start_ms: u64, controls: [ControlScheme; 2]) -> Self {
        let mut world = World::new();
        let teams = [
            Team::spawn(&mut world, &config, Side::Home, controls[0]),
            Team::spawn(&mut world, &config, Side::Away, controls[1]),
        ];
        let ball = world.spawn((
            Ball::new(config.kickoff_velocity),
            Position(config.center()),
            Body {
                radius: config.ball_radius,
            },
        ));
        // Left goal is defended by home, so away scores there.
        let goals = [
            Goal::new(config.left_goal(), Side::Away),
            Goal::new(config.right_goal(), Side::Home),
        ];
        let timer = MatchTimer::new(start_ms, config.match_duration_ms);

        log::info!(
            "kickoff: {}v{} on {}x{}, {}s",
            teams[0].roster.len(),
            teams[1].roster.len(),
            config.field_width,
            config.field_height,
            config.match_duration_ms / 1000
        );

        Self {
            world,
            config,
            ball,
            teams,
            goals,
            timer,
            game_over: false,
            ticks: 0,
        }
    }

    /// Advance the match by one tick at wall-clock `now_ms`.
    ///
    /// Order: team switches, movement, charge/shoot, ball flight, pickup,
    /// goals, full-time check. After full time the match is frozen and this
    /// returns no events.
    pub fn update(&mut self, keys: &KeyboardState, now_ms: u64) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }
        self.ticks += 1;

        let intents: [TeamIntent; 2] = [
            self.teams[0].controls.sample(keys, self.config.player_speed),
            self.teams[1].controls.sample(keys, self.config.player_speed),
        ];

        for (team, intent) in self.teams.iter_mut().zip(&intents) {
            if !intent.switch_requested {
                continue;
            }
            if let Some(entity) = team.activate_next(&mut self.world) {
                if let Some(player) = player_id(&self.world, entity) {
                    log::debug!("{} takes control", player);
                    events.push(MatchEvent::ActivePlayerChanged { player });
                }
            }
        }

        movement_system(&mut self.world, &self.teams, &intents, self.config.bounds());

        for (team, intent) in self.teams.iter().zip(&intents) {
            if let Some(ev) = charge_system(
                &mut self.world,
                self.ball,
                team,
                intent,
                now_ms,
                &self.config,
            ) {
                events.push(ev);
            }
        }

        ball_system(
            &mut self.world,
            self.ball,
            self.config.bounds(),
            self.config.possession_gap,
        );

        if let Some(ev) = attach_system(&mut self.world, self.ball, &self.teams) {
            events.push(ev);
        }

        if let Some(ev) = goal_system(
            &mut self.world,
            self.ball,
            &self.goals,
            &mut self.teams,
            self.config.center(),
        ) {
            events.push(ev);
        }

        if self.timer.is_expired(now_ms) {
            self.game_over = true;
            let (home, away) = self.score();
            let verdict = verdict(home, away);
            log::info!("full time: {}:{} ({:?})", home, away, verdict);
            events.push(MatchEvent::FullTime {
                home,
                away,
                verdict,
            });
        }

        log::trace!("tick {}: {} events", self.ticks, events.len());
        events
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn goals(&self) -> &[Goal; 2] {
        &self.goals
    }

    pub fn timer(&self) -> MatchTimer {
        self.timer
    }

    /// (home, away)
    pub fn score(&self) -> (u32, u32) {
        (self.teams[0].score, self.teams[1].score)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        if self.game_over {
            0
        } else {
            self.timer.remaining_secs(now_ms)
        }
    }

    /// Ticks simulated so far (frozen ticks after full time not counted).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> Ball {
        copied::<Ball>(&self.world, self.ball).unwrap_or_default()
    }

    pub fn ball_position(&self) -> Vec2 {
        copied::<Position>(&self.world, self.ball)
            .map(|p| p.0)
            .unwrap_or_default()
    }

    pub fn player(&self, side: Side, slot: usize) -> Option<Entity> {
        self.teams[side.index()].roster.get(slot).copied()
    }

    pub fn player_position(&self, entity: Entity) -> Option<Vec2> {
        copied::<Position>(&self.world, entity).map(|p| p.0)
    }

    pub fn player_facing(&self, entity: Entity) -> Option<Vec2> {
        copied::<Facing>(&self.world, entity).map(|f| f.0)
    }
}
