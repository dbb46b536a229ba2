//! Match configuration and validation.
//!
//! A `MatchConfig` fixes every rule constant before kickoff: pitch size,
//! body radii, movement speed, shot curve, match length, goal mouths and
//! starting formations. It is serde-friendly with per-field defaults, so a
//! partial JSON document only overrides what it names.
//!
//! ```
//! use kickoff_logic::config::{validate_config, MatchConfig};
//!
//! let mut config = MatchConfig::default();
//! config.match_duration_ms = 90_000;
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::geometry::{FieldBounds, Rect, Vec2};
use crate::shot::ShotParams;

/// Rule constants for one match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub player_radius: f32,
    pub ball_radius: f32,
    /// Pixels moved per tick along each pressed axis.
    pub player_speed: f32,
    /// Edge-to-edge gap between a possessor and the ball it carries.
    pub possession_gap: f32,
    /// Edge-to-edge gap between a shooter and the ball at release.
    pub shot_clearance: f32,
    pub shot: ShotParams,
    pub match_duration_ms: u64,
    pub goal_width: f32,
    pub goal_height: f32,
    /// Ball velocity at the opening kickoff. Restarts after a goal are dead
    /// balls.
    pub kickoff_velocity: Vec2,
    /// Blocking delay between simulation and presentation each frame.
    pub frame_delay_ms: u64,
    pub home_formation: Vec<Vec2>,
    pub away_formation: Vec<Vec2>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_width: SCREEN_WIDTH,
            field_height: SCREEN_HEIGHT,
            player_radius: PLAYER_RADIUS,
            ball_radius: BALL_RADIUS,
            player_speed: PLAYER_SPEED,
            possession_gap: POSSESSION_GAP,
            shot_clearance: SHOT_CLEARANCE,
            shot: ShotParams::default(),
            match_duration_ms: MATCH_DURATION_MS,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
            kickoff_velocity: Vec2::new(4.0, 3.0),
            frame_delay_ms: FRAME_DELAY_MS,
            home_formation: vec![
                Vec2::new(150.0, 200.0),
                Vec2::new(100.0, 300.0),
                Vec2::new(150.0, 400.0),
            ],
            away_formation: vec![
                Vec2::new(650.0, 200.0),
                Vec2::new(700.0, 300.0),
                Vec2::new(650.0, 400.0),
            ],
        }
    }
}

impl MatchConfig {
    pub fn bounds(&self) -> FieldBounds {
        FieldBounds::new(self.field_width, self.field_height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Goal mouth on the left side line. The away team scores here.
    pub fn left_goal(&self) -> Rect {
        Rect::new(
            0.0,
            (self.field_height - self.goal_height) / 2.0,
            self.goal_width,
            self.goal_height,
        )
    }

    /// Goal mouth on the right side line. The home team scores here.
    pub fn right_goal(&self) -> Rect {
        Rect::new(
            self.field_width - self.goal_width,
            (self.field_height - self.goal_height) / 2.0,
            self.goal_width,
            self.goal_height,
        )
    }

    pub fn formation(&self, side: Side) -> &[Vec2] {
        match side {
            Side::Home => &self.home_formation,
            Side::Away => &self.away_formation,
        }
    }

    pub fn kit(&self, side: Side) -> Color {
        match side {
            Side::Home => colors::RED,
            Side::Away => colors::BLUE,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Field width or height not positive.
    InvalidFieldSize { width: f32, height: f32 },
    /// Player or ball radius not positive.
    InvalidRadius { player: f32, ball: f32 },
    /// Player speed not positive.
    InvalidSpeed(f32),
    /// Negative minimum shot power.
    NegativeShotPower(f32),
    /// Minimum shot power above the maximum.
    ShotPowerInverted { min: f32, max: f32 },
    /// Charge window of zero milliseconds.
    ZeroChargeWindow,
    /// Match of zero length.
    ZeroDuration,
    /// Goal mouth does not fit on the field.
    GoalTooLarge { width: f32, height: f32 },
    /// Team with no players.
    EmptyRoster(Side),
    /// Starting position puts a player partly off the field.
    FormationOutOfBounds { side: Side, slot: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidFieldSize { width, height } => {
                write!(f, "field size must be positive, got {}x{}", width, height)
            }
            ConfigError::InvalidRadius { player, ball } => write!(
                f,
                "radii must be positive, got player={} ball={}",
                player, ball
            ),
            ConfigError::InvalidSpeed(s) => write!(f, "player speed must be positive, got {}", s),
            ConfigError::NegativeShotPower(p) => {
                write!(f, "minimum shot power must not be negative, got {}", p)
            }
            ConfigError::ShotPowerInverted { min, max } => {
                write!(f, "minimum shot power {} exceeds maximum {}", min, max)
            }
            ConfigError::ZeroChargeWindow => write!(f, "charge window must be at least 1ms"),
            ConfigError::ZeroDuration => write!(f, "match duration must be at least 1ms"),
            ConfigError::GoalTooLarge { width, height } => {
                write!(f, "goal {}x{} does not fit on the field", width, height)
            }
            ConfigError::EmptyRoster(side) => write!(f, "{} team has no players", side.label()),
            ConfigError::FormationOutOfBounds { side, slot } => write!(
                f,
                "{} player {} starts partly off the field",
                side.label(),
                slot
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a match configuration, returning all errors found.
pub fn validate_config(config: &MatchConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.field_width <= 0.0 || config.field_height <= 0.0 {
        errors.push(ConfigError::InvalidFieldSize {
            width: config.field_width,
            height: config.field_height,
        });
    }
    if config.player_radius <= 0.0 || config.ball_radius <= 0.0 {
        errors.push(ConfigError::InvalidRadius {
            player: config.player_radius,
            ball: config.ball_radius,
        });
    }
    if config.player_speed <= 0.0 {
        errors.push(ConfigError::InvalidSpeed(config.player_speed));
    }
    if config.shot.min_power < 0.0 {
        errors.push(ConfigError::NegativeShotPower(config.shot.min_power));
    }
    if config.shot.min_power > config.shot.max_power {
        errors.push(ConfigError::ShotPowerInverted {
            min: config.shot.min_power,
            max: config.shot.max_power,
        });
    }
    if config.shot.max_charge_ms == 0 {
        errors.push(ConfigError::ZeroChargeWindow);
    }
    if config.match_duration_ms == 0 {
        errors.push(ConfigError::ZeroDuration);
    }
    if config.goal_width <= 0.0
        || config.goal_height <= 0.0
        || config.goal_width * 2.0 > config.field_width
        || config.goal_height > config.field_height
    {
        errors.push(ConfigError::GoalTooLarge {
            width: config.goal_width,
            height: config.goal_height,
        });
    }

    let bounds = config.bounds();
    for side in Side::ALL {
        let formation = config.formation(side);
        if formation.is_empty() {
            errors.push(ConfigError::EmptyRoster(side));
        }
        for (slot, pos) in formation.iter().enumerate() {
            if !bounds.contains_circle(*pos, config.player_radius) {
                errors.push(ConfigError::FormationOutOfBounds { side, slot });
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MatchConfig::default();
        let errors = validate_config(&config);
        assert!(
            errors.is_empty(),
            "default config should be valid: {errors:?}"
        );
    }

    #[test]
    fn default_goals_are_centred_on_side_lines() {
        let config = MatchConfig::default();
        assert_eq!(config.left_goal(), Rect::new(0.0, 225.0, 20.0, 150.0));
        assert_eq!(config.right_goal(), Rect::new(780.0, 225.0, 20.0, 150.0));
    }

    #[test]
    fn inverted_shot_power() {
        let mut config = MatchConfig::default();
        config.shot.min_power = 30.0;
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::ShotPowerInverted {
            min: 30.0,
            max: 20.0
        }));
    }

    #[test]
    fn zero_duration_and_window() {
        let mut config = MatchConfig::default();
        config.match_duration_ms = 0;
        config.shot.max_charge_ms = 0;
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::ZeroDuration));
        assert!(errors.contains(&ConfigError::ZeroChargeWindow));
    }

    #[test]
    fn empty_roster() {
        let mut config = MatchConfig::default();
        config.away_formation.clear();
        assert!(validate_config(&config).contains(&ConfigError::EmptyRoster(Side::Away)));
    }

    #[test]
    fn formation_off_field() {
        let mut config = MatchConfig::default();
        config.home_formation[2] = Vec2::new(10.0, 300.0);
        assert!(validate_config(&config).contains(&ConfigError::FormationOutOfBounds {
            side: Side::Home,
            slot: 2
        }));
    }

    #[test]
    fn oversized_goal() {
        let mut config = MatchConfig::default();
        config.goal_height = 700.0;
        assert!(validate_config(&config)
            .iter()
            .any(|e| matches!(e, ConfigError::GoalTooLarge { .. })));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let msg = ConfigError::EmptyRoster(Side::Home).to_string();
        assert!(msg.contains("home"));
    }
}
