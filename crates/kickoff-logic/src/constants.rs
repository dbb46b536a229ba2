//! Game constants: team sides, kit colours and the default pitch.
//!
//! Defaults reproduce the classic 800×600 arcade layout; every value here is
//! overridable through [`crate::config::MatchConfig`].

use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const PLAYER_RADIUS: f32 = 20.0;
pub const BALL_RADIUS: f32 = 5.0;
/// Pixels per tick for an active player.
pub const PLAYER_SPEED: f32 = 5.0;
/// Space between a possessor's edge and the ball's edge.
pub const POSSESSION_GAP: f32 = 5.0;
/// Space between a shooter's edge and the ball's edge at release.
pub const SHOT_CLEARANCE: f32 = 2.0;

pub const MATCH_DURATION_MS: u64 = 60_000;
pub const FRAME_DELAY_MS: u64 = 16;

pub const GOAL_WIDTH: f32 = 20.0;
pub const GOAL_HEIGHT: f32 = 150.0;

pub const ROSTER_SIZE: usize = 3;

/// Which of the two teams. `Home` is listed first everywhere and wins
/// same-tick ties (e.g. both teams touching a loose ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// RGB kit colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub mod colors {
    use super::Color;

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Ring drawn around the active player.
    pub const HIGHLIGHT: Color = Color::rgb(255, 255, 0);
}
