//! Common components shared by players and the ball.

use serde::{Deserialize, Serialize};

pub use kickoff_logic::geometry::Vec2;

/// Centre of an entity on the field, in pixels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Collision circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Body {
    pub radius: f32,
}

/// Unit direction a player faces. Survives standing still: only a nonzero
/// movement request rewrites it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Facing(pub Vec2);

impl Default for Facing {
    fn default() -> Self {
        Self(Vec2::RIGHT)
    }
}
