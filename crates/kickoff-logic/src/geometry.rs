//! Geometry primitives for the pitch: vectors, rectangles, field bounds
//! and circle contact.
//!
//! Coordinates are screen pixels with the origin in the top-left corner and
//! `y` growing downward, matching the presentation layer.

use serde::{Deserialize, Serialize};

/// 2D vector (position, velocity or direction).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Default facing for freshly spawned players.
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 {
            Some(Self {
                x: self.x / len,
                y: self.y / len,
            })
        } else {
            None
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Axis-aligned rectangle, stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point-in-rectangle test, inclusive on every edge.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// The playing field: `(0, 0)` to `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check if a circle lies fully inside the field.
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }

    /// Clamp a circle centre so the whole circle stays on the field.
    /// Each axis is clamped independently.
    pub fn clamp_circle(&self, center: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            center.x.max(radius).min(self.width - radius),
            center.y.max(radius).min(self.height - radius),
        )
    }

    /// Reflect `velocity` off any side line the circle's leading edge has
    /// reached. Axes are handled independently, so a corner hit flips both.
    /// A component already pointing back into the field is left alone.
    pub fn reflect(&self, center: Vec2, radius: f32, velocity: Vec2) -> Vec2 {
        let mut v = velocity;
        if (center.x - radius <= 0.0 && v.x < 0.0)
            || (center.x + radius >= self.width && v.x > 0.0)
        {
            v.x = -v.x;
        }
        if (center.y - radius <= 0.0 && v.y < 0.0)
            || (center.y + radius >= self.height && v.y > 0.0)
        {
            v.y = -v.y;
        }
        v
    }
}

/// Circle-circle contact: centres no farther apart than the sum of radii.
pub fn circles_touch(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(&b) <= radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_nonzero() {
        let n = Vec2::new(5.0, 5.0).try_normalize().unwrap();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!((n.x - n.y).abs() < EPS);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(Vec2::ZERO.try_normalize().is_none());
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 225.0, 20.0, 150.0);
        assert!(r.contains(Vec2::new(0.0, 225.0)));
        assert!(r.contains(Vec2::new(20.0, 375.0)));
        assert!(r.contains(Vec2::new(10.0, 300.0)));
        assert!(!r.contains(Vec2::new(20.1, 300.0)));
        assert!(!r.contains(Vec2::new(10.0, 224.9)));
    }

    #[test]
    fn clamp_keeps_circle_on_field() {
        let field = FieldBounds::new(800.0, 600.0);
        let p = field.clamp_circle(Vec2::new(-40.0, 650.0), 20.0);
        assert_eq!(p, Vec2::new(20.0, 580.0));
        assert!(field.contains_circle(p, 20.0));
    }

    #[test]
    fn clamp_leaves_interior_point() {
        let field = FieldBounds::new(800.0, 600.0);
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(field.clamp_circle(p, 20.0), p);
    }

    #[test]
    fn reflect_off_right_line() {
        let field = FieldBounds::new(800.0, 600.0);
        let v = field.reflect(Vec2::new(796.0, 300.0), 5.0, Vec2::new(4.0, 3.0));
        assert_eq!(v, Vec2::new(-4.0, 3.0));
    }

    #[test]
    fn reflect_corner_flips_both_axes() {
        let field = FieldBounds::new(800.0, 600.0);
        let v = field.reflect(Vec2::new(3.0, 2.0), 5.0, Vec2::new(-4.0, -3.0));
        assert_eq!(v, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn reflect_ignores_ball_moving_away_from_line() {
        let field = FieldBounds::new(800.0, 600.0);
        let v = field.reflect(Vec2::new(3.0, 300.0), 5.0, Vec2::new(4.0, 0.0));
        assert_eq!(v, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn circles_touch_at_exact_sum() {
        assert!(circles_touch(Vec2::new(0.0, 0.0), 20.0, Vec2::new(25.0, 0.0), 5.0));
        assert!(!circles_touch(Vec2::new(0.0, 0.0), 20.0, Vec2::new(25.1, 0.0), 5.0));
    }
}
