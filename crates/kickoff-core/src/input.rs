//! Keyboard input: the per-tick key snapshot and per-team bindings.
//!
//! Both teams share one keyboard. Each `Team` carries a `ControlScheme`
//! that turns the snapshot into a movement delta and button states, so the
//! two mirrored control layouts are data, not duplicated code paths.

use std::collections::BTreeSet;

use kickoff_logic::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    E,
    Space,
    Up,
    Down,
    Left,
    Right,
    Return,
    RightBracket,
    Escape,
}

/// Keyboard state sampled once per tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    /// Keys currently down.
    pub held: BTreeSet<Key>,
    /// Key-down events since the previous tick.
    pub pressed: Vec<Key>,
    /// Window close or quit request.
    pub quit: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark `key` as held.
    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Builder: record a key-down event (the key is also held).
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self.held.insert(key);
        self
    }

    pub fn quitting() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// What one team asks for this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeamIntent {
    /// Requested displacement of the active player, pixels.
    pub delta: Vec2,
    pub charge_held: bool,
    pub switch_requested: bool,
}

/// Key bindings for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlScheme {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    /// Hold to charge, release to shoot.
    pub charge: Key,
    /// Press to hand control to the next roster slot.
    pub switch: Key,
}

impl ControlScheme {
    /// W/A/S/D, charge on E, switch on Space.
    pub fn wasd() -> Self {
        Self {
            up: Key::W,
            down: Key::S,
            left: Key::A,
            right: Key::D,
            charge: Key::E,
            switch: Key::Space,
        }
    }

    /// Arrow keys, charge on Return, switch on `]`.
    pub fn arrows() -> Self {
        Self {
            up: Key::Up,
            down: Key::Down,
            left: Key::Left,
            right: Key::Right,
            charge: Key::Return,
            switch: Key::RightBracket,
        }
    }

    /// Read this team's controls out of the shared keyboard. Opposite keys
    /// cancel; screen `y` grows downward so "up" is negative.
    pub fn sample(&self, keys: &KeyboardState, speed: f32) -> TeamIntent {
        let mut dx = 0.0f32;
        let mut dy = 0.0f32;
        if keys.is_held(self.up) {
            dy -= speed;
        }
        if keys.is_held(self.down) {
            dy += speed;
        }
        if keys.is_held(self.left) {
            dx -= speed;
        }
        if keys.is_held(self.right) {
            dx += speed;
        }

        TeamIntent {
            delta: Vec2::new(dx, dy),
            charge_held: keys.is_held(self.charge),
            switch_requested: keys.was_pressed(self.switch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_right_is_positive_x() {
        let keys = KeyboardState::new().hold(Key::D);
        let intent = ControlScheme::wasd().sample(&keys, 5.0);
        assert_eq!(intent.delta, Vec2::new(5.0, 0.0));
        assert!(!intent.charge_held);
    }

    #[test]
    fn up_is_negative_y() {
        let keys = KeyboardState::new().hold(Key::Up);
        let intent = ControlScheme::arrows().sample(&keys, 5.0);
        assert_eq!(intent.delta, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let keys = KeyboardState::new().hold(Key::A).hold(Key::D).hold(Key::W);
        let intent = ControlScheme::wasd().sample(&keys, 5.0);
        assert_eq!(intent.delta, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn schemes_do_not_overlap() {
        let keys = KeyboardState::new()
            .hold(Key::Left)
            .hold(Key::Return)
            .press(Key::RightBracket);
        let home = ControlScheme::wasd().sample(&keys, 5.0);
        let away = ControlScheme::arrows().sample(&keys, 5.0);
        assert_eq!(home, TeamIntent::default());
        assert_eq!(away.delta, Vec2::new(-5.0, 0.0));
        assert!(away.charge_held);
        assert!(away.switch_requested);
    }

    #[test]
    fn switch_needs_a_press_event() {
        let keys = KeyboardState::new().hold(Key::Space);
        assert!(!ControlScheme::wasd().sample(&keys, 5.0).switch_requested);
    }
}
