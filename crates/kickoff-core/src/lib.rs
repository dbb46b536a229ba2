//! Kickoff Core - two-team arcade football match engine
//!
//! Three players a side, one ball, two goals and a match clock. Each side
//! steers one active player at a time; the ball sticks to whoever touches it
//! first and is shot by holding and then releasing the charge key.
//!
//! # Architecture
//!
//! The match uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: players and the ball
//! - **Components**: Pure data attached to entities (Position, Facing, Ball, etc.)
//! - **Systems**: Logic that queries and updates components, run in a fixed order
//!
//! Rendering is not part of this crate. A frontend implements
//! [`game_loop::InputSource`] and [`game_loop::Presenter`] and receives a
//! [`snapshot::MatchSnapshot`] every frame.
//!
//! # Example
//!
//! ```rust,no_run
//! use kickoff_core::prelude::*;
//!
//! let config = MatchConfig::default();
//! let mut engine = MatchEngine::new(config.clone(), 0);
//! let mut clock = SystemClock::new();
//! let mut input = |_now: u64| KeyboardState::new();
//! let mut presenter = |snap: &MatchSnapshot, _events: &[MatchEvent]| {
//!     println!("{}:{} {}s", snap.home.score, snap.away.score, snap.remaining_secs);
//! };
//!
//! GameLoop::from_config(&config).run(&mut engine, &mut clock, &mut input, &mut presenter);
//! ```

pub mod clock;
pub mod components;
pub mod engine;
pub mod events;
pub mod game_loop;
pub mod input;
pub mod persistence;
pub mod snapshot;
pub mod systems;
pub mod team;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::components::*;
    pub use crate::engine::MatchEngine;
    pub use crate::events::MatchEvent;
    pub use crate::game_loop::{GameLoop, InputSource, LoopStats, Presenter};
    pub use crate::input::{ControlScheme, Key, KeyboardState};
    pub use crate::snapshot::MatchSnapshot;
    pub use kickoff_logic::config::MatchConfig;
    pub use kickoff_logic::constants::Side;
}
