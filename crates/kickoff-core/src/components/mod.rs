//! Component definitions for the ECS match.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod ball;
mod common;
mod goal;
mod player;

pub use ball::*;
pub use common::*;
pub use goal::*;
pub use player::*;
