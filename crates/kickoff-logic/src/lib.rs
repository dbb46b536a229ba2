//! Pure match rules for Kickoff.
//!
//! This crate contains the rule math that is independent of any ECS,
//! window, or runtime. Functions take plain data and return results, making
//! them unit-testable and shareable between the match engine, the headless
//! harness, and any presentation layer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Match rule constants, defaults, and validation |
//! | [`constants`] | Default pitch values, team sides, kit colours |
//! | [`geometry`] | Vectors, rectangles, field clamping, wall reflection, circle contact |
//! | [`scoreboard`] | Seven-segment digit layout and the full-time verdict |
//! | [`shot`] | Charge fraction and shot speed curve |
//! | [`timer`] | Match clock: elapsed, remaining seconds, expiry |

pub mod config;
pub mod constants;
pub mod geometry;
pub mod scoreboard;
pub mod shot;
pub mod timer;
