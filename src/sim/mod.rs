//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed increment per tick, no wall-clock scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::overlaps_paddle;
pub use state::{Ball, ControlMode, GameState, Paddle, Playfield, Scale, ScorePair};
pub use tick::{TickInput, tick};
