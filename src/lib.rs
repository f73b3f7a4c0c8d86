//! Rally Pong - classic two-paddle Pong for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring, opponent)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

pub use sim::{ControlMode, GameState, TickInput, tick};

/// Game tuning constants
pub mod consts {
    /// Minimum playfield dimension; degenerate resize events are clamped
    /// to this so derived constants stay finite and positive.
    pub const MIN_FIELD_DIM: f32 = 1.0;

    /// Paddle height as a fraction of playfield height
    pub const PADDLE_HEIGHT_FRAC: f32 = 0.15;
    /// Paddle width as a fraction of playfield width
    pub const PADDLE_WIDTH_FRAC: f32 = 0.02;
    /// Ball radius as a fraction of playfield width
    pub const BALL_RADIUS_FRAC: f32 = 0.015;
    /// Paddle speed per tick as a fraction of playfield height
    pub const PADDLE_SPEED_FRAC: f32 = 0.01;
    /// Ball speed per tick as a fraction of playfield width
    pub const BALL_SPEED_FRAC: f32 = 0.01;

    /// Horizontal gap between each paddle and its wall (absolute pixels)
    pub const PADDLE_INSET: f32 = 30.0;

    /// Opponent tolerance band around the paddle center (absolute pixels,
    /// deliberately not playfield-scaled)
    pub const OPPONENT_DEADZONE: f32 = 15.0;
    /// Opponent speed as a fraction of full paddle speed; the difficulty lever
    pub const OPPONENT_REACTION: f32 = 0.8;
}
