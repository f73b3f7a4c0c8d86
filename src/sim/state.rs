//! Game state and core simulation types
//!
//! Positions are in canvas pixels with the origin at the top-left corner,
//! matching the coordinate space input events arrive in.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Playfield dimensions, mutated only by resize events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Create a playfield, clamping degenerate dimensions to a minimum
    /// positive size so derived constants stay finite.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_FIELD_DIM),
            height: height.max(MIN_FIELD_DIM),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Scale-dependent constants derived from the playfield dimensions.
///
/// Everything except the paddle inset is proportional to the playfield so
/// gameplay feel is resolution-independent. Recomputed only when the
/// playfield resizes, never per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub paddle_w: f32,
    pub paddle_h: f32,
    pub ball_radius: f32,
    /// Human paddle movement per tick
    pub paddle_speed: f32,
    /// Ball movement per tick along each axis at serve
    pub ball_speed: f32,
    /// Left paddle x (left edge)
    pub left_x: f32,
    /// Right paddle x (left edge)
    pub right_x: f32,
}

impl Scale {
    /// Pure derivation from playfield dimensions.
    pub fn derive(field: &Playfield) -> Self {
        let paddle_w = field.width * PADDLE_WIDTH_FRAC;
        Self {
            paddle_w,
            paddle_h: field.height * PADDLE_HEIGHT_FRAC,
            ball_radius: field.width * BALL_RADIUS_FRAC,
            paddle_speed: field.height * PADDLE_SPEED_FRAC,
            ball_speed: field.width * BALL_SPEED_FRAC,
            left_x: PADDLE_INSET,
            right_x: field.width - PADDLE_INSET - paddle_w,
        }
    }
}

/// Clamp a paddle top edge into the legal vertical range.
#[inline]
pub fn clamp_paddle_y(y: f32, field: &Playfield, scale: &Scale) -> f32 {
    y.clamp(0.0, (field.height - scale.paddle_h).max(0.0))
}

/// A paddle. Width and height are shared via [`Scale`]; only the position
/// lives here. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Vertical center, used by the offset-angle rule and the opponent.
    pub fn center_y(&self, scale: &Scale) -> f32 {
        self.y + scale.paddle_h / 2.0
    }
}

/// The ball. Horizontal position is deliberately unclamped so it can cross
/// the left/right boundary and trigger scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Score pair, mutated only by the round manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScorePair {
    pub left: u32,
    pub right: u32,
}

/// Who drives the right paddle. Fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Right paddle is opponent-controlled
    Solo,
    /// Right paddle is a second human
    Versus,
}

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Playfield,
    pub scale: Scale,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: ScorePair,
    pub mode: ControlMode,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run seed, kept for logging/repro
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh game: paddles centered, ball served from center in a
    /// random direction.
    pub fn new(width: f32, height: f32, mode: ControlMode, seed: u64) -> Self {
        let field = Playfield::new(width, height);
        let scale = Scale::derive(&field);
        let paddle_y = (field.height - scale.paddle_h) / 2.0;

        let mut state = Self {
            field,
            scale,
            left: Paddle {
                x: scale.left_x,
                y: paddle_y,
            },
            right: Paddle {
                x: scale.right_x,
                y: paddle_y,
            },
            ball: Ball {
                pos: field.center(),
                vel: Vec2::ZERO,
            },
            scores: ScorePair::default(),
            mode,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };

        let direction = super::round::random_direction(&mut state.rng);
        super::round::serve(&mut state, direction);
        state
    }

    /// Apply a playfield resize: re-derive scale constants and re-clamp
    /// every position, so a paddle sitting at the old boundary sits at the
    /// new boundary instead of escaping it. Must run between ticks.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Playfield::new(width, height);
        self.scale = Scale::derive(&self.field);

        self.left.x = self.scale.left_x;
        self.right.x = self.scale.right_x;
        self.left.y = clamp_paddle_y(self.left.y, &self.field, &self.scale);
        self.right.y = clamp_paddle_y(self.right.y, &self.field, &self.scale);

        // Horizontal ball position stays as-is; an in-flight exit still scores.
        self.ball.pos.y = self.ball.pos.y.clamp(0.0, self.field.height);
    }
}
