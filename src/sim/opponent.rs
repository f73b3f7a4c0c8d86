//! Reactive opponent controller
//!
//! A proportional tracker with a dead band: chase the ball's vertical
//! position at a fraction of full paddle speed, hold inside the tolerance
//! band to avoid jitter. No look-ahead, no trajectory prediction, no state
//! beyond the paddle position itself.

use crate::consts::{OPPONENT_DEADZONE, OPPONENT_REACTION};

use super::state::{GameState, clamp_paddle_y};

/// Move the right paddle one step toward the ball. Evaluated once per tick
/// in solo mode.
pub fn track_ball(state: &mut GameState) {
    let center = state.right.center_y(&state.scale);
    let step = state.scale.paddle_speed * OPPONENT_REACTION;

    if state.ball.pos.y < center - OPPONENT_DEADZONE {
        state.right.y -= step;
    } else if state.ball.pos.y > center + OPPONENT_DEADZONE {
        state.right.y += step;
    }

    state.right.y = clamp_paddle_y(state.right.y, &state.field, &state.scale);
}
