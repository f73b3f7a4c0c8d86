//! Per-frame simulation tick
//!
//! One call per rendered frame, one fixed increment per call; speeds are
//! expressed in pixels per tick, so there is no wall-clock scaling.

use super::collision::{bottom_wall_overshoot, overlaps_paddle, top_wall_overshoot};
use super::state::{ControlMode, GameState, clamp_paddle_y};
use super::{opponent, round};

/// Input commands for a single tick.
///
/// Event handlers write into this inbox asynchronously; it is applied
/// atomically at tick start, last write wins. Absolute targets are in canvas
/// pixels (paddle top edge) and are clamped by the same rule the simulation
/// uses everywhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute target for the left paddle (pointer/touch)
    pub left_y: Option<f32>,
    /// Absolute target for the right paddle (two-player touch)
    pub right_y: Option<f32>,
    /// Keyboard step for the right paddle: -1.0, 0.0 or +1.0 (two-player keys)
    pub right_step: f32,
}

/// Advance the game state by one tick.
///
/// Order is fixed: apply input, integrate the ball, reflect off the
/// horizontal walls, resolve paddle hits, settle scoring, then move the
/// opponent paddle (solo mode only).
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    apply_input(state, input);

    state.ball.pos += state.ball.vel;

    reflect_walls(state);
    hit_left_paddle(state);
    hit_right_paddle(state);
    round::settle(state);

    if state.mode == ControlMode::Solo {
        opponent::track_ball(state);
    }
}

/// Apply queued input commands. Right-paddle commands are ignored in solo
/// mode, where the opponent controller owns that paddle.
fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(y) = input.left_y {
        state.left.y = clamp_paddle_y(y, &state.field, &state.scale);
    }

    if state.mode == ControlMode::Versus {
        if let Some(y) = input.right_y {
            state.right.y = clamp_paddle_y(y, &state.field, &state.scale);
        }
        if input.right_step != 0.0 {
            let y = state.right.y + input.right_step * state.scale.paddle_speed;
            state.right.y = clamp_paddle_y(y, &state.field, &state.scale);
        }
    }
}

/// Reflect the ball off the top/bottom walls, clamping position back inside
/// so a fast ball cannot stay penetrated across frames. Setting the sign
/// outright (rather than negating) means a corrected ball never re-flips on
/// the following tick.
fn reflect_walls(state: &mut GameState) {
    let r = state.scale.ball_radius;

    if top_wall_overshoot(state.ball.pos, r) > 0.0 {
        state.ball.pos.y = r;
        state.ball.vel.y = state.ball.vel.y.abs();
    } else if bottom_wall_overshoot(state.ball.pos, r, state.field.height) > 0.0 {
        state.ball.pos.y = state.field.height - r;
        state.ball.vel.y = -state.ball.vel.y.abs();
    }
}

/// Paddle-relative strike position in roughly [-1, 1]: center hits rebound
/// straight, edge hits rebound steep.
fn strike_offset(ball_y: f32, paddle_center_y: f32, paddle_h: f32) -> f32 {
    (ball_y - paddle_center_y) / (paddle_h / 2.0).max(f32::EPSILON)
}

/// Left-paddle hit, gated on leftward motion so a single approach can fire
/// at most once; the flip itself makes the gate fail next tick.
fn hit_left_paddle(state: &mut GameState) {
    let s = state.scale;
    if state.ball.vel.x < 0.0
        && overlaps_paddle(
            state.ball.pos,
            s.ball_radius,
            state.left.x,
            state.left.y,
            s.paddle_w,
            s.paddle_h,
        )
    {
        state.ball.vel.x = state.ball.vel.x.abs();
        state.ball.vel.y =
            s.ball_speed * strike_offset(state.ball.pos.y, state.left.center_y(&s), s.paddle_h);
        // Push the ball out of the paddle face to stop multi-frame sticking
        state.ball.pos.x = state.left.x + s.paddle_w + s.ball_radius;
    }
}

/// Mirror of [`hit_left_paddle`] for the right paddle, gated on rightward
/// motion.
fn hit_right_paddle(state: &mut GameState) {
    let s = state.scale;
    if state.ball.vel.x > 0.0
        && overlaps_paddle(
            state.ball.pos,
            s.ball_radius,
            state.right.x,
            state.right.y,
            s.paddle_w,
            s.paddle_h,
        )
    {
        state.ball.vel.x = -state.ball.vel.x.abs();
        state.ball.vel.y =
            s.ball_speed * strike_offset(state.ball.pos.y, state.right.center_y(&s), s.paddle_h);
        state.ball.pos.x = state.right.x - s.ball_radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state() -> GameState {
        GameState::new(800.0, 500.0, ControlMode::Solo, 5)
    }

    #[test]
    fn test_center_strike_rebounds_straight() {
        // 800x500 field, left paddle spanning y in [200, 300], ball dead
        // center on the paddle moving left at speed 6
        let mut s = state();
        s.scale.paddle_h = 100.0;
        s.scale.ball_speed = 6.0;
        s.left.y = 200.0;
        s.ball.pos = Vec2::new(40.0, 250.0);
        s.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut s, &TickInput::default());

        assert_eq!(s.ball.vel.x, 6.0);
        assert_eq!(s.ball.vel.y, 0.0);
        // Position clamped to the paddle's right face
        assert!(s.ball.pos.x >= s.left.x + s.scale.paddle_w);
    }

    #[test]
    fn test_edge_strike_rebounds_steep() {
        let mut s = state();
        s.scale.paddle_h = 100.0;
        s.scale.ball_speed = 6.0;
        s.left.y = 200.0;
        // Strike near the paddle's bottom edge
        s.ball.pos = Vec2::new(40.0, 295.0);
        s.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut s, &TickInput::default());

        assert_eq!(s.ball.vel.x, 6.0);
        // offset = (295 - 250) / 50 = 0.9
        assert!((s.ball.vel.y - 6.0 * 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_wall_reflection_flips_once() {
        let mut s = state();
        let r = s.scale.ball_radius;
        s.ball.pos = Vec2::new(400.0, r + 1.0);
        s.ball.vel = Vec2::new(3.0, -6.0);

        tick(&mut s, &TickInput::default());
        assert_eq!(s.ball.vel.y, 6.0);
        assert_eq!(s.ball.pos.y, r);

        // Position was corrected, so the next tick must not re-flip
        tick(&mut s, &TickInput::default());
        assert_eq!(s.ball.vel.y, 6.0);
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let mut s = state();
        let r = s.scale.ball_radius;
        s.ball.pos = Vec2::new(400.0, s.field.height - r - 1.0);
        s.ball.vel = Vec2::new(3.0, 6.0);

        tick(&mut s, &TickInput::default());
        assert_eq!(s.ball.vel.y, -6.0);
        assert_eq!(s.ball.pos.y, s.field.height - r);
    }

    #[test]
    fn test_no_double_bounce_moving_away() {
        // Ball geometrically overlapping the left paddle but moving right
        // must not reverse again
        let mut s = state();
        s.ball.pos = Vec2::new(s.left.x + 5.0, s.left.y + 10.0);
        s.ball.vel = Vec2::new(6.0, 0.0);

        tick(&mut s, &TickInput::default());

        assert_eq!(s.ball.vel.x, 6.0);
    }

    #[test]
    fn test_left_exit_scores_and_reserves() {
        let mut s = state();
        s.scale.ball_speed = 6.0;
        s.ball.pos = Vec2::new(5.0, 250.0);
        s.ball.vel = Vec2::new(-6.0, 0.0);
        // Park the left paddle away from the ball path
        s.left.y = 0.0;

        tick(&mut s, &TickInput::default());

        assert_eq!(s.scores.right, 1);
        assert_eq!(s.scores.left, 0);
        assert_eq!(s.ball.pos, Vec2::new(400.0, 250.0));
        assert_eq!(s.ball.vel.x, 6.0);
    }

    #[test]
    fn test_input_applied_at_tick_start_and_clamped() {
        let mut s = GameState::new(800.0, 500.0, ControlMode::Versus, 5);

        let input = TickInput {
            left_y: Some(-200.0),
            right_y: Some(10_000.0),
            right_step: 0.0,
        };
        tick(&mut s, &input);

        assert_eq!(s.left.y, 0.0);
        assert_eq!(s.right.y, s.field.height - s.scale.paddle_h);
    }

    #[test]
    fn test_right_paddle_input_ignored_in_solo() {
        let mut s = state();
        let before = s.right.y;
        // Park the ball inside the opponent's dead band so it holds still
        s.ball.pos.y = s.right.center_y(&s.scale);

        let input = TickInput {
            left_y: None,
            right_y: Some(0.0),
            right_step: 1.0,
        };
        tick(&mut s, &input);

        assert_eq!(s.right.y, before);
    }

    #[test]
    fn test_determinism() {
        let mut s1 = GameState::new(800.0, 500.0, ControlMode::Solo, 99_999);
        let mut s2 = GameState::new(800.0, 500.0, ControlMode::Solo, 99_999);

        let input = TickInput {
            left_y: Some(210.0),
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut s1, &input);
            tick(&mut s2, &input);
        }

        assert_eq!(s1.ball.pos, s2.ball.pos);
        assert_eq!(s1.ball.vel, s2.ball.vel);
        assert_eq!(s1.right.y, s2.right.y);
        assert_eq!(s1.scores, s2.scores);
        assert_eq!(s1.time_ticks, s2.time_ticks);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_bounds(
            seed in 0u64..1_000,
            commands in proptest::collection::vec(
                (-600.0f32..1_200.0, -600.0f32..1_200.0, -1i8..=1),
                1..200,
            ),
        ) {
            let mut s = GameState::new(800.0, 500.0, ControlMode::Versus, seed);
            for (left_y, right_y, step) in commands {
                let input = TickInput {
                    left_y: Some(left_y),
                    right_y: Some(right_y),
                    right_step: step as f32,
                };
                tick(&mut s, &input);

                let max_y = s.field.height - s.scale.paddle_h;
                prop_assert!(s.left.y >= 0.0 && s.left.y <= max_y);
                prop_assert!(s.right.y >= 0.0 && s.right.y <= max_y);
            }
        }

        #[test]
        fn prop_solo_opponent_stays_in_bounds(seed in 0u64..1_000) {
            let mut s = GameState::new(800.0, 500.0, ControlMode::Solo, seed);
            let max_y = s.field.height - s.scale.paddle_h;
            for _ in 0..2_000 {
                tick(&mut s, &TickInput::default());
                prop_assert!(s.right.y >= 0.0 && s.right.y <= max_y);
            }
        }
    }
}
