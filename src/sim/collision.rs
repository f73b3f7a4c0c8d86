//! Pure geometry tests for the ball against paddles and walls
//!
//! All comparisons are strict, so a ball exactly touching an edge does not
//! collide. The wall reflection in `tick` uses the same tie-break, which
//! keeps boundary contact from double-firing across consecutive ticks.

use glam::Vec2;

/// Axis-aligned rectangle vs. circle-extent overlap test.
///
/// True iff the ball's bounding extent intersects the paddle rectangle on
/// both axes. No side effects; direction gating happens at the call site.
#[inline]
pub fn overlaps_paddle(
    ball_pos: Vec2,
    ball_radius: f32,
    paddle_x: f32,
    paddle_y: f32,
    paddle_w: f32,
    paddle_h: f32,
) -> bool {
    ball_pos.x + ball_radius > paddle_x
        && ball_pos.x - ball_radius < paddle_x + paddle_w
        && ball_pos.y + ball_radius > paddle_y
        && ball_pos.y - ball_radius < paddle_y + paddle_h
}

/// Signed penetration past the top wall (positive when the ball's top edge
/// is above y = 0).
#[inline]
pub fn top_wall_overshoot(ball_pos: Vec2, ball_radius: f32) -> f32 {
    ball_radius - ball_pos.y
}

/// Signed penetration past the bottom wall (positive when the ball's bottom
/// edge is below the playfield).
#[inline]
pub fn bottom_wall_overshoot(ball_pos: Vec2, ball_radius: f32, field_height: f32) -> f32 {
    ball_pos.y + ball_radius - field_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit() {
        // Paddle at (30, 200), 16x100; ball well inside its extent
        let pos = Vec2::new(40.0, 250.0);
        assert!(overlaps_paddle(pos, 12.0, 30.0, 200.0, 16.0, 100.0));
    }

    #[test]
    fn test_overlap_miss_horizontal() {
        let pos = Vec2::new(100.0, 250.0);
        assert!(!overlaps_paddle(pos, 12.0, 30.0, 200.0, 16.0, 100.0));
    }

    #[test]
    fn test_overlap_miss_vertical() {
        let pos = Vec2::new(40.0, 50.0);
        assert!(!overlaps_paddle(pos, 12.0, 30.0, 200.0, 16.0, 100.0));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        // Ball's left extent exactly on the paddle's right face
        let pos = Vec2::new(30.0 + 16.0 + 12.0, 250.0);
        assert!(!overlaps_paddle(pos, 12.0, 30.0, 200.0, 16.0, 100.0));

        // Ball's bottom extent exactly on the paddle's top edge
        let pos = Vec2::new(40.0, 200.0 - 12.0);
        assert!(!overlaps_paddle(pos, 12.0, 30.0, 200.0, 16.0, 100.0));
    }

    #[test]
    fn test_wall_overshoot() {
        assert!(top_wall_overshoot(Vec2::new(0.0, 5.0), 10.0) > 0.0);
        assert!(top_wall_overshoot(Vec2::new(0.0, 15.0), 10.0) < 0.0);
        assert!(bottom_wall_overshoot(Vec2::new(0.0, 495.0), 10.0, 500.0) > 0.0);
        assert!(bottom_wall_overshoot(Vec2::new(0.0, 480.0), 10.0, 500.0) < 0.0);
        // Exact touch is zero overshoot, treated as no hit by the tick
        assert_eq!(top_wall_overshoot(Vec2::new(0.0, 10.0), 10.0), 0.0);
    }
}
