//! Shape generation for 2D primitives
//!
//! Flattens the current game state into a single colored-triangle list in
//! playfield coordinates; the pipeline maps those to NDC at upload time.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Net dash length and gap, in playfield pixels
const NET_DASH: f32 = 10.0;
const NET_GAP: f32 = 15.0;
const NET_WIDTH: f32 = 2.0;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
        Vertex::new(x, y, color),
        Vertex::new(x + w, y + h, color),
        Vertex::new(x, y + h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate the dashed center net
pub fn net(field_w: f32, field_h: f32) -> Vec<Vertex> {
    let x = field_w / 2.0 - NET_WIDTH / 2.0;
    let mut vertices = Vec::new();

    let mut y = 0.0;
    while y < field_h {
        let dash = NET_DASH.min(field_h - y);
        vertices.extend(rect(x, y, NET_WIDTH, dash, colors::NET));
        y += NET_DASH + NET_GAP;
    }

    vertices
}

/// Flatten the whole frame: net, both paddles, ball. The background comes
/// from the render pass clear color; scores are DOM elements, not geometry.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let s = &state.scale;
    let mut vertices = net(state.field.width, state.field.height);

    vertices.extend(rect(
        state.left.x,
        state.left.y,
        s.paddle_w,
        s.paddle_h,
        colors::PADDLE_LEFT,
    ));
    vertices.extend(rect(
        state.right.x,
        state.right.y,
        s.paddle_w,
        s.paddle_h,
        colors::PADDLE_RIGHT,
    ));
    vertices.extend(circle(state.ball.pos, s.ball_radius, colors::BALL, 24));

    vertices
}
