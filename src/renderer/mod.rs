//! WebGPU rendering module
//!
//! A single pipeline drawing a per-frame list of colored triangles; the
//! scene is rebuilt from read-only game state each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
