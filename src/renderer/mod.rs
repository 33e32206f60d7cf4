//! Rendering
//!
//! `scene` turns the game state into draw commands; `shapes` tessellates them
//! into triangles for the WebGPU pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, Scene, build_scene, score_text};
