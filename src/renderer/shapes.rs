//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{DrawCommand, Scene};
use super::vertex::Vertex;

/// Segments used for the ball
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for an axis-aligned rectangle (two triangles)
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
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

/// Flatten a scene into a triangle list, in draw order
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in &scene.commands {
        match *command {
            DrawCommand::Clear { color } => {
                vertices.extend(rect(0.0, 0.0, scene.width, scene.height, color))
            }
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => vertices.extend(rect(x, y, width, height, color)),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => vertices.extend(circle(center, radius, color, CIRCLE_SEGMENTS)),
        }
    }
    vertices
}
