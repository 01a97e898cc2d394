//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    /// Night-sky gradient, top of canvas
    pub const SKY_TOP: [f32; 4] = [10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0, 1.0];
    /// Night-sky gradient, bottom of canvas
    pub const SKY_BOTTOM: [f32; 4] = [25.0 / 255.0, 20.0 / 255.0, 55.0 / 255.0, 1.0];
    /// Backdrop stars (alpha substituted per star)
    pub const BACKGROUND_STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Frame clear color
    pub const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
