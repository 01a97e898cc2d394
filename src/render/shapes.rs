//! Shape tessellation for 2D primitives
//!
//! Everything the scene draws is reduced to colored triangle lists; the
//! surface decides how those reach the screen.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

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

/// Generate vertices for a star polygon with `points` spikes.
///
/// Spike tips sit on `outer_radius`; the valleys between them on 45% of it.
/// `rotation` turns the whole star around its center.
pub fn star_polygon(
    center: Vec2,
    outer_radius: f32,
    points: u32,
    rotation: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let points = points.max(3);
    let inner_radius = outer_radius * 0.45;
    let wedges = points * 2;
    let mut vertices = Vec::with_capacity((wedges * 3) as usize);

    let vertex_at = |k: u32| {
        let r = if k % 2 == 0 { outer_radius } else { inner_radius };
        let theta = rotation + (k as f32 / wedges as f32) * 2.0 * PI;
        Vec2::new(center.x + r * theta.cos(), center.y + r * theta.sin())
    };

    for k in 0..wedges {
        let a = vertex_at(k);
        let b = vertex_at(k + 1);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate a full-canvas quad with a vertical color gradient.
///
/// The rasterizer interpolates vertex colors, so two triangles cover the
/// whole sky with a smooth top-to-bottom blend.
pub fn vertical_gradient(
    width: f32,
    height: f32,
    top: [f32; 4],
    bottom: [f32; 4],
) -> Vec<Vertex> {
    let tl = Vertex::new(0.0, 0.0, top);
    let tr = Vertex::new(width, 0.0, top);
    let bl = Vertex::new(0.0, height, bottom);
    let br = Vertex::new(width, height, bottom);
    vec![tl, tr, bl, tr, br, bl]
}
