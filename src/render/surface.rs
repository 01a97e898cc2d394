//! Drawing surface seam
//!
//! The scene renders through this trait so the host picks where pixels go:
//! the software rasterizer, a test recorder, or something of its own.

use super::vertex::Vertex;

/// A drawing target for one scene
pub trait Surface {
    /// Surface dimensions in pixels
    fn size(&self) -> (u32, u32);

    /// Begin a frame by filling with a solid color
    fn clear(&mut self, color: [f32; 4]);

    /// Append a colored triangle list to the current frame
    fn draw(&mut self, vertices: &[Vertex]);

    /// Mark the current frame complete
    fn present(&mut self);
}

/// Surface double that counts draw activity instead of rasterizing.
///
/// Drives the scene state-machine tests and works as a headless target.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Frames completed with `present()`
    pub frames_presented: u32,
    /// `draw()` calls in the current frame
    pub draw_calls: u32,
    /// Vertices accumulated in the current frame
    pub vertices_in_frame: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, _color: [f32; 4]) {
        self.draw_calls = 0;
        self.vertices_in_frame = 0;
    }

    fn draw(&mut self, vertices: &[Vertex]) {
        self.draw_calls += 1;
        self.vertices_in_frame += vertices.len();
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_counts_frames() {
        let mut surface = RecordingSurface::new(100, 50);
        assert_eq!(surface.size(), (100, 50));

        surface.clear([0.0; 4]);
        surface.draw(&[Vertex::new(0.0, 0.0, [1.0; 4]); 3]);
        surface.draw(&[Vertex::new(0.0, 0.0, [1.0; 4]); 6]);
        surface.present();

        assert_eq!(surface.frames_presented, 1);
        assert_eq!(surface.draw_calls, 2);
        assert_eq!(surface.vertices_in_frame, 9);

        // A new frame resets the per-frame counters
        surface.clear([0.0; 4]);
        assert_eq!(surface.draw_calls, 0);
        assert_eq!(surface.frames_presented, 1);
    }
}
