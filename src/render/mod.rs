//! Rendering module
//!
//! Tessellates scene primitives into colored triangle lists and hands them
//! to a `Surface`. The software `PixmapSurface` is the default target; tests
//! and headless hosts use `RecordingSurface`.

pub mod pixmap;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pixmap::PixmapSurface;
pub use surface::{RecordingSurface, Surface};
pub use vertex::Vertex;
