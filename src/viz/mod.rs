//! Deterministic visualization core
//!
//! All sky logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, one fresh generator per habit per redraw
//! - Frame counter supplied by the host, never a wall clock
//! - Stable draw order (creation order, then development)
//! - No platform dependencies beyond the `Surface` seam

pub mod background;
pub mod diff;
pub mod rng;
pub mod scene;
pub mod star;

pub use background::BackgroundLayer;
pub use diff::habits_changed;
pub use rng::SeededRng;
pub use scene::{LoopState, SceneError, SkyScene, UpdateOutcome};
pub use star::{Glow, StarPrimitive, Tier, map_habit};
