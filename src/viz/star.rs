//! Per-habit visual mapping
//!
//! Pure function from one habit snapshot (plus the externally supplied frame
//! counter and canvas size) to the drawing parameters of its star. Primitives
//! are recomputed fresh on every redraw; determinism comes from constructing
//! a seeded generator per habit, never from caching. The sampling order below
//! is fixed - reordering the draws changes every sky.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SeededRng;
use crate::consts::*;
use crate::habit::Habit;
use crate::map_range;

/// Visual intensity class of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Never completed: fixed small size, muted color
    Muted,
    /// Completed on past days but not today: brightness scales with count
    Active,
    /// Completed today: largest rendering, pulsing glow
    Bright,
}

/// Pulsing glow layers under a bright star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub color: [f32; 4],
    /// Diameter of the outermost layer at the mapped frame
    pub size: f32,
    /// Concentric layers, each 20% smaller than the last
    pub layers: u32,
}

/// Drawing parameters for one habit's star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarPrimitive {
    pub habit_id: String,
    pub pos: Vec2,
    /// Star diameter in pixels
    pub size: f32,
    pub color: [f32; 4],
    pub glow: Option<Glow>,
    /// Star polygon spike count
    pub points: u32,
    /// Rotation in radians
    pub rotation: f32,
    pub tier: Tier,
}

/// Map one habit to its star.
///
/// `frame` is the scene's animation frame counter; it only affects the glow
/// term of a completed-today star. For fixed inputs the output is
/// bit-identical across invocations and process restarts.
pub fn map_habit(habit: &Habit, frame: u64, width: f32, height: f32) -> StarPrimitive {
    let mut rng = SeededRng::new(habit.resolved_seed());
    let (w, h) = (width as f64, height as f64);

    let x = rng.range(w * SKY_X_MIN, w * SKY_X_MAX);
    let y = rng.range(h * SKY_Y_MIN, h * SKY_Y_MAX);

    let count = habit.completion_count.max(0) as f64;
    let mut size = map_range(count, 0.0, COUNT_DOMAIN_MAX, STAR_SIZE_MIN, STAR_SIZE_MAX);

    let tier;
    let color;
    let mut glow = None;

    if habit.completed_today {
        tier = Tier::Bright;
        color = rgba255(255.0, 255.0, rng.range(180.0, 220.0), 255.0);
        size *= rng.range(1.5, 2.2);
        let glow_color = rgba255(255.0, 255.0, 200.0, 80.0);
        let glow_base = size * rng.range(2.5, 4.0);
        let pulse_speed = rng.range(3.0, 7.0);
        let glow_size = glow_base + (frame as f64 * pulse_speed).sin() * size * 0.5;
        glow = Some(Glow {
            color: glow_color,
            size: glow_size as f32,
            layers: GLOW_LAYERS,
        });
    } else if habit.completion_count > 0 {
        tier = Tier::Active;
        // More completed days, warmer and more saturated
        let blue = 255.0 - map_range(count, 0.0, COUNT_DOMAIN_MAX, 0.0, 50.0);
        color = rgba255(220.0, 220.0, blue, 255.0);
    } else {
        tier = Tier::Muted;
        color = rgba255(150.0, 150.0, 180.0, 200.0);
        size = rng.range(1.5, 2.5);
    }

    let points = rng.int_range(4, 6) as u32;
    let rotation = rng.range(0.0, std::f64::consts::TAU) as f32;

    StarPrimitive {
        habit_id: habit.id.clone(),
        pos: Vec2::new(x as f32, y as f32),
        size: size as f32,
        color,
        glow,
        points,
        rotation,
        tier,
    }
}

#[inline]
fn rgba255(r: f64, g: f64, b: f64, a: f64) -> [f32; 4] {
    [
        (r / 255.0) as f32,
        (g / 255.0) as f32,
        (b / 255.0) as f32,
        (a / 255.0) as f32,
    ]
}
