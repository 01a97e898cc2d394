//! Fixed-seed background layer
//!
//! A static starfield generated once when the scene is created and cached
//! for its lifetime. The seed is a constant, never habit-derived, so the
//! backdrop is identical for every user and every run. Each star carries a
//! twinkle phase and speed so the animating scene can shimmer the sky
//! without regenerating the layer.

use glam::Vec2;

use super::rng::SeededRng;
use crate::consts::*;

/// One static backdrop star
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStar {
    pub pos: Vec2,
    /// Diameter in pixels
    pub size: f32,
    /// Base alpha in [0, 1]
    pub alpha: f32,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
}

/// The cached backdrop. Immutable after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    stars: Vec<BackgroundStar>,
    pub width: f32,
    pub height: f32,
}

impl BackgroundLayer {
    /// Generate the layer for a canvas. Deterministic: same dimensions,
    /// same backdrop.
    pub fn generate(width: f32, height: f32) -> Self {
        let mut rng = SeededRng::new(BACKGROUND_SEED);
        let mut stars = Vec::with_capacity(BACKGROUND_STAR_COUNT);
        for _ in 0..BACKGROUND_STAR_COUNT {
            let x = rng.range(0.0, width as f64);
            let y = rng.range(0.0, height as f64 * BACKGROUND_MAX_Y);
            let size = rng.range(0.5, 1.5);
            let alpha = rng.range(50.0, 150.0) / 255.0;
            let twinkle_phase = rng.range(0.0, std::f64::consts::TAU);
            let twinkle_speed = rng.range(0.05, 0.15);
            stars.push(BackgroundStar {
                pos: Vec2::new(x as f32, y as f32),
                size: size as f32,
                alpha: alpha as f32,
                twinkle_phase: twinkle_phase as f32,
                twinkle_speed: twinkle_speed as f32,
            });
        }
        Self {
            stars,
            width,
            height,
        }
    }

    pub fn stars(&self) -> &[BackgroundStar] {
        &self.stars
    }

    /// Alpha of a star at `frame`. The twinkle term is subtle and only
    /// applies while the scene animates; a static scene uses the base alpha.
    pub fn star_alpha(star: &BackgroundStar, frame: u64, animating: bool) -> f32 {
        if !animating {
            return star.alpha;
        }
        let t = frame as f32 * star.twinkle_speed + star.twinkle_phase;
        (star.alpha * (0.85 + 0.15 * t.sin())).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = BackgroundLayer::generate(400.0, 400.0);
        let b = BackgroundLayer::generate(400.0, 400.0);
        assert_eq!(a, b);
        assert_eq!(a.stars().len(), BACKGROUND_STAR_COUNT);
    }

    #[test]
    fn test_stars_stay_in_sky_region() {
        let layer = BackgroundLayer::generate(400.0, 400.0);
        for star in layer.stars() {
            assert!(star.pos.x >= 0.0 && star.pos.x < 400.0);
            assert!(star.pos.y >= 0.0 && star.pos.y < 400.0 * BACKGROUND_MAX_Y as f32);
            assert!(star.size >= 0.5 && star.size < 1.5);
            assert!(star.alpha > 0.0 && star.alpha < 1.0);
        }
    }

    #[test]
    fn test_static_scenes_do_not_twinkle() {
        let layer = BackgroundLayer::generate(400.0, 400.0);
        let star = &layer.stars()[0];
        assert_eq!(BackgroundLayer::star_alpha(star, 0, false), star.alpha);
        assert_eq!(BackgroundLayer::star_alpha(star, 123, false), star.alpha);
    }

    #[test]
    fn test_twinkle_varies_with_frame_and_stays_bounded() {
        let layer = BackgroundLayer::generate(400.0, 400.0);
        let star = &layer.stars()[0];
        let alphas: Vec<f32> = (0..200)
            .map(|f| BackgroundLayer::star_alpha(star, f, true))
            .collect();
        assert!(alphas.windows(2).any(|w| w[0] != w[1]));
        for a in alphas {
            assert!((0.0..=1.0).contains(&a));
        }
    }
}
