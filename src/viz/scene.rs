//! Scene compositor
//!
//! Owns the animation-loop state machine and decides when the sky actually
//! redraws. While static, redraw cost is gated by the change detector; an
//! animating scene redraws unconditionally on every tick. The host drives
//! `tick()` at a fixed rate while `is_animating()` and calls `update()`
//! whenever a fresh habit snapshot arrives.

use log::{debug, trace};
use thiserror::Error;

use super::background::BackgroundLayer;
use super::diff::habits_changed;
use super::star::{StarPrimitive, map_habit};
use crate::habit::Habit;
use crate::render::shapes;
use crate::render::surface::Surface;
use crate::render::vertex::colors;

/// Segments used to tessellate circles (glow layers, backdrop stars)
const CIRCLE_SEGMENTS: u32 = 16;

/// Animation loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Nothing completed today: render once, then stay idle
    #[default]
    Static,
    /// At least one habit completed today: periodic redraws animate the glow
    Animating,
}

/// Scene lifecycle failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// The scene was disposed; create a new one to keep rendering
    #[error("scene has been disposed")]
    Disposed,
}

/// What one `update()` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The snapshot differed from the previous one
    pub changed: bool,
    /// A redraw was performed
    pub redrawn: bool,
    /// Loop state after the update
    pub state: LoopState,
}

/// The night-sky scene over a drawing surface.
///
/// The background layer is generated once at construction and cached for
/// the scene's lifetime; habit stars are recomputed deterministically on
/// every redraw.
pub struct SkyScene<S: Surface> {
    surface: Option<S>,
    background: BackgroundLayer,
    snapshot: Vec<Habit>,
    state: LoopState,
    frame: u64,
}

impl<S: Surface> SkyScene<S> {
    /// Create a scene over `surface`. The constructor consumes the surface,
    /// so a second scene on the same handle is unrepresentable.
    pub fn new(surface: S) -> Self {
        let (w, h) = surface.size();
        let background = BackgroundLayer::generate(w as f32, h as f32);
        debug!("sky scene created ({w}x{h})");
        Self {
            surface: Some(surface),
            background,
            snapshot: Vec::new(),
            state: LoopState::Static,
            frame: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == LoopState::Animating
    }

    /// Animation frame counter; advances only while animating
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The surface, while the scene is live
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Feed a new habit snapshot.
    ///
    /// The list is sorted by creation time (stable on ties) before diffing,
    /// so backend reordering never counts as a change. Returns
    /// `SceneError::Disposed` after `dispose()`.
    pub fn update(&mut self, habits: &[Habit]) -> Result<UpdateOutcome, SceneError> {
        if self.surface.is_none() {
            return Err(SceneError::Disposed);
        }

        let mut incoming = habits.to_vec();
        incoming.sort_by_key(|h| h.created_at);

        let changed = habits_changed(&self.snapshot, &incoming);
        let target = if incoming.iter().any(|h| h.completed_today) {
            LoopState::Animating
        } else {
            LoopState::Static
        };
        let previous = self.state;
        self.snapshot = incoming;
        self.state = target;

        if previous != target {
            debug!("loop state {previous:?} -> {target:?}");
        }

        let redraw = match (previous, target) {
            // Entering animation redraws immediately; the host takes over
            // with periodic ticks from here
            (LoopState::Static, LoopState::Animating) => true,
            // Leaving animation freezes the last frame
            (LoopState::Animating, LoopState::Static) => true,
            _ => changed,
        };
        if redraw {
            self.redraw()?;
        }

        Ok(UpdateOutcome {
            changed,
            redrawn: redraw,
            state: target,
        })
    }

    /// Advance the animation one frame. Redraws and returns `true` while
    /// animating; a static scene is a no-op returning `false`. Returns
    /// `SceneError::Disposed` after `dispose()`.
    pub fn tick(&mut self) -> Result<bool, SceneError> {
        if self.surface.is_none() {
            return Err(SceneError::Disposed);
        }
        if self.state != LoopState::Animating {
            return Ok(false);
        }
        self.frame += 1;
        self.redraw()?;
        Ok(true)
    }

    /// Stop animating and release the surface. Idempotent; later `update`
    /// and `tick` calls are rejected with `SceneError::Disposed`.
    pub fn dispose(&mut self) {
        if self.surface.take().is_some() {
            debug!("sky scene disposed at frame {}", self.frame);
        }
        self.state = LoopState::Static;
    }

    /// Current habit stars in draw order: less-developed entities first,
    /// completed-today stars last so their glow is never occluded.
    pub fn primitives(&self) -> Vec<StarPrimitive> {
        let (w, h) = match &self.surface {
            Some(s) => s.size(),
            None => (self.background.width as u32, self.background.height as u32),
        };
        let mut ordered: Vec<&Habit> = self.snapshot.iter().collect();
        ordered.sort_by_key(|h| (h.completed_today, h.completion_count.max(0)));
        ordered
            .into_iter()
            .map(|habit| map_habit(habit, self.frame, w as f32, h as f32))
            .collect()
    }

    fn redraw(&mut self) -> Result<(), SceneError> {
        let animating = self.state == LoopState::Animating;
        let frame = self.frame;
        let stars = self.primitives();

        let background = &self.background;
        let surface = self.surface.as_mut().ok_or(SceneError::Disposed)?;
        let (w, h) = surface.size();

        surface.clear(colors::CLEAR);
        surface.draw(&shapes::vertical_gradient(
            w as f32,
            h as f32,
            colors::SKY_TOP,
            colors::SKY_BOTTOM,
        ));

        for star in background.stars() {
            let mut color = colors::BACKGROUND_STAR;
            color[3] = BackgroundLayer::star_alpha(star, frame, animating);
            surface.draw(&shapes::circle(
                star.pos,
                star.size / 2.0,
                color,
                CIRCLE_SEGMENTS,
            ));
        }

        for star in &stars {
            if let Some(glow) = &star.glow {
                for layer in 0..glow.layers {
                    let diameter = glow.size * (1.0 - layer as f32 * 0.2);
                    surface.draw(&shapes::circle(
                        star.pos,
                        diameter / 2.0,
                        glow.color,
                        CIRCLE_SEGMENTS,
                    ));
                }
            }
            surface.draw(&shapes::star_polygon(
                star.pos,
                star.size / 2.0,
                star.points,
                star.rotation,
                star.color,
            ));
        }

        surface.present();
        trace!("redrew frame {frame} ({} habit stars)", stars.len());
        Ok(())
    }
}
