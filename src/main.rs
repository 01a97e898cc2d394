//! Habit Sky entry point
//!
//! Builds a small in-memory habit list, drives the visualization through a
//! static and an animating phase, and writes the rendered frames out as PPM
//! images.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use habit_sky::consts::{ANIMATION_FPS, DEFAULT_CANVAS_SIZE};
use habit_sky::render::PixmapSurface;
use habit_sky::store::MS_PER_DAY;
use habit_sky::{HabitStore, SkyScene};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let out_prefix = std::env::args().nth(1).unwrap_or_else(|| "night-sky".to_string());

    let mut store = HabitStore::new();
    let meditate = store.add("Meditate", now_ms - 40 * MS_PER_DAY)?;
    let stretch = store.add("Stretch", now_ms - 20 * MS_PER_DAY)?;
    let read = store.add("Read 20 pages", now_ms - 5 * MS_PER_DAY)?;
    store.add("Journal", now_ms)?;

    // Replay some completion history so the sky has developed stars
    backfill(&mut store, &meditate.id, 24, now_ms)?;
    backfill(&mut store, &stretch.id, 9, now_ms)?;
    backfill(&mut store, &read.id, 3, now_ms)?;

    let surface = PixmapSurface::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE);
    let mut scene = SkyScene::new(surface);

    let outcome = scene.update(&store.list())?;
    log::info!(
        "static sky rendered ({} habits, state {:?})",
        store.len(),
        outcome.state
    );
    if let Some(surface) = scene.surface() {
        surface.write_ppm(format!("{out_prefix}-static.ppm"))?;
    }

    // Completing two habits today flips the scene into animation
    store.toggle(&meditate.id, now_ms)?;
    store.toggle(&read.id, now_ms)?;
    let outcome = scene.update(&store.list())?;
    log::info!("after completions: state {:?}", outcome.state);

    // One second of glow animation
    for _ in 0..ANIMATION_FPS {
        scene.tick()?;
    }
    if let Some(surface) = scene.surface() {
        surface.write_ppm(format!("{out_prefix}-animated.ppm"))?;
    }
    println!("wrote {out_prefix}-static.ppm and {out_prefix}-animated.ppm");
    log::debug!(
        "final habit snapshot: {}",
        serde_json::to_string_pretty(&store.list())?
    );

    scene.dispose();
    Ok(())
}

/// Mark a habit complete on each of the `days` calendar days leading up to
/// (and excluding) today. Earlier days need an off/on pair because toggling
/// a completed habit on a later day unmarks it first.
fn backfill(
    store: &mut HabitStore,
    id: &str,
    days: u64,
    now_ms: u64,
) -> Result<(), Box<dyn Error>> {
    for day in (1..=days).rev() {
        let ts = now_ms - day * MS_PER_DAY;
        let habit = store.toggle(id, ts)?;
        if !habit.completed_today {
            store.toggle(id, ts)?;
        }
    }
    // History replay leaves the habit flagged for yesterday; clear the flag
    // without touching the counted days
    store.toggle(id, now_ms)?;
    Ok(())
}
