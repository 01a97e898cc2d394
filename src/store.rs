//! In-memory habit store
//!
//! Single source of truth the visualization reads snapshots from. Process
//! memory only; mutations go through the store so readers always see fully
//! formed records. Callers supply the current time, which keeps the
//! calendar-day accounting testable.

use thiserror::Error;
use uuid::Uuid;

use crate::habit::Habit;

/// Milliseconds per UTC calendar day
pub const MS_PER_DAY: u64 = 86_400_000;

/// UTC day index of an epoch-milliseconds timestamp. Two timestamps on the
/// same calendar day share an index.
#[inline]
pub fn day_index(ms: u64) -> u64 {
    ms / MS_PER_DAY
}

/// Store operation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("habit name must not be empty")]
    EmptyName,
    #[error("no habit with id {id}")]
    NotFound { id: String },
}

/// The habit collection
#[derive(Debug, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a habit. The name is trimmed and must be non-empty; the visual
    /// seed is drawn once here and never changes afterwards.
    pub fn add(&mut self, name: &str, now_ms: u64) -> Result<Habit, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: now_ms,
            visual_seed: Some(rand::random::<u32>() as i64),
            completion_count: 0,
            completed_today: false,
            last_completion_timestamp: None,
        };
        log::debug!("added habit {:?} ({})", habit.name, habit.id);
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Flip a habit's completion state for the day containing `now_ms`.
    ///
    /// Marking complete increments the count only when no completion was
    /// already recorded for that calendar day. Unmarking decrements only
    /// when the recorded completion falls on the same calendar day, and
    /// clears the completion stamp so re-marking later that day counts
    /// again; a completion from a previous day stays counted.
    pub fn toggle(&mut self, id: &str, now_ms: u64) -> Result<Habit, StoreError> {
        let today = day_index(now_ms);
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if habit.completed_today {
            habit.completed_today = false;
            if habit.last_completion_timestamp.map(day_index) == Some(today) {
                habit.completion_count = (habit.completion_count - 1).max(0);
                habit.last_completion_timestamp = None;
            }
        } else {
            habit.completed_today = true;
            if habit.last_completion_timestamp.map(day_index) != Some(today) {
                habit.completion_count += 1;
            }
            habit.last_completion_timestamp = Some(now_ms);
        }
        log::debug!(
            "toggled habit {} -> completed_today={} count={}",
            habit.id,
            habit.completed_today,
            habit.completion_count
        );
        Ok(habit.clone())
    }

    /// Delete a habit outright. No soft delete, no history retained.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        log::debug!("removed habit {id}");
        Ok(())
    }

    /// Snapshot of all habits in canonical display order (creation time
    /// ascending, insertion order on ties).
    pub fn list(&self) -> Vec<Habit> {
        let mut habits = self.habits.clone();
        habits.sort_by_key(|h| h.created_at);
        habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
