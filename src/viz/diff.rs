//! Habit snapshot change detection
//!
//! Decides whether a redraw is worth doing. Equality is per-habit over the
//! (id, completedToday, completionCount, visualSeed) tuple; anything else a
//! habit carries (name, timestamps) does not affect the sky and must not
//! trigger one. Both slices must already be in canonical creation order -
//! the scene sorts before calling, so a reordered backend response never
//! counts as a change.

use crate::habit::Habit;

/// True when `next` would render differently than `prev`.
pub fn habits_changed(prev: &[Habit], next: &[Habit]) -> bool {
    if prev.len() != next.len() {
        return true;
    }
    prev.iter().zip(next).any(|(a, b)| {
        a.id != b.id
            || a.completed_today != b.completed_today
            || a.completion_count != b.completion_count
            || a.visual_seed != b.visual_seed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, count: i64, completed: bool) -> Habit {
        Habit {
            id: id.to_string(),
            name: "Test".to_string(),
            created_at: 0,
            visual_seed: Some(1),
            completion_count: count,
            completed_today: completed,
            last_completion_timestamp: None,
        }
    }

    #[test]
    fn test_identical_lists_are_unchanged() {
        let prev = vec![habit("a", 1, false), habit("b", 2, true)];
        let next = prev.clone();
        assert!(!habits_changed(&prev, &next));
        assert!(!habits_changed(&[], &[]));
    }

    #[test]
    fn test_length_difference_is_a_change() {
        let prev = vec![habit("a", 1, false)];
        assert!(habits_changed(&prev, &[]));
        assert!(habits_changed(&[], &prev));
    }

    #[test]
    fn test_tracked_field_differences_are_changes() {
        let prev = vec![habit("a", 1, false)];

        let mut flipped = prev.clone();
        flipped[0].completed_today = true;
        assert!(habits_changed(&prev, &flipped));

        let mut counted = prev.clone();
        counted[0].completion_count = 2;
        assert!(habits_changed(&prev, &counted));

        let mut reseeded = prev.clone();
        reseeded[0].visual_seed = Some(99);
        assert!(habits_changed(&prev, &reseeded));

        let swapped = vec![habit("b", 1, false)];
        assert!(habits_changed(&prev, &swapped));
    }

    #[test]
    fn test_untracked_fields_are_ignored() {
        let prev = vec![habit("a", 1, false)];
        let mut renamed = prev.clone();
        renamed[0].name = "Renamed".to_string();
        renamed[0].last_completion_timestamp = Some(123);
        assert!(!habits_changed(&prev, &renamed));
    }
}
