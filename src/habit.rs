//! The habit record
//!
//! Owned and mutated by the store; the visualization core only ever reads
//! immutable snapshots. Serialization matches the camelCase JSON payload the
//! CRUD endpoints exchange.

use serde::{Deserialize, Serialize};

/// A tracked habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque unique identifier, stable for the habit's lifetime
    pub id: String,
    /// Display label, non-empty after trimming
    pub name: String,
    /// Creation time (epoch milliseconds); establishes display order
    pub created_at: u64,
    /// Immutable per-habit seed driving all deterministic randomness.
    /// `None` falls back to an id-derived seed.
    #[serde(default)]
    pub visual_seed: Option<i64>,
    /// Distinct calendar days on which the habit was completed. The store
    /// keeps this non-negative; the visual mapping clamps defensively.
    pub completion_count: i64,
    /// Whether today's occurrence is currently marked complete
    pub completed_today: bool,
    /// Most recent toggle-to-complete (epoch milliseconds)
    #[serde(default)]
    pub last_completion_timestamp: Option<u64>,
}

impl Habit {
    /// The seed that parameterizes this habit's visuals.
    ///
    /// Prefers `visual_seed`. Habits without one derive a stable seed from
    /// the first 8 hex characters of the id; ids that do not start with hex
    /// fold each prefix byte into a 31-based accumulator instead, so every
    /// habit resolves to some stable seed.
    pub fn resolved_seed(&self) -> i64 {
        self.visual_seed.unwrap_or_else(|| seed_from_id(&self.id))
    }
}

fn seed_from_id(id: &str) -> i64 {
    let prefix: String = id.chars().take(8).collect();
    if let Ok(v) = u32::from_str_radix(&prefix, 16) {
        return v as i64;
    }
    let mut h: u32 = 0;
    for b in prefix.bytes() {
        h = h.wrapping_mul(31).wrapping_add(b as u32);
    }
    h as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, seed: Option<i64>) -> Habit {
        Habit {
            id: id.to_string(),
            name: "Test".to_string(),
            created_at: 0,
            visual_seed: seed,
            completion_count: 0,
            completed_today: false,
            last_completion_timestamp: None,
        }
    }

    #[test]
    fn test_explicit_seed_wins() {
        assert_eq!(habit("deadbeef-1234", Some(7)).resolved_seed(), 7);
    }

    #[test]
    fn test_seed_from_hex_id_prefix() {
        // UUID-style id: first 8 hex chars parsed as u32
        let h = habit("0000002a-aaaa-bbbb-cccc-000000000000", None);
        assert_eq!(h.resolved_seed(), 0x2a);
    }

    #[test]
    fn test_seed_from_non_hex_id_is_stable() {
        let a = habit("habit-one", None).resolved_seed();
        let b = habit("habit-one", None).resolved_seed();
        let c = habit("habit-two", None).resolved_seed();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = r#"{
            "id": "h1",
            "name": "Meditate",
            "createdAt": 1700000000000,
            "visualSeed": 42,
            "completionCount": 3,
            "completedToday": true,
            "lastCompletionTimestamp": 1700000400000
        }"#;
        let h: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(h.visual_seed, Some(42));
        assert_eq!(h.completion_count, 3);
        assert!(h.completed_today);

        let back = serde_json::to_string(&h).unwrap();
        assert!(back.contains("completedToday"));
        assert!(back.contains("visualSeed"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"x","name":"n","createdAt":0,"completionCount":0,"completedToday":false}"#;
        let h: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(h.visual_seed, None);
        assert_eq!(h.last_completion_timestamp, None);
    }
}
