//! Versioned, diffable export of every generated token.
//!
//! The snapshot flattens all scales into a flat `name -> value` list so
//! reimplementations in other languages can be pinned against the same
//! golden values. Bump [`SNAPSHOT_VERSION`] whenever the generator
//! changes any emitted value or name.

use serde::{Deserialize, Serialize};

use crate::fib::shared;
use crate::golden::{PHI, PHI_INVERSE};
use crate::scale::{DurationScale, Easing, RadiusScale, SpacingScale};

/// Version of the snapshot layout and the generated values.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Number of Fibonacci terms included in the snapshot.
const FIB_TERMS: usize = 16;

/// One exported token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub value: f64,
}

/// A flat, ordered export of every generated constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub version: u32,
    pub entries: Vec<SnapshotEntry>,
}

impl TokenSnapshot {
    /// Captures all scales built from the given bases.
    ///
    /// Entry order is fixed: golden-ratio scalars, Fibonacci prefix,
    /// golden spacing, grid spacing, radii, durations, easing
    /// coefficients. Two captures with the same bases are identical.
    pub fn capture(spacing_base: f64, duration_base_ms: f64) -> Self {
        let mut entries = Vec::new();
        let mut push = |name: String, value: f64| {
            entries.push(SnapshotEntry { name, value });
        };

        push("golden.phi".to_string(), PHI);
        push("golden.phi-inverse".to_string(), PHI_INVERSE);

        let table = shared();
        table.ensure_len(FIB_TERMS);
        for index in 0..FIB_TERMS {
            push(format!("fib.{}", index), table.value(index) as f64);
        }

        for scale in [
            SpacingScale::golden(spacing_base),
            SpacingScale::grid(spacing_base),
        ] {
            let label = scale.system().label();
            for (step, value) in scale.entries() {
                push(format!("spacing.{}.{}", label, step), value);
            }
        }

        for (step, value) in RadiusScale::new(spacing_base).entries() {
            push(format!("radius.{}", step), value);
        }

        for (step, value) in DurationScale::new(duration_base_ms).entries() {
            push(format!("duration.{}", step), value);
        }

        for (curve, [x1, y1, x2, y2]) in Easing::new().entries() {
            for (coord, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
                push(format!("easing.{}.{}", curve, coord), value);
            }
        }

        Self {
            version: SNAPSHOT_VERSION,
            entries,
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on serialization
    /// failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Looks up an exported value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_deterministic() {
        let first = TokenSnapshot::capture(4.0, 300.0);
        let second = TokenSnapshot::capture(4.0, 300.0);
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_carries_version() {
        let snapshot = TokenSnapshot::capture(4.0, 300.0);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn test_known_entries() {
        let snapshot = TokenSnapshot::capture(1.0, 300.0);
        assert_eq!(snapshot.get("fib.9"), Some(34.0));
        assert_eq!(snapshot.get("spacing.golden.md"), Some(5.0));
        assert_eq!(snapshot.get("spacing.grid.md"), Some(16.0));
        assert_eq!(snapshot.get("duration.normal"), Some(300.0));
        assert!(snapshot.get("golden.phi").is_some());
        assert!(snapshot.get("easing.ease-golden.x1").is_some());
    }

    #[test]
    fn test_names_are_unique() {
        let snapshot = TokenSnapshot::capture(2.0, 200.0);
        let mut names: Vec<&str> = snapshot
            .entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), snapshot.entries.len());
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = TokenSnapshot::capture(4.0, 300.0);
        let json = snapshot.to_json().unwrap();
        let parsed: TokenSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
