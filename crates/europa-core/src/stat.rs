//! Bounded gauges (health, energy).
//!
//! A stat is a named value held between zero and its maximum. Every
//! modification clamps, so no sequence of deltas can push it out of range.

use serde::Serialize;

/// A named numeric gauge clamped to `0..=maximum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    name: String,
    current: i32,
    maximum: i32,
}

impl Stat {
    /// Create a new stat starting at its maximum. Negative maxima are treated as zero.
    pub fn new(name: impl Into<String>, maximum: i32) -> Self {
        let maximum = maximum.max(0);
        Self {
            name: name.into(),
            current: maximum,
            maximum,
        }
    }

    /// Display name of the stat.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Adjust by a delta, clamping to `0..=maximum`. Returns the new value.
    pub fn modify(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.maximum);
        self.current
    }

    /// Returns true if the stat is at zero.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Returns true if the stat is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.maximum)
    }
}
