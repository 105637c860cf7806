//! Hit point tracks.
//!
//! A clamped numeric resource between zero and a fixed maximum. All damage
//! and healing goes through here so the bounds hold everywhere.

use serde::{Deserialize, Serialize};

/// Current and maximum hit points, with `0 <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Create a track starting at its maximum. A negative maximum is treated
    /// as zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a track with a custom starting value, clamped to `[0, max]`.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Current hit points.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum hit points.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Remove hit points, never dropping below zero. Returns the new value.
    pub fn lose(&mut self, amount: i32) -> i32 {
        self.current = (self.current - amount.max(0)).max(0);
        self.current
    }

    /// Restore hit points, never exceeding the maximum. Returns the new value.
    pub fn restore(&mut self, amount: i32) -> i32 {
        self.current = self.current.saturating_add(amount.max(0)).min(self.max);
        self.current
    }

    /// Returns true once the track has hit zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the track is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_full() {
        let h = Health::new(30);
        assert_eq!(h.current(), 30);
        assert_eq!(h.max(), 30);
        assert!(h.is_full());
        assert!(!h.is_depleted());
    }

    #[test]
    fn with_current_clamps() {
        assert_eq!(Health::with_current(50, 30).current(), 30);
        assert_eq!(Health::with_current(-4, 30).current(), 0);
        assert_eq!(Health::with_current(28, 30).current(), 28);
    }

    #[test]
    fn lose_clamps_to_zero() {
        let mut h = Health::new(10);
        assert_eq!(h.lose(4), 6);
        assert_eq!(h.lose(100), 0);
        assert!(h.is_depleted());
    }

    #[test]
    fn restore_clamps_to_max() {
        let mut h = Health::with_current(28, 30);
        assert_eq!(h.restore(5), 30);
        assert!(h.is_full());
    }

    #[test]
    fn huge_restore_saturates_at_max() {
        let mut h = Health::with_current(5, 10);
        assert_eq!(h.restore(i32::MAX), 10);
    }

    #[test]
    fn negative_amounts_are_ignored() {
        let mut h = Health::with_current(5, 10);
        assert_eq!(h.lose(-3), 5);
        assert_eq!(h.restore(-3), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Health::with_current(9, 20).to_string(), "9/20");
    }
}
