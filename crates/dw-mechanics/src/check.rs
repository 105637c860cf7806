//! Threshold checks: roll a die and compare against a minimum.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, Roller};

/// The result of a single threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The die that was rolled.
    pub die: Die,
    /// The value rolled.
    pub roll: u32,
    /// The minimum roll needed (inclusive).
    pub target: u32,
}

impl CheckOutcome {
    /// Build an outcome from an already-rolled value.
    pub fn new(die: Die, roll: u32, target: u32) -> Self {
        Self { die, roll, target }
    }

    /// Returns true if the roll met or beat the target.
    pub fn succeeded(&self) -> bool {
        self.roll >= self.target
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.succeeded() { "success" } else { "failure" };
        write!(
            f,
            "{} rolled {} vs {} ({verdict})",
            self.die, self.roll, self.target
        )
    }
}

/// Roll `die` once and compare against `target`.
pub fn roll_check(roller: &mut dyn Roller, die: Die, target: u32) -> CheckOutcome {
    let roll = roller.roll(die);
    let outcome = CheckOutcome::new(die, roll, target);
    tracing::debug!(%outcome, "check rolled");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRoller;

    #[test]
    fn inclusive_lower_bound() {
        let mut roller = ScriptedRoller::new([10, 9]);
        assert!(roll_check(&mut roller, Die::D20, 10).succeeded());
        assert!(!roll_check(&mut roller, Die::D20, 10).succeeded());
    }

    #[test]
    fn display() {
        let outcome = CheckOutcome::new(Die::D20, 12, 10);
        assert_eq!(outcome.to_string(), "D20 rolled 12 vs 10 (success)");
        let outcome = CheckOutcome::new(Die::D20, 3, 10);
        assert_eq!(outcome.to_string(), "D20 rolled 3 vs 10 (failure)");
    }
}
