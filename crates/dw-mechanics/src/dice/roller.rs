//! Roller implementations.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Die;

/// Source of die rolls.
///
/// Implementations must return a value in `1..=die.sides()`.
pub trait Roller {
    /// Roll a single die.
    fn roll(&mut self, die: Die) -> u32;
}

impl<R: Roller + ?Sized> Roller for &mut R {
    fn roll(&mut self, die: Die) -> u32 {
        (**self).roll(die)
    }
}

impl<R: Roller + ?Sized> Roller for Box<R> {
    fn roll(&mut self, die: Die) -> u32 {
        (**self).roll(die)
    }
}

/// A roller backed by a standard RNG, seeded once per run.
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// Create a roller with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Roller for RngRoller {
    fn roll(&mut self, die: Die) -> u32 {
        self.rng.random_range(1..=die.sides())
    }
}

/// A roller that replays a fixed sequence of values.
///
/// Each value is clamped to the face range of the die it is rolled on.
/// Once the script runs out, the last value is repeated (1 if the script
/// was empty).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    script: VecDeque<u32>,
    last: Option<u32>,
}

impl ScriptedRoller {
    /// Create a roller from a sequence of values.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            last: None,
        }
    }

    /// Append more values to the end of the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = u32>) {
        self.script.extend(values);
    }

    /// How many scripted values have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, die: Die) -> u32 {
        let value = match self.script.pop_front() {
            Some(v) => {
                self.last = Some(v);
                v
            }
            None => self.last.unwrap_or(1),
        };
        value.clamp(1, die.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_roller_stays_in_range() {
        let mut roller = RngRoller::seeded(42);
        for die in [Die::D4, Die::D6, Die::D20] {
            for _ in 0..200 {
                let v = roller.roll(die);
                assert!((1..=die.sides()).contains(&v), "{die} rolled {v}");
            }
        }
    }

    #[test]
    fn rng_roller_deterministic_with_seed() {
        let mut a = RngRoller::seeded(99);
        let mut b = RngRoller::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.roll(Die::D20), b.roll(Die::D20));
        }
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut roller = ScriptedRoller::new([20, 3, 7]);
        assert_eq!(roller.roll(Die::D20), 20);
        assert_eq!(roller.roll(Die::D6), 3);
        assert_eq!(roller.remaining(), 1);
        assert_eq!(roller.roll(Die::D20), 7);
        assert_eq!(roller.remaining(), 0);
    }

    #[test]
    fn scripted_clamps_to_die() {
        let mut roller = ScriptedRoller::new([20, 0]);
        assert_eq!(roller.roll(Die::D6), 6);
        assert_eq!(roller.roll(Die::D6), 1);
    }

    #[test]
    fn scripted_repeats_last_when_exhausted() {
        let mut roller = ScriptedRoller::new([15]);
        roller.roll(Die::D20);
        assert_eq!(roller.roll(Die::D20), 15);
        assert_eq!(roller.roll(Die::D4), 4);

        let mut empty = ScriptedRoller::default();
        assert_eq!(empty.roll(Die::D20), 1);
    }

    #[test]
    fn roller_through_mutable_reference() {
        fn roll_twice(mut r: impl Roller) -> (u32, u32) {
            (r.roll(Die::D20), r.roll(Die::D20))
        }
        let mut roller = ScriptedRoller::new([4, 9]);
        assert_eq!(roll_twice(&mut roller), (4, 9));
    }
}
