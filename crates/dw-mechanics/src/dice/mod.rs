//! Dice types and the rolling seam.
//!
//! Every random number in the game is drawn through a [`Roller`]. The
//! production roller wraps a seeded `StdRng`; [`ScriptedRoller`] replays a
//! fixed sequence so encounters can be forced to exact outcomes.

pub mod roller;

pub use roller::{RngRoller, Roller, ScriptedRoller};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Twenty-sided die.
    D20,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D20 => 20,
            Self::Custom(n) => n.max(1),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D4 => write!(f, "D4"),
            Self::D6 => write!(f, "D6"),
            Self::D20 => write!(f, "D20"),
            Self::Custom(n) => write!(f, "D{n}"),
        }
    }
}
