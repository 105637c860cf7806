//! Player and enemy combatants.
//!
//! Both sides share the damage formula: a hit deals
//! `max(1, raw - defense)` so every landed blow makes progress, and hit
//! points never leave `[0, max]`. Mutators return a record describing what
//! happened; the caller decides how to show it.

pub mod enemy;
mod pack;
pub mod player;

pub use enemy::Enemy;
pub use player::Player;

use serde::{Deserialize, Serialize};

use crate::track::Health;

/// Common surface of anything that can fight.
pub trait Combatant {
    /// Display name.
    fn name(&self) -> &str;

    /// Current hit point track.
    fn health(&self) -> Health;

    /// Attack value used for damage rolls.
    fn attack_value(&self) -> i32;

    /// Defense value subtracted from incoming damage.
    fn defense_value(&self) -> i32;

    /// Apply raw damage after defense. Returns what landed.
    fn take_damage(&mut self, raw: i32) -> Hit;

    /// Returns true while hit points remain.
    fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }
}

/// Damage that actually lands after defense: never less than 1.
pub fn mitigate(raw: i32, defense: i32) -> i32 {
    raw.saturating_sub(defense).max(1)
}

/// Apply a raw hit to a health track and describe the result.
pub(crate) fn apply_hit(target: &str, health: &mut Health, raw: i32, defense: i32) -> Hit {
    let damage = mitigate(raw, defense);
    health.lose(damage);
    let hit = Hit {
        target: target.to_string(),
        damage,
        health: *health,
    };
    tracing::debug!(who = %hit.target, damage, hp = %hit.health, "hit applied");
    hit
}

/// A landed hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Who was hit.
    pub target: String,
    /// Damage actually dealt after defense.
    pub damage: i32,
    /// The target's hit points after the hit.
    pub health: Health,
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} takes {} damage! HP: {}",
            self.target, self.damage, self.health
        )
    }
}

/// Hit points restored by a heal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recovery {
    /// Who was healed.
    pub target: String,
    /// The heal amount requested.
    pub amount: i32,
    /// Hit points after healing.
    pub health: Health,
}

impl std::fmt::Display for Recovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} heals {} HP! HP: {}",
            self.target, self.amount, self.health
        )
    }
}
