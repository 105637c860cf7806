//! Enemies bound to scenes.

use serde::{Deserialize, Serialize};

use super::{Combatant, Hit, apply_hit};
use crate::track::Health;

/// A hostile creature. Its hit points only change through
/// [`Combatant::take_damage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    name: String,
    health: Health,
    attack: i32,
    defense: i32,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(name: impl Into<String>, hit_points: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health: Health::new(hit_points),
            attack,
            defense,
        }
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> Health {
        self.health
    }

    fn attack_value(&self) -> i32 {
        self.attack
    }

    fn defense_value(&self) -> i32 {
        self.defense
    }

    fn take_damage(&mut self, raw: i32) -> Hit {
        apply_hit(&self.name, &mut self.health, raw, self.defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enemy_is_alive() {
        let e = Enemy::new("Kraan", 20, 6, 2);
        assert_eq!(e.name(), "Kraan");
        assert_eq!(e.health().current(), 20);
        assert_eq!(e.health().max(), 20);
        assert_eq!(e.attack_value(), 6);
        assert_eq!(e.defense_value(), 2);
        assert!(e.is_alive());
    }

    #[test]
    fn damage_reduced_by_defense() {
        let mut e = Enemy::new("Kraan", 20, 6, 2);
        let hit = e.take_damage(13);
        assert_eq!(hit.damage, 11);
        assert_eq!(e.health().current(), 9);
    }

    #[test]
    fn high_defense_still_takes_one() {
        let mut e = Enemy::new("Golem", 5, 1, 50);
        assert_eq!(e.take_damage(10).damage, 1);
        assert_eq!(e.health().current(), 4);
    }

    #[test]
    fn overkill_stops_at_zero() {
        let mut e = Enemy::new("Giak", 10, 13, 4);
        let hit = e.take_damage(100);
        assert_eq!(hit.health.current(), 0);
        assert!(!e.is_alive());
    }
}
