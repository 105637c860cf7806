//! The item catalog: weapons, armor, and potions.
//!
//! Items are immutable value records. Whoever holds one owns it; moving an
//! item from a scene's loot pool into the player's pack moves ownership.

use serde::{Deserialize, Serialize};

/// Which inventory an item belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Weapons add to attack.
    Weapon,
    /// Armor adds to defense.
    Armor,
    /// Potions restore hit points once.
    Potion,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Potion => write!(f, "potion"),
        }
    }
}

/// A weapon with a flat attack bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    attack_bonus: i32,
}

impl Weapon {
    /// Create a weapon.
    pub fn new(name: impl Into<String>, attack_bonus: i32) -> Self {
        Self {
            name: name.into(),
            attack_bonus,
        }
    }

    /// The weapon's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bonus added to the wielder's attack.
    pub fn attack_bonus(&self) -> i32 {
        self.attack_bonus
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Attack: +{})", self.name, self.attack_bonus)
    }
}

/// A piece of armor with a flat defense bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    name: String,
    defense_bonus: i32,
}

impl Armor {
    /// Create a piece of armor.
    pub fn new(name: impl Into<String>, defense_bonus: i32) -> Self {
        Self {
            name: name.into(),
            defense_bonus,
        }
    }

    /// The armor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bonus added to the wearer's defense.
    pub fn defense_bonus(&self) -> i32 {
        self.defense_bonus
    }
}

impl std::fmt::Display for Armor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Defense: +{})", self.name, self.defense_bonus)
    }
}

/// A single-use healing potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    name: String,
    heal_amount: i32,
}

impl Potion {
    /// Create a potion.
    pub fn new(name: impl Into<String>, heal_amount: i32) -> Self {
        Self {
            name: name.into(),
            heal_amount,
        }
    }

    /// The potion's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hit points restored when drunk.
    pub fn heal_amount(&self) -> i32 {
        self.heal_amount
    }
}

impl std::fmt::Display for Potion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Heals: +{} HP)", self.name, self.heal_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let w = Weapon::new("Dagger", 3);
        assert_eq!(w.name(), "Dagger");
        assert_eq!(w.attack_bonus(), 3);

        let a = Armor::new("Mage Armor", 4);
        assert_eq!(a.name(), "Mage Armor");
        assert_eq!(a.defense_bonus(), 4);

        let p = Potion::new("Healing Potion", 5);
        assert_eq!(p.name(), "Healing Potion");
        assert_eq!(p.heal_amount(), 5);
    }

    #[test]
    fn labels() {
        assert_eq!(Weapon::new("Dagger", 3).to_string(), "Dagger (Attack: +3)");
        assert_eq!(
            Armor::new("Mage Armor", 4).to_string(),
            "Mage Armor (Defense: +4)"
        );
        assert_eq!(
            Potion::new("Healing Potion", 5).to_string(),
            "Healing Potion (Heals: +5 HP)"
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(ItemKind::Weapon.to_string(), "weapon");
        assert_eq!(ItemKind::Armor.to_string(), "armor");
        assert_eq!(ItemKind::Potion.to_string(), "potion");
    }
}
