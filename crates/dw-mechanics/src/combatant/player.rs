//! The player character: stats, equipment, and three inventories.

use super::pack::Pack;
use super::{Combatant, Hit, Recovery, apply_hit};
use crate::error::{MechError, MechResult};
use crate::item::{Armor, ItemKind, Potion, Weapon};
use crate::track::Health;

/// The player character.
///
/// Equipped gear is tracked as an index into the owning inventory, so an
/// equipped item is always one the player is carrying.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    health: Health,
    base_attack: i32,
    base_defense: i32,
    weapons: Pack<Weapon>,
    armor: Pack<Armor>,
    potions: Vec<Potion>,
}

impl Player {
    /// Create a player at full health with empty inventories.
    pub fn new(name: impl Into<String>, hit_points: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health: Health::new(hit_points),
            base_attack: attack,
            base_defense: defense,
            weapons: Pack::new(ItemKind::Weapon),
            armor: Pack::new(ItemKind::Armor),
            potions: Vec::new(),
        }
    }

    /// Attack before equipment.
    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    /// Defense before equipment.
    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    /// Base attack plus the equipped weapon's bonus.
    pub fn total_attack(&self) -> i32 {
        self.base_attack + self.weapons.equipped().map_or(0, Weapon::attack_bonus)
    }

    /// Base defense plus the equipped armor's bonus.
    pub fn total_defense(&self) -> i32 {
        self.base_defense + self.armor.equipped().map_or(0, Armor::defense_bonus)
    }

    /// Restore hit points, capped at the maximum.
    pub fn heal(&mut self, amount: i32) -> Recovery {
        self.health.restore(amount);
        Recovery {
            target: self.name.clone(),
            amount,
            health: self.health,
        }
    }

    // -----------------------------------------------------------------------
    // Inventories
    // -----------------------------------------------------------------------

    /// Weapons carried, in pickup order.
    pub fn weapons(&self) -> &[Weapon] {
        self.weapons.items()
    }

    /// Armor carried, in pickup order.
    pub fn armor(&self) -> &[Armor] {
        self.armor.items()
    }

    /// Potions carried, in pickup order.
    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    /// Returns true if all three inventories are empty.
    pub fn is_empty_handed(&self) -> bool {
        self.weapons().is_empty() && self.armor().is_empty() && self.potions.is_empty()
    }

    /// Add a weapon. Returns its inventory index.
    pub fn add_weapon(&mut self, weapon: Weapon) -> usize {
        self.weapons.push(weapon)
    }

    /// Add a piece of armor. Returns its inventory index.
    pub fn add_armor(&mut self, armor: Armor) -> usize {
        self.armor.push(armor)
    }

    /// Add a potion. Returns its inventory index.
    pub fn add_potion(&mut self, potion: Potion) -> usize {
        self.potions.push(potion);
        self.potions.len() - 1
    }

    // -----------------------------------------------------------------------
    // Equipment
    // -----------------------------------------------------------------------

    /// The equipped weapon, if any.
    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapons.equipped()
    }

    /// The equipped armor, if any.
    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.armor.equipped()
    }

    /// Returns true if the weapon at `index` is the equipped one.
    pub fn is_weapon_equipped(&self, index: usize) -> bool {
        self.weapons.equipped_index() == Some(index)
    }

    /// Returns true if the armor at `index` is the equipped one.
    pub fn is_armor_equipped(&self, index: usize) -> bool {
        self.armor.equipped_index() == Some(index)
    }

    /// Equip the weapon at `index`, replacing whatever was equipped.
    pub fn equip_weapon(&mut self, index: usize) -> MechResult<&Weapon> {
        self.weapons.equip(index)
    }

    /// Equip the armor at `index`, replacing whatever was equipped.
    pub fn equip_armor(&mut self, index: usize) -> MechResult<&Armor> {
        self.armor.equip(index)
    }

    /// Clear the weapon slot. Returns the weapon that was equipped.
    pub fn unequip_weapon(&mut self) -> Option<&Weapon> {
        self.weapons.unequip()
    }

    /// Clear the armor slot. Returns the armor that was equipped.
    pub fn unequip_armor(&mut self) -> Option<&Armor> {
        self.armor.unequip()
    }

    // -----------------------------------------------------------------------
    // Consuming and discarding
    // -----------------------------------------------------------------------

    /// Drink the potion at `index`: heal by its amount and consume it.
    ///
    /// An out-of-range index is an error and changes nothing.
    pub fn use_potion(&mut self, index: usize) -> MechResult<Recovery> {
        if index >= self.potions.len() {
            return Err(MechError::InvalidIndex {
                kind: ItemKind::Potion,
                index,
                len: self.potions.len(),
            });
        }
        let potion = self.potions.remove(index);
        tracing::debug!(potion = potion.name(), "potion consumed");
        Ok(self.heal(potion.heal_amount()))
    }

    /// Remove and return the weapon at `index`, unequipping it first if needed.
    pub fn drop_weapon(&mut self, index: usize) -> MechResult<Weapon> {
        self.weapons.remove(index)
    }

    /// Remove and return the armor at `index`, unequipping it first if needed.
    pub fn drop_armor(&mut self, index: usize) -> MechResult<Armor> {
        self.armor.remove(index)
    }

    /// Remove and return the potion at `index`.
    pub fn drop_potion(&mut self, index: usize) -> MechResult<Potion> {
        if index >= self.potions.len() {
            return Err(MechError::InvalidIndex {
                kind: ItemKind::Potion,
                index,
                len: self.potions.len(),
            });
        }
        Ok(self.potions.remove(index))
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> Health {
        self.health
    }

    fn attack_value(&self) -> i32 {
        self.total_attack()
    }

    fn defense_value(&self) -> i32 {
        self.total_defense()
    }

    fn take_damage(&mut self, raw: i32) -> Hit {
        let defense = self.total_defense();
        apply_hit(&self.name, &mut self.health, raw, defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geared_player() -> Player {
        let mut p = Player::new("Ana", 30, 5, 2);
        let sword = p.add_weapon(Weapon::new("Wooden Sword", 2));
        let leather = p.add_armor(Armor::new("Leather Armor", 1));
        p.add_potion(Potion::new("Healing Potion", 5));
        p.equip_weapon(sword).unwrap();
        p.equip_armor(leather).unwrap();
        p
    }

    #[test]
    fn starting_gear_adds_bonuses() {
        let p = geared_player();
        assert_eq!(p.total_attack(), p.base_attack() + 2);
        assert_eq!(p.total_defense(), p.base_defense() + 1);
        assert_eq!(p.attack_value(), 7);
        assert_eq!(p.defense_value(), 3);
    }

    #[test]
    fn no_equipment_means_no_bonus() {
        let p = Player::new("Ana", 30, 5, 2);
        assert_eq!(p.total_attack(), 5);
        assert_eq!(p.total_defense(), 2);
        assert!(p.equipped_weapon().is_none());
        assert!(p.is_empty_handed());
    }

    #[test]
    fn take_damage_uses_total_defense() {
        let mut p = geared_player();
        let hit = p.take_damage(10);
        assert_eq!(hit.damage, 7);
        assert_eq!(p.health().current(), 23);
    }

    #[test]
    fn potion_heal_is_capped() {
        let mut p = geared_player();
        p.take_damage(5); // 5 - 3 defense = 2 damage, HP 28/30
        assert_eq!(p.health().current(), 28);
        let rec = p.use_potion(0).unwrap();
        assert_eq!(rec.health.current(), 30);
        assert_eq!(rec.amount, 5);
        assert!(p.potions().is_empty());
    }

    #[test]
    fn invalid_potion_index_is_a_no_op() {
        let mut p = geared_player();
        p.take_damage(10);
        let err = p.use_potion(4).unwrap_err();
        assert_eq!(
            err,
            MechError::InvalidIndex {
                kind: ItemKind::Potion,
                index: 4,
                len: 1
            }
        );
        assert_eq!(p.potions().len(), 1);
        assert_eq!(p.health().current(), 23);
    }

    #[test]
    fn equipping_replaces_previous() {
        let mut p = geared_player();
        let dagger = p.add_weapon(Weapon::new("Dagger", 3));
        p.equip_weapon(dagger).unwrap();
        assert_eq!(p.equipped_weapon().map(Weapon::name), Some("Dagger"));
        assert_eq!(p.weapons().len(), 2);
        assert_eq!(p.total_attack(), 8);
        assert!(p.is_weapon_equipped(1));
        assert!(!p.is_weapon_equipped(0));
    }

    #[test]
    fn equip_out_of_range_is_error() {
        let mut p = Player::new("Ana", 30, 5, 2);
        assert!(p.equip_weapon(0).is_err());
        assert!(p.equip_armor(2).is_err());
    }

    #[test]
    fn dropping_equipped_weapon_clears_bonus() {
        let mut p = geared_player();
        let dropped = p.drop_weapon(0).unwrap();
        assert_eq!(dropped.name(), "Wooden Sword");
        assert!(p.equipped_weapon().is_none());
        assert_eq!(p.total_attack(), 5);
    }

    #[test]
    fn dropping_other_armor_keeps_equipped() {
        let mut p = Player::new("Ana", 30, 5, 2);
        p.add_armor(Armor::new("Rags", 0));
        let mail = p.add_armor(Armor::new("Mail", 3));
        p.equip_armor(mail).unwrap();
        p.drop_armor(0).unwrap();
        assert_eq!(p.equipped_armor().map(Armor::name), Some("Mail"));
        assert!(p.is_armor_equipped(0));
        assert_eq!(p.total_defense(), 5);
    }

    #[test]
    fn unequip_keeps_item_in_inventory() {
        let mut p = geared_player();
        assert_eq!(p.unequip_armor().map(Armor::name), Some("Leather Armor"));
        assert_eq!(p.armor().len(), 1);
        assert_eq!(p.total_defense(), 2);
        assert!(p.unequip_armor().is_none());
    }

    #[test]
    fn drop_potion() {
        let mut p = geared_player();
        assert_eq!(p.drop_potion(0).unwrap().name(), "Healing Potion");
        assert!(p.drop_potion(0).is_err());
    }

    #[test]
    fn death_at_zero() {
        let mut p = Player::new("Ana", 5, 1, 0);
        p.take_damage(50);
        assert_eq!(p.health().current(), 0);
        assert!(!p.is_alive());
    }
}
