//! Scenes and the choices that connect them.

use dw_mechanics::{Armor, Combatant, Enemy, Player, Potion, Weapon};
use serde::{Deserialize, Serialize};

/// Identifier of a scene within a story graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneId(pub u32);

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the player.
    pub description: String,
    /// Target when the choice is taken (and any check passes).
    pub next: SceneId,
    /// Minimum d20 roll required; 0 means unconditional.
    pub min_roll: u32,
    /// Target when the check fails.
    pub fail: Option<SceneId>,
}

impl Choice {
    /// An unconditional choice.
    pub fn new(description: impl Into<String>, next: SceneId) -> Self {
        Self {
            description: description.into(),
            next,
            min_roll: 0,
            fail: None,
        }
    }

    /// Gate the choice behind a d20 check.
    pub fn with_check(mut self, min_roll: u32, fail: SceneId) -> Self {
        self.min_roll = min_roll;
        self.fail = Some(fail);
        self
    }

    /// Returns true if taking this choice requires a roll.
    pub fn is_checked(&self) -> bool {
        self.min_roll > 0
    }

    /// Every scene this choice can lead to.
    pub fn targets(&self) -> impl Iterator<Item = SceneId> + '_ {
        std::iter::once(self.next).chain(self.fail)
    }
}

/// A node in the story graph.
#[derive(Debug, Clone)]
pub struct Scene {
    id: SceneId,
    description: String,
    choices: Vec<Choice>,
    enemy: Option<Enemy>,
    weapon_loot: Vec<Weapon>,
    armor_loot: Vec<Armor>,
    potion_loot: Vec<Potion>,
}

impl Scene {
    /// Create a scene with no choices, enemy or loot.
    pub fn new(id: SceneId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            choices: Vec::new(),
            enemy: None,
            weapon_loot: Vec::new(),
            armor_loot: Vec::new(),
            potion_loot: Vec::new(),
        }
    }

    /// The scene id.
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// The narrative text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Outgoing choices in presentation order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The enemy bound to this scene, alive or not.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Mutable access to the bound enemy.
    pub fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        self.enemy.as_mut()
    }

    /// Weapons waiting to be picked up.
    pub fn weapon_loot(&self) -> &[Weapon] {
        &self.weapon_loot
    }

    /// Armor waiting to be picked up.
    pub fn armor_loot(&self) -> &[Armor] {
        &self.armor_loot
    }

    /// Potions waiting to be picked up.
    pub fn potion_loot(&self) -> &[Potion] {
        &self.potion_loot
    }

    /// Returns true if an enemy is bound and still alive.
    pub fn has_live_enemy(&self) -> bool {
        self.enemy.as_ref().is_some_and(Enemy::is_alive)
    }

    /// Returns true if the scene has no way out.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// Returns true if any loot pool is non-empty.
    pub fn has_loot(&self) -> bool {
        !(self.weapon_loot.is_empty() && self.armor_loot.is_empty() && self.potion_loot.is_empty())
    }

    // -----------------------------------------------------------------------
    // Authoring
    // -----------------------------------------------------------------------

    /// Append a choice.
    pub fn add_choice(&mut self, choice: Choice) -> &mut Self {
        self.choices.push(choice);
        self
    }

    /// Bind an enemy, replacing any previous one.
    pub fn set_enemy(&mut self, enemy: Enemy) -> &mut Self {
        self.enemy = Some(enemy);
        self
    }

    /// Add a weapon to the loot pool.
    pub fn add_weapon_loot(&mut self, weapon: Weapon) -> &mut Self {
        self.weapon_loot.push(weapon);
        self
    }

    /// Add armor to the loot pool.
    pub fn add_armor_loot(&mut self, armor: Armor) -> &mut Self {
        self.armor_loot.push(armor);
        self
    }

    /// Add a potion to the loot pool.
    pub fn add_potion_loot(&mut self, potion: Potion) -> &mut Self {
        self.potion_loot.push(potion);
        self
    }

    // -----------------------------------------------------------------------
    // Play
    // -----------------------------------------------------------------------

    /// Render the scene header, description and any live enemy.
    pub fn display(&self) -> String {
        let mut out = format!(
            "\n * * * * * * * * * *\n- - - Scene {} - - -\n{}\n",
            self.id, self.description
        );
        if let Some(enemy) = self.enemy.as_ref().filter(|e| e.is_alive()) {
            out.push_str(&format!(
                "\nA {} is here! (HP: {})\n",
                enemy.name(),
                enemy.health().current()
            ));
        }
        out.push_str("\n * * * * * * * * * *\n");
        out
    }

    /// Move every loot item into the player's inventories.
    ///
    /// Weapons go first, then armor, then potions, each in the order they
    /// were added. Returns the labels of the items handed over; a second
    /// call returns nothing.
    pub fn distribute_loot(&mut self, player: &mut Player) -> Vec<String> {
        let mut received = Vec::new();
        for weapon in self.weapon_loot.drain(..) {
            received.push(weapon.to_string());
            player.add_weapon(weapon);
        }
        for armor in self.armor_loot.drain(..) {
            received.push(armor.to_string());
            player.add_armor(armor);
        }
        for potion in self.potion_loot.drain(..) {
            received.push(potion.to_string());
            player.add_potion(potion);
        }
        if !received.is_empty() {
            tracing::info!(scene = %self.id, items = received.len(), "loot distributed");
        }
        received
    }
}
