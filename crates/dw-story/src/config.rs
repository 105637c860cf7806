//! Configuration for an adventure run.

use std::time::Duration;

use dw_mechanics::{Armor, CombatRules, Player, Potion, RngRoller, Weapon};

use crate::console::DEFAULT_ATTEMPTS;

/// Starting stats and gear for the player character.
#[derive(Debug, Clone)]
pub struct PlayerTemplate {
    /// Maximum and starting hit points.
    pub hit_points: i32,
    /// Base attack.
    pub attack: i32,
    /// Base defense.
    pub defense: i32,
    /// Starting weapons; the first one is equipped.
    pub weapons: Vec<Weapon>,
    /// Starting armor; the first piece is equipped.
    pub armor: Vec<Armor>,
    /// Starting potions.
    pub potions: Vec<Potion>,
}

impl Default for PlayerTemplate {
    fn default() -> Self {
        Self {
            hit_points: 30,
            attack: 5,
            defense: 2,
            weapons: vec![Weapon::new("Wooden Sword", 2)],
            armor: vec![Armor::new("Leather Armor", 1)],
            potions: vec![Potion::new("Healing Potion", 5)],
        }
    }
}

impl PlayerTemplate {
    /// Create a player from this template.
    pub fn spawn(&self, name: impl Into<String>) -> Player {
        let mut player = Player::new(name, self.hit_points, self.attack, self.defense);
        let weapons: Vec<usize> = self
            .weapons
            .iter()
            .map(|w| player.add_weapon(w.clone()))
            .collect();
        let armor: Vec<usize> = self
            .armor
            .iter()
            .map(|a| player.add_armor(a.clone()))
            .collect();
        for potion in &self.potions {
            player.add_potion(potion.clone());
        }
        if let Some(e) = weapons.first().and_then(|&i| player.equip_weapon(i).err()) {
            tracing::warn!(error = %e, "starting weapon not equipped");
        }
        if let Some(e) = armor.first().and_then(|&i| player.equip_armor(i).err()) {
            tracing::warn!(error = %e, "starting armor not equipped");
        }
        player
    }
}

/// Configuration for an adventure run.
#[derive(Debug, Clone)]
pub struct AdventureConfig {
    /// RNG seed for reproducible rolls; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Pause between narrated combat steps.
    pub pacing: Duration,
    /// Invalid entries tolerated per selection before defaulting to 0.
    pub input_attempts: u32,
    /// Combat thresholds and damage dice.
    pub rules: CombatRules,
    /// Starting player.
    pub player: PlayerTemplate,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing: Duration::from_millis(500),
            input_attempts: DEFAULT_ATTEMPTS,
            rules: CombatRules::default(),
            player: PlayerTemplate::default(),
        }
    }
}

impl AdventureConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause between narrated combat steps.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Disable narration pauses.
    pub fn without_pacing(self) -> Self {
        self.with_pacing(Duration::ZERO)
    }

    /// Set the input retry budget (at least 1).
    pub fn with_input_attempts(mut self, attempts: u32) -> Self {
        self.input_attempts = attempts.max(1);
        self
    }

    /// Set the combat rules.
    pub fn with_rules(mut self, rules: CombatRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the starting player.
    pub fn with_player(mut self, player: PlayerTemplate) -> Self {
        self.player = player;
        self
    }

    /// Build the roller for this run.
    pub fn roller(&self) -> RngRoller {
        match self.seed {
            Some(seed) => RngRoller::seeded(seed),
            None => RngRoller::from_entropy(),
        }
    }
}
