//! Combat state machine for a single player-versus-enemy encounter.
//!
//! An encounter starts [`CombatState::Ongoing`]. Each call to
//! [`Combat::resolve_round`] takes one round-consuming action from the
//! player, gives the enemy its turn if it is still standing, and then
//! re-evaluates the state. Menu actions that do not consume a round
//! (checking status, managing inventory) never reach this module.

pub mod action;

pub use action::{CombatAction, CombatEvent};

use serde::{Deserialize, Serialize};

use crate::check::roll_check;
use crate::combatant::Combatant;
use crate::dice::{Die, Roller};
use crate::error::{MechError, MechResult};

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatState {
    /// Both sides are still fighting.
    Ongoing,
    /// The enemy was reduced to zero hit points.
    PlayerVictory,
    /// The player was reduced to zero hit points.
    PlayerDefeat,
    /// The player escaped; the enemy is untouched by the escape itself.
    PlayerFled,
}

impl CombatState {
    /// Returns true once the encounter has ended.
    pub fn is_over(self) -> bool {
        self != Self::Ongoing
    }

    /// Returns true only for a player victory.
    pub fn won(self) -> bool {
        self == Self::PlayerVictory
    }
}

impl std::fmt::Display for CombatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::PlayerVictory => write!(f, "victory"),
            Self::PlayerDefeat => write!(f, "defeat"),
            Self::PlayerFled => write!(f, "fled"),
        }
    }
}

/// Thresholds and damage dice for combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRules {
    /// Die rolled for every hit and escape check.
    pub check_die: Die,
    /// Minimum roll for the player's attack to land.
    pub player_hit: u32,
    /// Minimum roll for the enemy's attack to land.
    pub enemy_hit: u32,
    /// Minimum roll to escape.
    pub flee: u32,
    /// Bonus die added to the player's damage.
    pub player_damage_die: Die,
    /// Bonus die added to the enemy's damage.
    pub enemy_damage_die: Die,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            check_die: Die::D20,
            player_hit: 5,
            enemy_hit: 8,
            flee: 12,
            player_damage_die: Die::D6,
            enemy_damage_die: Die::D4,
        }
    }
}

/// The outcome of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Round number (1-based).
    pub number: u32,
    /// Everything that happened, in order.
    pub events: Vec<CombatEvent>,
    /// The encounter state after the round.
    pub state: CombatState,
}

/// An encounter in progress.
#[derive(Debug, Clone)]
pub struct Combat {
    rules: CombatRules,
    state: CombatState,
    round: u32,
    log: Vec<CombatEvent>,
}

impl Combat {
    /// Start a new encounter under the given rules.
    pub fn new(rules: CombatRules) -> Self {
        Self {
            rules,
            state: CombatState::Ongoing,
            round: 0,
            log: Vec::new(),
        }
    }

    /// The rules in force.
    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// Current state.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Number of rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.round
    }

    /// Every event of the encounter so far.
    pub fn log(&self) -> &[CombatEvent] {
        &self.log
    }

    /// Resolve one round-consuming action.
    ///
    /// Returns [`MechError::CombatOver`] if the encounter already ended.
    pub fn resolve_round(
        &mut self,
        action: CombatAction,
        player: &mut dyn Combatant,
        enemy: &mut dyn Combatant,
        roller: &mut dyn Roller,
    ) -> MechResult<Round> {
        if self.state.is_over() {
            return Err(MechError::CombatOver);
        }
        self.round += 1;
        let mut events = Vec::new();

        match action {
            CombatAction::Attack => {
                let check = roll_check(roller, self.rules.check_die, self.rules.player_hit);
                let hit = check.succeeded().then(|| {
                    let raw =
                        player.attack_value() + roller.roll(self.rules.player_damage_die) as i32;
                    enemy.take_damage(raw)
                });
                events.push(CombatEvent::PlayerAttack { check, hit });
            }
            CombatAction::Flee => {
                let check = roll_check(roller, self.rules.check_die, self.rules.flee);
                events.push(CombatEvent::FleeAttempt { check });
                if check.succeeded() {
                    return Ok(self.finish_round(events, CombatState::PlayerFled));
                }
            }
        }

        if enemy.is_alive() {
            let check = roll_check(roller, self.rules.check_die, self.rules.enemy_hit);
            let hit = check.succeeded().then(|| {
                let raw = enemy.attack_value() + roller.roll(self.rules.enemy_damage_die) as i32;
                player.take_damage(raw)
            });
            events.push(CombatEvent::EnemyAttack {
                attacker: enemy.name().to_string(),
                check,
                hit,
            });
        }

        let state = if !player.is_alive() {
            CombatState::PlayerDefeat
        } else if !enemy.is_alive() {
            CombatState::PlayerVictory
        } else {
            CombatState::Ongoing
        };
        Ok(self.finish_round(events, state))
    }

    fn finish_round(&mut self, events: Vec<CombatEvent>, state: CombatState) -> Round {
        for event in &events {
            tracing::debug!(round = self.round, %event, "combat event");
        }
        if state.is_over() {
            tracing::info!(rounds = self.round, %state, "combat resolved");
        }
        self.state = state;
        self.log.extend(events.iter().cloned());
        Round {
            number: self.round,
            events,
            state,
        }
    }
}

impl Default for Combat {
    fn default() -> Self {
        Self::new(CombatRules::default())
    }
}
