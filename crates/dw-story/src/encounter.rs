//! Interactive combat.
//!
//! The menu loop lives here; every roll and hit comes from
//! [`Combat::resolve_round`], which this module only narrates.

use dw_mechanics::{
    Combat, CombatAction, CombatEvent, CombatRules, CombatState, Combatant, Enemy, Player, Roller,
};

use crate::console::Narrator;
use crate::error::StoryResult;
use crate::inventory::{InventoryMode, manage_inventory, status_report};

/// Fight `enemy` until one side falls or the player escapes.
pub fn run_encounter(
    player: &mut Player,
    enemy: &mut Enemy,
    roller: &mut dyn Roller,
    rules: &CombatRules,
    narrator: &mut Narrator<'_>,
) -> StoryResult<CombatState> {
    let mut combat = Combat::new(rules.clone());
    tracing::info!(enemy = enemy.name(), hp = %enemy.health(), "combat started");

    narrator.say("\n- - - COMBAT BEGINS - - -");
    narrator.say(format!(
        "You face the {} (HP: {}).",
        enemy.name(),
        enemy.health()
    ));

    while !combat.state().is_over() {
        narrator.say("\nYour turn:");
        narrator.say("1. Attack");
        narrator.say("2. Check status");
        narrator.say("3. Manage inventory");
        narrator.say("4. Try to flee");
        narrator.write("Enter your choice: ");

        let action = match narrator.choose(4)? {
            1 => CombatAction::Attack,
            4 => CombatAction::Flee,
            2 => {
                narrator.write(&status_report(player));
                narrator.say(format!("\n{} HP: {}", enemy.name(), enemy.health()));
                continue;
            }
            3 => {
                narrator.say("\nNote: Potions cannot be used during combat.");
                manage_inventory(player, narrator, InventoryMode::Combat)?;
                continue;
            }
            _ => {
                narrator.say("Cannot cancel during combat.");
                continue;
            }
        };

        let round = combat.resolve_round(action, player, enemy, roller)?;
        for event in &round.events {
            narrate(event, enemy.name(), narrator);
        }
    }

    let state = combat.state();
    match state {
        CombatState::PlayerVictory => {
            narrator.say(format!("\nVictory! You defeated the {}.", enemy.name()));
        }
        CombatState::PlayerDefeat => {
            narrator.say(format!("\nYou have been defeated by the {}.", enemy.name()));
        }
        CombatState::PlayerFled | CombatState::Ongoing => {}
    }
    Ok(state)
}

fn narrate(event: &CombatEvent, enemy: &str, narrator: &mut Narrator<'_>) {
    match event {
        CombatEvent::PlayerAttack { check, hit } => {
            narrator.say(format!("\nRolling attack dice ({})...", check.die));
            narrator.pause();
            narrator.say(format!("You rolled: {}", check.roll));
            match hit {
                Some(hit) => {
                    narrator.say(format!("You strike the {enemy}!"));
                    narrator.say(hit.to_string());
                }
                None => narrator.say("Critical miss! You missed your attack."),
            }
        }
        CombatEvent::FleeAttempt { check } => {
            narrator.say(format!("\nRolling escape dice ({})...", check.die));
            narrator.pause();
            narrator.say(format!("You rolled: {}", check.roll));
            if check.succeeded() {
                narrator.say(format!("You successfully escape from the {enemy}!"));
            } else {
                narrator.say("You failed to escape!");
            }
        }
        CombatEvent::EnemyAttack {
            attacker,
            check,
            hit,
        } => {
            narrator.pause();
            narrator.say("\nEnemy's turn:");
            narrator.say(format!("The {attacker} attacks you!"));
            narrator.say(format!("Rolling enemy attack dice ({})...", check.die));
            narrator.pause();
            narrator.say(format!("The {attacker} rolled: {}", check.roll));
            match hit {
                Some(hit) => {
                    narrator.say(format!("HIT! The {attacker} strikes you!"));
                    narrator.say(hit.to_string());
                }
                None => narrator.say(format!("MISS! The {attacker} fails to hit you.")),
            }
        }
    }
}
