//! The inventory management menu.

use dw_mechanics::{Combatant, Player};

use crate::console::Narrator;
use crate::error::StoryResult;

/// Where the menu was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryMode {
    /// Between scenes; everything is allowed.
    Exploring,
    /// Mid-combat; potions are off limits.
    Combat,
}

#[derive(Clone, Copy)]
enum Slot {
    Weapon,
    Armor,
}

/// Render the character sheet: health, stat breakdown and inventories.
pub fn status_report(player: &Player) -> String {
    let mut lines = vec![
        "\n - - - Character Status - - -".to_string(),
        format!("Name: {}", player.name()),
        format!("HP: {}", player.health()),
    ];

    lines.push(match player.equipped_weapon() {
        Some(w) => format!(
            "Attack: {} (Base: {} + {} from {})",
            player.total_attack(),
            player.base_attack(),
            w.attack_bonus(),
            w.name()
        ),
        None => format!("Attack: {} (Base: {})", player.total_attack(), player.base_attack()),
    });
    lines.push(match player.equipped_armor() {
        Some(a) => format!(
            "Defense: {} (Base: {} + {} from {})",
            player.total_defense(),
            player.base_defense(),
            a.defense_bonus(),
            a.name()
        ),
        None => format!(
            "Defense: {} (Base: {})",
            player.total_defense(),
            player.base_defense()
        ),
    });

    lines.push("\nWeapons:".to_string());
    push_items(
        &mut lines,
        player
            .weapons()
            .iter()
            .enumerate()
            .map(|(i, w)| marked(w.to_string(), player.is_weapon_equipped(i))),
    );
    lines.push("Armor:".to_string());
    push_items(
        &mut lines,
        player
            .armor()
            .iter()
            .enumerate()
            .map(|(i, a)| marked(a.to_string(), player.is_armor_equipped(i))),
    );
    lines.push("Potions:".to_string());
    push_items(&mut lines, player.potions().iter().map(ToString::to_string));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn marked(label: String, equipped: bool) -> String {
    if equipped {
        format!("{label} (Equipped)")
    } else {
        label
    }
}

fn push_items(lines: &mut Vec<String>, items: impl Iterator<Item = String>) {
    let before = lines.len();
    lines.extend(items.map(|item| format!(" - {item}")));
    if lines.len() == before {
        lines.push(" (none)".to_string());
    }
}

/// Run the inventory menu until the player returns with `0`.
pub fn manage_inventory(
    player: &mut Player,
    narrator: &mut Narrator<'_>,
    mode: InventoryMode,
) -> StoryResult<()> {
    loop {
        narrator.say("\n * * Inventory * *");
        narrator.say("1. Character Status");
        narrator.say("2. Equip a weapon");
        narrator.say("3. Equip armor");
        match mode {
            InventoryMode::Exploring => narrator.say("4. Use a potion"),
            InventoryMode::Combat => narrator.say("4. Use a potion (not during combat)"),
        }
        narrator.say("5. Drop an item");
        narrator.say(" - - - -");
        narrator.write("Enter your choice (0 to return): ");

        match narrator.choose(5)? {
            0 => return Ok(()),
            1 => narrator.write(&status_report(player)),
            2 => equip_menu(player, narrator, Slot::Weapon)?,
            3 => equip_menu(player, narrator, Slot::Armor)?,
            4 => potion_menu(player, narrator, mode)?,
            _ => drop_menu(player, narrator)?,
        }
    }
}

fn equip_menu(player: &mut Player, narrator: &mut Narrator<'_>, slot: Slot) -> StoryResult<()> {
    let entries: Vec<(String, String, bool)> = match slot {
        Slot::Weapon => player
            .weapons()
            .iter()
            .enumerate()
            .map(|(i, w)| (w.name().to_string(), w.to_string(), player.is_weapon_equipped(i)))
            .collect(),
        Slot::Armor => player
            .armor()
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name().to_string(), a.to_string(), player.is_armor_equipped(i)))
            .collect(),
    };
    let noun = match slot {
        Slot::Weapon => "weapon",
        Slot::Armor => "armor",
    };

    if entries.is_empty() {
        narrator.say(format!("\nYou have no {noun} to equip."));
        return Ok(());
    }

    narrator.say(format!("\nChoose {noun} to equip:"));
    for (i, (_, label, equipped)) in entries.iter().enumerate() {
        let tag = if *equipped { " (Currently equipped)" } else { "" };
        narrator.say(format!("{}. {label}{tag}", i + 1));
    }
    narrator.write("Enter your choice (0 to cancel): ");

    let choice = narrator.choose(entries.len())?;
    if choice == 0 {
        return Ok(());
    }
    let index = choice - 1;
    let (name, _, equipped) = &entries[index];

    if *equipped {
        narrator.write(&format!(
            "The {name} is already equipped. Would you like to unequip it? (1 = Yes, 0 = No): "
        ));
        if narrator.choose(1)? == 1 {
            match slot {
                Slot::Weapon => {
                    player.unequip_weapon();
                }
                Slot::Armor => {
                    player.unequip_armor();
                }
            }
            narrator.say(format!("You unequipped the {name}."));
        } else {
            narrator.say(format!("The {name} stays equipped."));
        }
        return Ok(());
    }

    match slot {
        Slot::Weapon => {
            player.equip_weapon(index)?;
        }
        Slot::Armor => {
            player.equip_armor(index)?;
        }
    }
    tracing::debug!(item = %name, "equipped");
    narrator.say(format!("You equipped the {name}."));
    Ok(())
}

fn potion_menu(
    player: &mut Player,
    narrator: &mut Narrator<'_>,
    mode: InventoryMode,
) -> StoryResult<()> {
    if mode == InventoryMode::Combat {
        narrator.say("\nPotions cannot be used during combat.");
        return Ok(());
    }
    if player.potions().is_empty() {
        narrator.say("\nYou have no potions.");
        return Ok(());
    }

    narrator.say("\nChoose a potion to drink:");
    for (i, potion) in player.potions().iter().enumerate() {
        narrator.say(format!("{}. {potion}", i + 1));
    }
    narrator.write("Enter your choice (0 to cancel): ");

    let choice = narrator.choose(player.potions().len())?;
    if choice == 0 {
        return Ok(());
    }
    match player.use_potion(choice - 1) {
        Ok(recovery) => narrator.say(recovery.to_string()),
        Err(e) => narrator.say(e.to_string()),
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Carried {
    Weapon(usize),
    Armor(usize),
    Potion(usize),
}

fn drop_menu(player: &mut Player, narrator: &mut Narrator<'_>) -> StoryResult<()> {
    if player.is_empty_handed() {
        narrator.say("\nYou have nothing to drop.");
        return Ok(());
    }

    let mut entries: Vec<(Carried, String, String, bool)> = Vec::new();
    for (i, w) in player.weapons().iter().enumerate() {
        entries.push((
            Carried::Weapon(i),
            w.name().to_string(),
            format!("[Weapon] {w}"),
            player.is_weapon_equipped(i),
        ));
    }
    for (i, a) in player.armor().iter().enumerate() {
        entries.push((
            Carried::Armor(i),
            a.name().to_string(),
            format!("[Armor] {a}"),
            player.is_armor_equipped(i),
        ));
    }
    for (i, p) in player.potions().iter().enumerate() {
        entries.push((
            Carried::Potion(i),
            p.name().to_string(),
            format!("[Recovery] {p}"),
            false,
        ));
    }

    narrator.say("\nChoose an item to drop:");
    for (i, (_, _, label, equipped)) in entries.iter().enumerate() {
        let tag = if *equipped { " (Equipped)" } else { "" };
        narrator.say(format!("{}. {label}{tag}", i + 1));
    }
    narrator.write("Enter your choice (0 to cancel): ");

    let choice = narrator.choose(entries.len())?;
    if choice == 0 {
        return Ok(());
    }
    let (item, name, _, equipped) = &entries[choice - 1];

    if *equipped {
        narrator.write(&format!(
            "The {name} is currently equipped. Drop it anyway? (1 = Yes, 0 = No): "
        ));
        if narrator.choose(1)? != 1 {
            narrator.say("Item kept.");
            return Ok(());
        }
    }

    match *item {
        Carried::Weapon(i) => {
            player.drop_weapon(i)?;
        }
        Carried::Armor(i) => {
            player.drop_armor(i)?;
        }
        Carried::Potion(i) => {
            player.drop_potion(i)?;
        }
    }
    tracing::debug!(item = %name, "dropped");
    narrator.say(format!("You dropped the {name}."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerTemplate;
    use crate::console::ScriptedConsole;
    use dw_mechanics::{Armor, Weapon};

    fn run(player: &mut Player, mode: InventoryMode, input: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(input.iter().copied());
        manage_inventory(player, &mut Narrator::new(&mut console), mode).unwrap();
        console
    }

    #[test]
    fn status_marks_equipped_items() {
        let player = PlayerTemplate::default().spawn("Ana");
        let report = status_report(&player);
        assert!(report.contains("HP: 30/30"));
        assert!(report.contains("Attack: 7 (Base: 5 + 2 from Wooden Sword)"));
        assert!(report.contains("Defense: 3 (Base: 2 + 1 from Leather Armor)"));
        assert!(report.contains(" - Wooden Sword (Attack: +2) (Equipped)"));
        assert!(report.contains(" - Healing Potion (Heals: +5 HP)"));
    }

    #[test]
    fn status_without_gear() {
        let player = Player::new("Ana", 30, 5, 2);
        let report = status_report(&player);
        assert!(report.contains("Attack: 5 (Base: 5)"));
        assert!(report.contains(" (none)"));
    }

    #[test]
    fn zero_returns_immediately() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        let console = run(&mut player, InventoryMode::Exploring, &["0"]);
        assert!(console.output().contains("1. Character Status"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn equip_new_weapon() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        player.add_weapon(Weapon::new("Dagger", 3));
        let console = run(&mut player, InventoryMode::Exploring, &["2", "2", "0"]);
        assert!(console.output().contains("1. Wooden Sword (Attack: +2) (Currently equipped)"));
        assert!(console.output().contains("You equipped the Dagger."));
        assert_eq!(player.total_attack(), 8);
    }

    #[test]
    fn unequip_equipped_armor() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        run(&mut player, InventoryMode::Exploring, &["3", "1", "1", "0"]);
        assert!(player.equipped_armor().is_none());
        assert_eq!(player.armor().len(), 1);
    }

    #[test]
    fn declining_unequip_keeps_armor() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        run(&mut player, InventoryMode::Exploring, &["3", "1", "0", "0"]);
        assert_eq!(player.equipped_armor().map(Armor::name), Some("Leather Armor"));
    }

    #[test]
    fn drink_potion_while_exploring() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        player.take_damage(5);
        let console = run(&mut player, InventoryMode::Exploring, &["4", "1", "0"]);
        assert!(console.output().contains("Ana heals 5 HP! HP: 30/30"));
        assert!(player.potions().is_empty());
    }

    #[test]
    fn potions_disabled_in_combat() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        player.take_damage(5);
        let console = run(&mut player, InventoryMode::Combat, &["4", "0"]);
        assert!(console.output().contains("Potions cannot be used during combat."));
        assert_eq!(player.potions().len(), 1);
        assert_eq!(player.health().current(), 28);
    }

    #[test]
    fn dropping_equipped_item_needs_confirmation() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        let console = run(&mut player, InventoryMode::Exploring, &["5", "1", "0", "0"]);
        assert!(console.output().contains("1. [Weapon] Wooden Sword (Attack: +2) (Equipped)"));
        assert!(console.output().contains("3. [Recovery] Healing Potion (Heals: +5 HP)"));
        assert!(console.output().contains("Item kept."));
        assert_eq!(player.weapons().len(), 1);

        run(&mut player, InventoryMode::Exploring, &["5", "1", "1", "0"]);
        assert!(player.weapons().is_empty());
        assert_eq!(player.total_attack(), 5);
    }

    #[test]
    fn drop_potion_from_combined_list() {
        let mut player = PlayerTemplate::default().spawn("Ana");
        let console = run(&mut player, InventoryMode::Exploring, &["5", "3", "0"]);
        assert!(console.output().contains("You dropped the Healing Potion."));
        assert!(player.potions().is_empty());
        assert_eq!(player.weapons().len(), 1);
    }

    #[test]
    fn nothing_to_drop() {
        let mut player = Player::new("Ana", 30, 5, 2);
        let console = run(&mut player, InventoryMode::Exploring, &["5", "0"]);
        assert!(console.output().contains("You have nothing to drop."));
    }
}
