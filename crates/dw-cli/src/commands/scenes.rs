use comfy_table::{ContentArrangement, Table};
use dw_mechanics::{Combatant, Enemy};
use dw_story::{Choice, Scene, SceneId};
use serde::Serialize;

#[derive(Serialize)]
struct SceneSummary<'a> {
    id: SceneId,
    description: &'a str,
    choices: &'a [Choice],
    enemy: Option<&'a Enemy>,
    loot: Vec<String>,
    terminal: bool,
}

impl<'a> SceneSummary<'a> {
    fn new(scene: &'a Scene) -> Self {
        Self {
            id: scene.id(),
            description: scene.description(),
            choices: scene.choices(),
            enemy: scene.enemy(),
            loot: loot_labels(scene),
            terminal: scene.is_terminal(),
        }
    }
}

fn loot_labels(scene: &Scene) -> Vec<String> {
    scene
        .weapon_loot()
        .iter()
        .map(ToString::to_string)
        .chain(scene.armor_loot().iter().map(ToString::to_string))
        .chain(scene.potion_loot().iter().map(ToString::to_string))
        .collect()
}

fn describe_choice(choice: &Choice) -> String {
    match choice.fail {
        Some(fail) if choice.is_checked() => {
            format!("{} (D20 >= {}, else {fail})", choice.next, choice.min_roll)
        }
        _ => choice.next.to_string(),
    }
}

fn excerpt(text: &str, max: usize) -> String {
    let first = text.lines().next().unwrap_or_default();
    if first.chars().count() > max {
        let cut: String = first.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

pub fn run(json: bool) -> Result<(), String> {
    let graph = super::load_story()?;
    let summaries: Vec<SceneSummary<'_>> = graph.scenes().map(SceneSummary::new).collect();

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| format!("serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Leads to", "Enemy", "Loot", "Description"]);

    for summary in &summaries {
        let leads_to = if summary.terminal {
            "(end)".to_string()
        } else {
            summary
                .choices
                .iter()
                .map(describe_choice)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let enemy = summary.enemy.map_or_else(
            || "-".to_string(),
            |e| format!("{} ({} HP)", e.name(), e.health().max()),
        );
        let loot = if summary.loot.is_empty() {
            "-".to_string()
        } else {
            summary.loot.join(", ")
        };
        table.add_row(vec![
            summary.id.to_string(),
            leads_to,
            enemy,
            loot,
            excerpt(summary.description, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", summaries.len());

    Ok(())
}
