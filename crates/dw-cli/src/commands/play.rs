use colored::Colorize;
use dw_mechanics::Combatant;
use dw_story::{Adventure, AdventureConfig, Narrator, StoryError, StoryResult, storyline};

use crate::terminal::StdConsole;

pub fn run(seed: Option<u64>, name: Option<String>, no_pause: bool) -> Result<(), String> {
    let graph = super::load_story()?;

    let mut config = AdventureConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if no_pause {
        config = config.without_pacing();
    }

    let mut console = StdConsole::open();
    let mut narrator = Narrator::new(&mut console);
    narrator.block(&storyline::banner());

    let name = match name {
        Some(name) => name,
        None => match ask_name(&mut narrator) {
            Ok(name) => name,
            Err(StoryError::InputClosed) => {
                input_closed();
                return Ok(());
            }
            Err(e) => return Err(e.to_string()),
        },
    };
    narrator.write("\n");
    narrator.block(&storyline::introduction(&name));

    let mut adventure = Adventure::new(graph, name, config).map_err(|e| e.to_string())?;
    match adventure.run(&mut console) {
        Ok(ending) => {
            let player = adventure.player();
            println!(
                "\n  {} {} {}",
                "Adventure".bold(),
                ending,
                format!("({} HP: {})", player.name(), player.health()).dimmed()
            );
            Ok(())
        }
        Err(StoryError::InputClosed) => {
            input_closed();
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// The first word of the first non-blank line.
fn ask_name(narrator: &mut Narrator<'_>) -> StoryResult<String> {
    narrator.write("\nWhat is your name: ");
    loop {
        let line = narrator.read_line()?;
        if let Some(word) = line.split_whitespace().next() {
            return Ok(word.to_string());
        }
    }
}

fn input_closed() {
    println!("\n  {}", "Input closed. You leave the forest behind.".dimmed());
}
