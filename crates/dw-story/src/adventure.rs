//! The traversal driver.
//!
//! An [`Adventure`] owns everything a run mutates: the graph (enemy health
//! and loot pools change during play), the player, the roller and the
//! current scene.

use dw_mechanics::{CombatState, Combatant, Player, Roller, roll_check};

use crate::config::AdventureConfig;
use crate::console::{Console, Narrator};
use crate::encounter::run_encounter;
use crate::error::{StoryError, StoryResult};
use crate::graph::StoryGraph;
use crate::inventory::{InventoryMode, manage_inventory};
use crate::scene::SceneId;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A terminal scene was reached.
    Completed(SceneId),
    /// The player died in combat at this scene.
    Died(SceneId),
}

impl Ending {
    /// The scene where the run ended.
    pub fn scene(self) -> SceneId {
        match self {
            Self::Completed(id) | Self::Died(id) => id,
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed(id) => write!(f, "completed at scene {id}"),
            Self::Died(id) => write!(f, "died at scene {id}"),
        }
    }
}

/// The result of one scene visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to another scene.
    Goto(SceneId),
    /// Remain on the current scene (the player fled).
    Stay,
    /// The run is over.
    End(Ending),
}

/// A run through a story graph.
pub struct Adventure {
    graph: StoryGraph,
    player: Player,
    roller: Box<dyn Roller>,
    config: AdventureConfig,
    current: Option<SceneId>,
}

impl Adventure {
    /// Start a run at the graph's start scene.
    ///
    /// The graph must pass validation. The player is spawned from the
    /// config's template and rolls come from the config's seed.
    pub fn new(
        graph: StoryGraph,
        player_name: impl Into<String>,
        config: AdventureConfig,
    ) -> StoryResult<Self> {
        graph.ensure_valid()?;
        let start = graph.start_scene().ok_or(StoryError::NoStartScene)?;
        let player = config.player.spawn(player_name);
        let roller = Box::new(config.roller());
        tracing::info!(scenes = graph.len(), %start, seed = ?config.seed, "adventure created");
        Ok(Self {
            graph,
            player,
            roller,
            config,
            current: Some(start),
        })
    }

    /// Replace the roller.
    pub fn with_roller(mut self, roller: impl Roller + 'static) -> Self {
        self.roller = Box::new(roller);
        self
    }

    /// Replace the player.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// The story graph, with its current enemy and loot state.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// The player character.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The scene the next step will process, or `None` once the run ended.
    pub fn current_scene(&self) -> Option<SceneId> {
        self.current
    }

    /// Display and process the current scene, then move on.
    pub fn process_scene(&mut self, console: &mut dyn Console) -> StoryResult<Step> {
        let mut narrator = self.narrator(console);
        self.step(&mut narrator)
    }

    /// Play until a terminal scene or the player's death.
    pub fn run(&mut self, console: &mut dyn Console) -> StoryResult<Ending> {
        let mut narrator = self.narrator(console);
        loop {
            if let Step::End(ending) = self.step(&mut narrator)? {
                if let Ending::Died(_) = ending {
                    narrator.say("\nYour life and your mission end here.");
                }
                tracing::info!(%ending, "adventure over");
                return Ok(ending);
            }
        }
    }

    fn narrator<'c>(&self, console: &'c mut dyn Console) -> Narrator<'c> {
        Narrator::new(console)
            .with_attempts(self.config.input_attempts)
            .with_pacing(self.config.pacing)
    }

    fn step(&mut self, narrator: &mut Narrator<'_>) -> StoryResult<Step> {
        let id = self.current.ok_or(StoryError::NoStartScene)?;
        narrator.write(&self.graph.scene(id)?.display());

        let step = self.visit(id, narrator)?;
        self.current = match step {
            Step::Goto(next) => Some(next),
            Step::Stay => Some(id),
            Step::End(_) => None,
        };
        Ok(step)
    }

    fn visit(&mut self, id: SceneId, narrator: &mut Narrator<'_>) -> StoryResult<Step> {
        let Self {
            graph,
            player,
            roller,
            config,
            ..
        } = self;
        let scene = graph.scene_mut(id)?;
        tracing::info!(scene = %id, "scene entered");

        if !scene.has_live_enemy() {
            announce_loot(&scene.distribute_loot(player), narrator);
        }
        if scene.is_terminal() {
            narrator.say("\nGame over!\n - The End - ");
            return Ok(Step::End(Ending::Completed(id)));
        }

        let selected = loop {
            let inventory = scene.choices().len() + 1;
            narrator.say("\nWhat will you do?");
            for (i, choice) in scene.choices().iter().enumerate() {
                narrator.say(format!("{}. {}", i + 1, choice.description));
            }
            narrator.say(format!("{inventory}. Open inventory"));
            narrator.write(&format!("Enter your choice (1-{inventory}): "));

            match narrator.choose(inventory)? {
                0 => continue,
                n if n == inventory => {
                    manage_inventory(player, narrator, InventoryMode::Exploring)?;
                    narrator.write(&scene.display());
                }
                n => break n,
            }
        };
        let choice = scene.choices()[selected - 1].clone();
        tracing::debug!(scene = %id, choice = selected, next = %choice.next, "choice taken");

        if choice.is_checked() {
            let die = config.rules.check_die;
            narrator.say(format!("\nRolling check ({die})..."));
            narrator.pause();
            let outcome = roll_check(&mut **roller, die, choice.min_roll);
            narrator.say(format!("You rolled: {}", outcome.roll));
            if !outcome.succeeded() {
                narrator.say("You failed in roll check.");
                let fail = choice.fail.ok_or_else(|| {
                    StoryError::InvalidStory(format!(
                        "scene {id}: choice {selected} has a roll check but no fail scene"
                    ))
                })?;
                return Ok(Step::Goto(fail));
            }
            narrator.say("You succeeded in roll check!");
        }

        // Only the first choice engages the scene's enemy.
        let foe = if selected == 1 {
            scene.enemy_mut().filter(|e| e.is_alive())
        } else {
            None
        };
        if let Some(enemy) = foe {
            match run_encounter(player, enemy, &mut **roller, &config.rules, narrator)? {
                CombatState::PlayerDefeat => {
                    narrator.say("\nGAME OVER - You died.");
                    return Ok(Step::End(Ending::Died(id)));
                }
                CombatState::PlayerFled | CombatState::Ongoing => {
                    narrator.say("You fled, but the enemy will remain there upon your return.");
                    return Ok(Step::Stay);
                }
                CombatState::PlayerVictory => {
                    announce_loot(&scene.distribute_loot(player), narrator);
                }
            }
        }

        Ok(Step::Goto(choice.next))
    }
}

fn announce_loot(received: &[String], narrator: &mut Narrator<'_>) {
    if received.is_empty() {
        return;
    }
    narrator.say("\nYou received :");
    for label in received {
        narrator.say(format!("- {label}"));
    }
}
