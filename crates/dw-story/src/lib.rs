//! Story engine for Darkwood.
//!
//! A story is a directed graph of scenes joined by choices, some of them
//! gated by a d20 check. The [`Adventure`] driver walks the graph from its
//! start scene, handing fights to the combat engine in `dw-mechanics` and
//! talking to the player through a [`Console`].

/// The traversal driver and run context.
pub mod adventure;
/// Run configuration.
pub mod config;
/// Line-oriented console contract.
pub mod console;
/// Interactive combat on top of the mechanics state machine.
pub mod encounter;
/// Error types for the story engine.
pub mod error;
/// The scene arena.
pub mod graph;
/// The inventory management menu.
pub mod inventory;
/// Scenes and choices.
pub mod scene;
/// The built-in storyline.
pub mod storyline;
/// Authoring-time checks on a story graph.
pub mod validate;

pub use adventure::{Adventure, Ending, Step};
pub use config::{AdventureConfig, PlayerTemplate};
pub use console::{Console, Narrator, ScriptedConsole, bordered};
pub use error::{StoryError, StoryResult};
pub use graph::StoryGraph;
pub use inventory::InventoryMode;
pub use scene::{Choice, Scene, SceneId};
pub use validate::ValidationIssue;
