//! Error types for the story engine.

use dw_mechanics::MechError;
use thiserror::Error;

use crate::scene::SceneId;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while building or running a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// A scene id was looked up that was never created.
    #[error("scene {0} does not exist")]
    UnknownScene(SceneId),

    /// A scene id was created twice.
    #[error("scene {0} already exists")]
    DuplicateScene(SceneId),

    /// The graph has no start scene.
    #[error("no start scene set")]
    NoStartScene,

    /// The graph failed authoring validation.
    #[error("invalid story: {0}")]
    InvalidStory(String),

    /// The input stream ended while a selection was expected.
    #[error("input closed")]
    InputClosed,

    /// Mechanics engine error.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}
