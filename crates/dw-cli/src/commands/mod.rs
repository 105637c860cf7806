pub mod check;
pub mod play;
pub mod scenes;

use dw_story::{StoryGraph, storyline};

/// Build the built-in storyline.
fn load_story() -> Result<StoryGraph, String> {
    storyline::build().map_err(|e| format!("failed to build storyline: {e}"))
}
