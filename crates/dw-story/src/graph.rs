//! The scene arena.
//!
//! Scenes are owned by the graph and referenced by [`SceneId`], so cycles
//! between scenes need no shared ownership.

use std::collections::HashMap;

use crate::error::{StoryError, StoryResult};
use crate::scene::{Scene, SceneId};

/// A story: scenes keyed by id, plus the scene where play begins.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    scenes: HashMap<SceneId, Scene>,
    order: Vec<SceneId>,
    start: Option<SceneId>,
}

impl StoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene and return it for further authoring.
    pub fn create_scene(
        &mut self,
        id: SceneId,
        description: impl Into<String>,
    ) -> StoryResult<&mut Scene> {
        if self.scenes.contains_key(&id) {
            return Err(StoryError::DuplicateScene(id));
        }
        self.order.push(id);
        Ok(self
            .scenes
            .entry(id)
            .or_insert_with(|| Scene::new(id, description)))
    }

    /// Look up a scene.
    pub fn scene(&self, id: SceneId) -> StoryResult<&Scene> {
        self.scenes.get(&id).ok_or(StoryError::UnknownScene(id))
    }

    /// Look up a scene for mutation.
    pub fn scene_mut(&mut self, id: SceneId) -> StoryResult<&mut Scene> {
        self.scenes.get_mut(&id).ok_or(StoryError::UnknownScene(id))
    }

    /// Returns true if a scene with this id exists.
    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    /// Set where play begins. The scene must already exist.
    pub fn set_start_scene(&mut self, id: SceneId) -> StoryResult<()> {
        if !self.contains(id) {
            return Err(StoryError::UnknownScene(id));
        }
        self.start = Some(id);
        Ok(())
    }

    /// Where play begins, if set.
    pub fn start_scene(&self) -> Option<SceneId> {
        self.start
    }

    /// Scenes in creation order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Choice;

    #[test]
    fn create_and_lookup() {
        let mut graph = StoryGraph::new();
        graph
            .create_scene(SceneId(1), "Start")
            .unwrap()
            .add_choice(Choice::new("Onward", SceneId(2)));
        graph.create_scene(SceneId(2), "End").unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.scene(SceneId(1)).unwrap().choices().len(), 1);
        assert!(graph.scene(SceneId(2)).unwrap().is_terminal());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut graph = StoryGraph::new();
        graph.create_scene(SceneId(1), "Start").unwrap();
        let err = graph.create_scene(SceneId(1), "Again").unwrap_err();
        assert!(matches!(err, StoryError::DuplicateScene(SceneId(1))));
        assert_eq!(graph.scene(SceneId(1)).unwrap().description(), "Start");
    }

    #[test]
    fn unknown_lookup_is_error() {
        let mut graph = StoryGraph::new();
        assert!(matches!(
            graph.scene(SceneId(7)),
            Err(StoryError::UnknownScene(SceneId(7)))
        ));
        assert!(graph.scene_mut(SceneId(7)).is_err());
        assert!(graph.set_start_scene(SceneId(7)).is_err());
        assert!(graph.start_scene().is_none());
    }

    #[test]
    fn scenes_iterate_in_creation_order() {
        let mut graph = StoryGraph::new();
        for id in [5, 2, 9] {
            graph.create_scene(SceneId(id), "x").unwrap();
        }
        let ids: Vec<u32> = graph.scenes().map(|s| s.id().0).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
