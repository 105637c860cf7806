//! Authoring-time checks on a story graph.
//!
//! Broken edges and checks without a fallback are errors; scenes nobody can
//! reach and checks nobody can pass are warnings.

use std::collections::{HashSet, VecDeque};

use crate::error::{StoryError, StoryResult};
use crate::graph::StoryGraph;
use crate::scene::SceneId;

/// Highest face of the check die.
const CHECK_DIE_MAX: u32 = 20;

/// A warning or error found during story validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The scene where the issue was found, if it is tied to one.
    pub scene: Option<SceneId>,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(scene: Option<SceneId>, message: impl Into<String>) -> Self {
        Self {
            scene,
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(scene: SceneId, message: impl Into<String>) -> Self {
        Self {
            scene: Some(scene),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        match self.scene {
            Some(id) => write!(f, "{level}: scene {id}: {}", self.message),
            None => write!(f, "{level}: {}", self.message),
        }
    }
}

impl StoryGraph {
    /// Check every edge and the start scene. Returns all issues found.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match self.start_scene() {
            None => issues.push(ValidationIssue::error(None, "no start scene set")),
            Some(start) if !self.contains(start) => issues.push(ValidationIssue::error(
                None,
                format!("start scene {start} does not exist"),
            )),
            Some(_) => {}
        }

        for scene in self.scenes() {
            for (i, choice) in scene.choices().iter().enumerate() {
                let n = i + 1;
                if !self.contains(choice.next) {
                    issues.push(ValidationIssue::error(
                        Some(scene.id()),
                        format!("choice {n} leads to missing scene {}", choice.next),
                    ));
                }
                if !choice.is_checked() {
                    continue;
                }
                match choice.fail {
                    None => issues.push(ValidationIssue::error(
                        Some(scene.id()),
                        format!("choice {n} has a roll check but no fail scene"),
                    )),
                    Some(fail) if !self.contains(fail) => {
                        issues.push(ValidationIssue::error(
                            Some(scene.id()),
                            format!("choice {n} fails to missing scene {fail}"),
                        ));
                    }
                    Some(_) => {}
                }
                if choice.min_roll > CHECK_DIE_MAX {
                    issues.push(ValidationIssue::warning(
                        scene.id(),
                        format!(
                            "choice {n} needs {} on a D20 and can never succeed",
                            choice.min_roll
                        ),
                    ));
                }
            }
        }

        if let Some(start) = self.start_scene().filter(|s| self.contains(*s)) {
            let reachable = self.reachable_from(start);
            for scene in self.scenes() {
                if !reachable.contains(&scene.id()) {
                    issues.push(ValidationIssue::warning(
                        scene.id(),
                        "unreachable from the start scene",
                    ));
                }
            }
        }

        for issue in &issues {
            tracing::debug!(%issue, "story validation");
        }
        issues
    }

    /// Fail if validation reports any error.
    pub fn ensure_valid(&self) -> StoryResult<()> {
        let issues = self.validate();
        let errors: Vec<String> = issues
            .iter()
            .filter(|i| i.is_error)
            .map(ToString::to_string)
            .collect();
        if errors.is_empty() {
            return Ok(());
        }
        Err(StoryError::InvalidStory(errors.join("; ")))
    }

    fn reachable_from(&self, start: SceneId) -> HashSet<SceneId> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let Ok(scene) = self.scene(id) else {
                continue;
            };
            for target in scene.choices().iter().flat_map(|c| c.targets()) {
                if seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        seen
    }
}
