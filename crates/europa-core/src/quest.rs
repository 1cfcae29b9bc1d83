//! Quests and their objectives.

use serde::Serialize;

/// A single objective with a target and absolute progress.
#[derive(Debug, Clone, Serialize)]
pub struct QuestObjective {
    description: String,
    target: u32,
    progress: u32,
}

impl QuestObjective {
    /// Create an objective with zero progress.
    pub fn new(description: impl Into<String>, target: u32) -> Self {
        Self {
            description: description.into(),
            target,
            progress: 0,
        }
    }

    /// What the objective asks for.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Progress required for completion.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current progress.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Set absolute progress.
    pub fn set_progress(&mut self, value: u32) {
        self.progress = value;
    }

    /// Complete once progress reaches the target.
    pub fn is_completed(&self) -> bool {
        self.progress >= self.target
    }
}

/// A named objective tracker.
#[derive(Debug, Clone, Serialize)]
pub struct Quest {
    name: String,
    description: String,
    objectives: Vec<QuestObjective>,
}

impl Quest {
    /// Create a quest with no objectives.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            objectives: Vec::new(),
        }
    }

    /// Quest name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quest summary.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append an objective with zero progress.
    pub fn add_objective(&mut self, description: impl Into<String>, target: u32) {
        self.objectives.push(QuestObjective::new(description, target));
    }

    /// Builder form of [`Quest::add_objective`].
    pub fn with_objective(mut self, description: impl Into<String>, target: u32) -> Self {
        self.add_objective(description, target);
        self
    }

    /// Set absolute progress on an objective. Returns false if `index` is out of range.
    pub fn update_objective(&mut self, index: usize, value: u32) -> bool {
        match self.objectives.get_mut(index) {
            Some(objective) => {
                objective.set_progress(value);
                true
            }
            None => false,
        }
    }

    /// The objectives, in order.
    pub fn objectives(&self) -> &[QuestObjective] {
        &self.objectives
    }

    /// Complete when there is at least one objective and all are complete.
    pub fn is_completed(&self) -> bool {
        !self.objectives.is_empty() && self.objectives.iter().all(QuestObjective::is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_quest() -> Quest {
        Quest::new("Escape Europa", "Find a way to escape and reveal the truth")
            .with_objective("Access classified data", 1)
            .with_objective("Bypass security", 1)
            .with_objective("Escape via airlock", 1)
    }

    #[test]
    fn new_objective_has_no_progress() {
        let quest = escape_quest();
        assert_eq!(quest.objectives().len(), 3);
        assert!(quest.objectives().iter().all(|o| o.progress() == 0));
        assert!(!quest.is_completed());
    }

    #[test]
    fn progress_is_absolute() {
        let mut objective = QuestObjective::new("Collect samples", 3);
        objective.set_progress(2);
        objective.set_progress(2);
        assert_eq!(objective.progress(), 2);
        assert!(!objective.is_completed());
        objective.set_progress(5);
        assert!(objective.is_completed());
    }

    #[test]
    fn completes_when_all_objectives_complete() {
        let mut quest = escape_quest();
        assert!(quest.update_objective(0, 1));
        assert!(quest.update_objective(1, 1));
        assert!(!quest.is_completed());
        assert!(quest.update_objective(2, 1));
        assert!(quest.is_completed());
    }

    #[test]
    fn completion_is_recomputed() {
        let mut quest = escape_quest();
        for i in 0..3 {
            quest.update_objective(i, 1);
        }
        assert!(quest.is_completed());
        quest.update_objective(1, 0);
        assert!(!quest.is_completed());
    }

    #[test]
    fn out_of_range_update_is_noop() {
        let mut quest = escape_quest();
        assert!(!quest.update_objective(7, 1));
        assert!(quest.objectives().iter().all(|o| o.progress() == 0));
    }

    #[test]
    fn empty_quest_is_not_complete() {
        let quest = Quest::new("Nothing", "No objectives");
        assert!(!quest.is_completed());
    }
}
