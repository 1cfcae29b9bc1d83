//! Serializable snapshot of a session, for status screens and final statistics.

use serde::Serialize;

/// Completion of one quest objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectiveStatus {
    /// What the objective asks for.
    pub description: String,
    /// Whether it is done.
    pub completed: bool,
}

/// Completion of one quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestStatus {
    /// Quest name.
    pub name: String,
    /// Quest summary.
    pub description: String,
    /// Objectives in order.
    pub objectives: Vec<ObjectiveStatus>,
    /// Whether every objective is done.
    pub completed: bool,
}

/// Everything the player might want to know about their run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Player name.
    pub name: String,
    /// Current location name.
    pub location: String,
    /// Current health.
    pub health: i32,
    /// Maximum health.
    pub max_health: i32,
    /// Current energy.
    pub energy: i32,
    /// Maximum energy.
    pub max_energy: i32,
    /// Level derived from experience.
    pub level: u32,
    /// Total experience.
    pub experience: u32,
    /// Moves made.
    pub steps: u32,
    /// Items picked up.
    pub items_collected: u32,
    /// Carried item names.
    pub inventory: Vec<String>,
    /// Every quest flag set so far.
    pub flags: Vec<String>,
    /// A hack of the terminal was attempted.
    pub terminal_hacked: bool,
    /// The Security Bot is down.
    pub security_defeated: bool,
    /// The spacesuit is on.
    pub spacesuit_equipped: bool,
    /// The player got out.
    pub escaped: bool,
    /// Distinct locations visited, including the start.
    pub locations_explored: usize,
    /// Number of locations in the station.
    pub locations_total: usize,
    /// Quest progress.
    pub quests: Vec<QuestStatus>,
}

impl StatusReport {
    /// Returns true when every quest is complete.
    pub fn all_quests_completed(&self) -> bool {
        self.quests.iter().all(|q| q.completed)
    }
}
