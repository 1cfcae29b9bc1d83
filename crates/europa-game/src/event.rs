//! Results of player actions, for the presentation layer to render.

use europa_combat::RoundReport;

/// Something that happened as the result of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Descriptive text from the world.
    Narration(String),
    /// A rejected or empty action that changed nothing.
    Notice(String),
    /// The player arrived somewhere.
    Moved {
        /// Destination name.
        location: String,
    },
    /// An item moved into the inventory.
    ItemPickedUp(String),
    /// A quest flag was newly set.
    FlagSet(String),
    /// Experience was granted.
    ExperienceGained(u32),
    /// The player reached a new level.
    LevelUp(u32),
    /// Energy was spent on an overcharge.
    EnergySpent(i32),
    /// An encounter began.
    CombatStarted {
        /// Enemy name.
        enemy: String,
        /// Enemy health at the start.
        enemy_health: u32,
        /// The player's combat health at the start.
        fighter_health: u32,
    },
    /// One round of combat was resolved.
    CombatRound {
        /// Enemy name.
        enemy: String,
        /// What happened.
        report: RoundReport,
    },
    /// The enemy was defeated.
    CombatVictory {
        /// Enemy name.
        enemy: String,
    },
    /// The player lost the encounter.
    CombatDefeat {
        /// Enemy name.
        enemy: String,
        /// Persistent health lost as a penalty.
        health_lost: i32,
    },
    /// A quest objective became complete.
    ObjectiveCompleted(String),
    /// A whole quest became complete.
    QuestCompleted(String),
    /// The player escaped the station.
    Escaped,
}
