//! Core types for Europa: The Last Frontier.
//!
//! Holds the declarative world model the game orchestrator mutates:
//! bounded stats, items with attachable use effects, inventories,
//! locations with ordered interactions, the persistent player, and quests.

pub mod describe;
pub mod error;
pub mod inventory;
pub mod item;
pub mod location;
pub mod player;
pub mod quest;
pub mod stat;

pub use describe::Describe;
pub use error::{CoreError, CoreResult};
pub use inventory::Inventory;
pub use item::{EffectContext, EffectOutcome, Item, UseEffect};
pub use location::Location;
pub use player::{Player, Progress, Vitals};
pub use quest::{Quest, QuestObjective};
pub use stat::Stat;
