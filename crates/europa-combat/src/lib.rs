//! Turn-based combat for Europa: The Last Frontier.
//!
//! Combatants are transient stand-ins built at the start of an encounter.
//! Damage rolls draw jitter from an injected random source, so seeding
//! the source makes a fight fully reproducible.

pub mod combatant;
pub mod encounter;
pub mod error;

pub use combatant::{CombatAction, Combatant, CombatantKind, JitterBand};
pub use encounter::{Encounter, EncounterState, ROUND_LIMIT, RoundReport};
pub use error::{CombatError, CombatResult};
