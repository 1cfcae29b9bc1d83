//! Roster entries for hostiles.

use europa_combat::Combatant;
use europa_core::Describe;

/// A hostile the game can pit the player against.
///
/// The combatant keeps its health between encounters.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Combat stats.
    pub combatant: Combatant,
    /// Category, e.g. "Robot".
    pub kind: String,
    /// Flag set when this enemy is defeated.
    pub defeat_flag: &'static str,
    /// Experience granted on first defeat.
    pub reward: u32,
}

impl Enemy {
    /// Create a roster entry.
    pub fn new(
        combatant: Combatant,
        kind: impl Into<String>,
        defeat_flag: &'static str,
        reward: u32,
    ) -> Self {
        Self {
            combatant,
            kind: kind.into(),
            defeat_flag,
            reward,
        }
    }
}

impl Describe for Enemy {
    fn name(&self) -> &str {
        self.combatant.name()
    }

    fn description(&self) -> &str {
        &self.kind
    }
}
