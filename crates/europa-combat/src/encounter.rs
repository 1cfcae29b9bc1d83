//! The encounter state machine.
//!
//! An encounter is `InProgress` until one side reaches zero health. Each
//! round the fighter strikes first; victory is checked before the enemy
//! retaliates. A round limit guarantees termination when neither side can
//! get through the other's defense.

use rand::Rng;
use tracing::debug;

use crate::combatant::{CombatAction, Combatant};
use crate::error::{CombatError, CombatResult};

/// Rounds after which a stalled encounter ends with the fighter falling back.
pub const ROUND_LIMIT: u32 = 100;

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    /// Both sides are still standing.
    InProgress,
    /// The enemy was brought to zero health.
    Victory,
    /// The fighter was brought to zero health, or the round limit was hit.
    Defeat,
}

impl EncounterState {
    /// Returns true for `Victory` and `Defeat`.
    pub fn is_over(self) -> bool {
        self != Self::InProgress
    }
}

/// Summary of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// What the fighter did.
    pub action: CombatAction,
    /// Damage the fighter dealt after defense.
    pub dealt: u32,
    /// Damage the enemy dealt after defense, if it got to act.
    pub taken: Option<u32>,
    /// Fighter health after the round.
    pub fighter_health: u32,
    /// Enemy health after the round.
    pub enemy_health: u32,
    /// Encounter state after the round.
    pub state: EncounterState,
}

/// A fight between the player's stand-in and one enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    fighter: Combatant,
    enemy: Combatant,
    round: u32,
    state: EncounterState,
    log: Vec<RoundReport>,
}

impl Encounter {
    /// Start an encounter. An enemy already at zero health is an immediate victory.
    pub fn new(fighter: Combatant, enemy: Combatant) -> Self {
        let state = if enemy.is_alive() {
            EncounterState::InProgress
        } else {
            EncounterState::Victory
        };
        debug!(fighter = fighter.name(), enemy = enemy.name(), "encounter started");
        Self {
            fighter,
            enemy,
            round: 0,
            state,
            log: Vec::new(),
        }
    }

    /// The player's stand-in.
    pub fn fighter(&self) -> &Combatant {
        &self.fighter
    }

    /// The opponent.
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current state.
    pub fn state(&self) -> EncounterState {
        self.state
    }

    /// Returns true once the encounter is decided.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Every resolved round, in order.
    pub fn log(&self) -> &[RoundReport] {
        &self.log
    }

    /// Play one round: fighter strikes, then the enemy retaliates if still standing.
    pub fn play_round<R: Rng + ?Sized>(
        &mut self,
        action: CombatAction,
        rng: &mut R,
    ) -> CombatResult<RoundReport> {
        if self.is_over() {
            return Err(CombatError::EncounterOver);
        }
        self.round += 1;

        let raw = self.fighter.roll_damage(action, rng);
        let dealt = self.enemy.take_hit(raw);

        let taken = if self.enemy.is_alive() {
            let raw = self.enemy.roll_damage(CombatAction::Attack, rng);
            Some(self.fighter.take_hit(raw))
        } else {
            None
        };

        self.state = if !self.enemy.is_alive() {
            EncounterState::Victory
        } else if !self.fighter.is_alive() || self.round >= ROUND_LIMIT {
            EncounterState::Defeat
        } else {
            EncounterState::InProgress
        };

        let report = RoundReport {
            round: self.round,
            action,
            dealt,
            taken,
            fighter_health: self.fighter.health(),
            enemy_health: self.enemy.health(),
            state: self.state,
        };
        debug!(
            round = report.round,
            dealt = report.dealt,
            taken = ?report.taken,
            state = ?report.state,
            "round resolved"
        );
        self.log.push(report.clone());
        Ok(report)
    }

    /// Play rounds until the encounter is decided, asking `choose` for each action.
    pub fn run_to_end<R, F>(&mut self, mut choose: F, rng: &mut R) -> EncounterState
    where
        R: Rng + ?Sized,
        F: FnMut(&Encounter) -> CombatAction,
    {
        while !self.is_over() {
            let action = choose(self);
            if self.play_round(action, rng).is_err() {
                break;
            }
        }
        self.state
    }

    /// End the encounter, handing back the enemy with its remaining health.
    pub fn into_enemy(self) -> Combatant {
        self.enemy
    }
}
