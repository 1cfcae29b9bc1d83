//! Error types for combat resolution.

/// Errors that can occur during an encounter.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CombatError {
    /// A round was requested after the encounter was decided.
    #[error("the encounter is already over")]
    EncounterOver,
}

/// Convenience result type for combat operations.
pub type CombatResult<T> = Result<T, CombatError>;
