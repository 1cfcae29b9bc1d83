//! Error types for the game orchestrator.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
///
/// Everything except [`GameError::Core`] from session setup is recoverable:
/// the action is rejected and state is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Core model error.
    #[error(transparent)]
    Core(#[from] europa_core::CoreError),

    /// Combat error.
    #[error(transparent)]
    Combat(#[from] europa_combat::CombatError),

    /// Location index out of range.
    #[error("no such location: {0}")]
    InvalidLocation(usize),

    /// Interaction index out of range.
    #[error("no such interaction: {0}")]
    InvalidInteraction(usize),

    /// Item index out of range.
    #[error("no such item: {0}")]
    InvalidItem(usize),

    /// The action is not allowed during combat.
    #[error("you can't do that while fighting")]
    InCombat,

    /// A combat turn was requested outside combat.
    #[error("you are not in combat")]
    NotInCombat,

    /// The session has ended.
    #[error("the game is over")]
    GameOver,
}
