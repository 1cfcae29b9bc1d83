//! Error types for the core world model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core world model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A player was created with an empty (or whitespace-only) name.
    #[error("player name cannot be empty")]
    EmptyName,

    /// Damage amounts must be non-negative.
    #[error("damage cannot be negative: {0}")]
    NegativeDamage(i32),
}
