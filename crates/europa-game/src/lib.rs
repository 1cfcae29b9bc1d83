//! Game orchestrator for Europa: The Last Frontier.
//!
//! [`Game`] owns every piece of session state and is the only thing that
//! mutates it. Each action returns a list of [`GameEvent`]s for the
//! presentation layer to render; the game itself never performs I/O.

pub mod config;
pub mod enemy;
pub mod error;
pub mod event;
pub mod flags;
pub mod game;
pub mod scenario;
pub mod status;

pub use config::GameConfig;
pub use enemy::Enemy;
pub use error::{GameError, GameResult};
pub use event::GameEvent;
pub use game::Game;
pub use status::StatusReport;
