//! Error types for the game core.

use thiserror::Error;

/// Errors surfaced by the world and the level manager.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// `rotate` was called while a rotation animation is still in flight.
    #[error("invalid rotation request: the world is already rotating")]
    AlreadyRotating,

    /// Requested level index does not exist.
    #[error("level {index} out of range (have {count})")]
    LevelOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of loaded levels.
        count: usize,
    },

    /// Operation needs a loaded level and none is.
    #[error("no level is loaded")]
    NoActiveWorld,

    /// Level list is empty.
    #[error("no levels loaded")]
    NoLevels,

    /// Level bundle failed to parse or validate.
    #[error("invalid level bundle: {0}")]
    InvalidLevels(String),

    /// Game config failed to parse or validate.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Browser environment is missing something the facade needs.
    #[error("DOM error: {0}")]
    Dom(String),
}
