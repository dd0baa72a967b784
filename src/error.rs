//! Error types for grid-robot.

use thiserror::Error;

/// Every way a single navigation call can fail.
///
/// The first five kinds are input faults raised before any command is applied.
/// [`NavigationError::OutOfBounds`] is the only failure produced mid-simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid room size. Width and depth must be positive numbers.")]
    InvalidRoomSize,

    #[error("Invalid start position. Robot is out of bounds.")]
    StartOutOfBounds,

    #[error("Invalid orientation. Use N, E, S, or W.")]
    InvalidOrientation(String),

    #[error("Invalid commands. Only L, R, and F are allowed.")]
    InvalidCommands,

    #[error("Invalid command '{0}'")]
    InvalidCommand(char),

    /// Carries the coordinates the robot would have moved to, not the last valid ones.
    #[error("Out of bounds at {x} {y}")]
    OutOfBounds { x: i32, y: i32 },
}

impl NavigationError {
    /// True for faults in the caller's input, false for a run that left the room.
    pub fn is_validation(&self) -> bool {
        !matches!(self, NavigationError::OutOfBounds { .. })
    }
}

/// Failures of the service around the navigation core.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

impl From<toml::de::Error> for ServiceError {
    fn from(e: toml::de::Error) -> Self {
        ServiceError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavigationError>;
