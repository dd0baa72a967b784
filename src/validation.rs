//! Input validation run before any command is applied.
//!
//! Checks run in a fixed order and the first failure wins:
//! room size, start position, orientation, command characters.

use crate::error::{NavigationError, Result};
use crate::pose::{Command, Orientation, Pose};
use crate::room::RoomSize;
use glam::IVec2;

/// Start pose exactly as a caller supplied it.
///
/// The orientation is kept as text until validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartPosition {
    pub x: i32,
    pub y: i32,
    pub orientation: String,
}

impl StartPosition {
    pub fn new(x: i32, y: i32, orientation: impl Into<String>) -> Self {
        Self {
            x,
            y,
            orientation: orientation.into(),
        }
    }
}

impl From<Pose> for StartPosition {
    fn from(pose: Pose) -> Self {
        Self::new(pose.x(), pose.y(), pose.orientation.as_char())
    }
}

/// Rejects a navigation request that cannot be simulated.
pub fn validate(room: RoomSize, start: &StartPosition, commands: &str) -> Result<()> {
    parse(room, start, commands).map(|_| ())
}

/// Validates and returns the typed start pose and command sequence.
///
/// Fails exactly where [`validate`] fails.
pub fn parse(
    room: RoomSize,
    start: &StartPosition,
    commands: &str,
) -> Result<(Pose, Vec<Command>)> {
    if !room.is_valid() {
        return Err(NavigationError::InvalidRoomSize);
    }
    if !room.contains(IVec2::new(start.x, start.y)) {
        return Err(NavigationError::StartOutOfBounds);
    }
    let orientation: Orientation = start.orientation.parse()?;
    let commands = Command::parse_sequence(commands)?;

    Ok((Pose::new(start.x, start.y, orientation), commands))
}
