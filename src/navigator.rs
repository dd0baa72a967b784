//! State machine that folds a command sequence over a [`Pose`].
//!
//! The entry point is [`navigate`], which validates raw input and then runs a
//! [`Navigator`] bound to the room. Use [`Navigator`] directly when the start pose
//! and commands are already typed.

use crate::error::{NavigationError, Result};
use crate::pose::{Command, Pose};
use crate::room::RoomSize;
use crate::validation::{self, StartPosition};

/// Runs commands against a fixed room.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    room: RoomSize,
}

impl Navigator {
    pub fn new(room: RoomSize) -> Self {
        Self { room }
    }

    /// Applies one raw command token, without a bounds check.
    ///
    /// Tokens other than `L`, `R`, `F` fail with [`NavigationError::InvalidCommand`].
    pub fn step(&self, pose: Pose, token: char) -> Result<Pose> {
        Ok(self.apply(pose, Command::try_from(token)?))
    }

    /// Applies one parsed command, without a bounds check.
    pub fn apply(&self, pose: Pose, command: Command) -> Pose {
        match command {
            Command::Left => pose.turned_left(),
            Command::Right => pose.turned_right(),
            Command::Forward => pose.forward(),
        }
    }

    /// Runs `commands` from `start` and returns the final pose.
    ///
    /// # Bounds
    ///
    /// Position is re-checked after every forward move. The first move that leaves the
    /// room aborts the run with [`NavigationError::OutOfBounds`] carrying the position
    /// the robot would have reached; later commands are not applied.
    pub fn run(&self, start: Pose, commands: &[Command]) -> Result<Pose> {
        self.fold(start, commands, |_| {})
    }

    /// Like [`run`](Self::run), but returns every pose visited, `start` first.
    pub fn trace(&self, start: Pose, commands: &[Command]) -> Result<Vec<Pose>> {
        let mut poses = Vec::with_capacity(commands.len() + 1);
        poses.push(start);
        self.fold(start, commands, |pose| poses.push(pose))?;
        Ok(poses)
    }

    fn fold(
        &self,
        start: Pose,
        commands: &[Command],
        mut visit: impl FnMut(Pose),
    ) -> Result<Pose> {
        commands.iter().try_fold(start, |pose, &command| {
            let next = self.apply(pose, command);
            if command == Command::Forward && !self.room.contains(next.position) {
                return Err(NavigationError::OutOfBounds {
                    x: next.x(),
                    y: next.y(),
                });
            }
            visit(next);
            Ok(next)
        })
    }
}

/// Validates the raw request and runs it.
///
/// Validation failures are returned before any command is applied. See
/// [`validation::validate`] for the order of checks.
pub fn navigate(room: RoomSize, start: &StartPosition, commands: &str) -> Result<Pose> {
    let (start, commands) = validation::parse(room, start, commands)?;
    Navigator::new(room).run(start, &commands)
}
