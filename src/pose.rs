//! Robot pose and the commands that transform it.

use crate::error::{NavigationError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal heading of the robot.
///
/// There are exactly four headings; turning always lands on another cardinal one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Counter-clockwise neighbour (N -> W -> S -> E -> N).
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Clockwise neighbour (N -> E -> S -> W -> N).
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit step taken by a forward move. North is +Y.
    pub fn heading(self) -> IVec2 {
        match self {
            Orientation::North => IVec2::Y,
            Orientation::East => IVec2::X,
            Orientation::South => IVec2::NEG_Y,
            Orientation::West => IVec2::NEG_X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = NavigationError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'N' => Ok(Orientation::North),
            'E' => Ok(Orientation::East),
            'S' => Ok(Orientation::South),
            'W' => Ok(Orientation::West),
            other => Err(NavigationError::InvalidOrientation(other.to_string())),
        }
    }
}

impl FromStr for Orientation {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Orientation::try_from(c),
            _ => Err(NavigationError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position and heading of the robot.
///
/// A pose is only ever replaced as a whole; commands never leave it half updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pose {
    /// Grid cell the robot occupies.
    pub position: IVec2,

    /// Direction the next forward move will take.
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The pose one cell ahead, heading unchanged.
    pub fn forward(self) -> Self {
        Self {
            position: self.position + self.orientation.heading(),
            ..self
        }
    }

    pub fn turned_left(self) -> Self {
        Self {
            orientation: self.orientation.left(),
            ..self
        }
    }

    pub fn turned_right(self) -> Self {
        Self {
            orientation: self.orientation.right(),
            ..self
        }
    }
}

/// Renders as `x y O`, e.g. `1 3 N`.
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.orientation)
    }
}

/// A single navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn counter-clockwise in place (`L`).
    Left,
    /// Turn clockwise in place (`R`).
    Right,
    /// Move one cell along the current heading (`F`).
    Forward,
}

impl Command {
    /// Parses a whole command string.
    ///
    /// Any character outside `L`, `R`, `F` rejects the entire string with
    /// [`NavigationError::InvalidCommands`]. An empty string is an empty sequence.
    pub fn parse_sequence(commands: &str) -> Result<Vec<Command>> {
        commands
            .chars()
            .map(|c| Command::try_from(c).map_err(|_| NavigationError::InvalidCommands))
            .collect()
    }
}

impl TryFrom<char> for Command {
    type Error = NavigationError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            other => Err(NavigationError::InvalidCommand(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parses_only_single_cardinal_letters() {
        assert_eq!("N".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!("W".parse::<Orientation>(), Ok(Orientation::West));
        assert_eq!(
            "n".parse::<Orientation>(),
            Err(NavigationError::InvalidOrientation("n".into()))
        );
        assert_eq!(
            "NE".parse::<Orientation>(),
            Err(NavigationError::InvalidOrientation("NE".into()))
        );
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn orientation_serializes_as_letter() {
        let json = serde_json::to_string(&Orientation::South).unwrap();
        assert_eq!(json, "\"S\"");
        let back: Orientation = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(back, Orientation::East);
    }

    #[test]
    fn pose_display_matches_report_format() {
        assert_eq!(Pose::new(1, 3, Orientation::North).to_string(), "1 3 N");
        assert_eq!(Pose::new(-1, 0, Orientation::West).to_string(), "-1 0 W");
    }

    #[test]
    fn forward_keeps_heading() {
        let pose = Pose::new(2, 2, Orientation::East).forward();
        assert_eq!(pose, Pose::new(3, 2, Orientation::East));
    }

    #[test]
    fn parse_sequence_rejects_whole_string() {
        assert_eq!(
            Command::parse_sequence("RFFLFF").unwrap(),
            vec![
                Command::Right,
                Command::Forward,
                Command::Forward,
                Command::Left,
                Command::Forward,
                Command::Forward
            ]
        );
        assert_eq!(Command::parse_sequence(""), Ok(Vec::new()));
        assert_eq!(
            Command::parse_sequence("FFX"),
            Err(NavigationError::InvalidCommands)
        );
        assert_eq!(
            Command::parse_sequence("ff"),
            Err(NavigationError::InvalidCommands)
        );
    }

    #[test]
    fn single_token_error_names_the_token() {
        assert_eq!(
            Command::try_from('X'),
            Err(NavigationError::InvalidCommand('X'))
        );
    }
}
