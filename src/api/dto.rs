//! Wire types for the navigation endpoint.
//!
//! The request is first decoded loosely so that every malformed field can be reported
//! in one response, then narrowed into the core's input types.

use crate::pose::{Orientation, Pose};
use crate::room::RoomSize;
use crate::validation::StartPosition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";
pub const ROOM_SIZE_NOT_NUMBERS: &str = "Room size must be an array of two numbers";
pub const ROOM_SIZE_NOT_PAIR: &str = "Room size must contain exactly two elements";
pub const ROOM_SIZE_TOO_SMALL: &str = "Room dimensions must be greater than or equal to 1";
pub const START_NOT_OBJECT: &str = "Start position must be an object";
pub const ORIENTATION_INVALID: &str = "Orientation must be one of N, E, S, W";
pub const COMMANDS_NOT_STRING: &str = "Commands must be a string";
pub const COMMANDS_INVALID: &str = "Commands must only contain L, F, or R";

/// Body of `POST /api/v1/robot/navigate`, before validation.
///
/// Missing fields are `Value::Null`.
#[derive(Clone, Debug, Default)]
pub struct NavigateRequest {
    pub room_size: Value,
    pub start_position: Value,
    pub commands: Value,
}

/// A request whose fields all have the right shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigateInput {
    pub room_size: RoomSize,
    pub start_position: StartPosition,
    pub commands: String,
}

impl NavigateRequest {
    /// Splits a decoded JSON body into its fields. Anything but an object is rejected.
    pub fn from_body(body: Value) -> Result<Self, Vec<String>> {
        let Value::Object(mut fields) = body else {
            return Err(vec![BODY_NOT_OBJECT.to_string()]);
        };
        Ok(Self {
            room_size: fields.remove("roomSize").unwrap_or_default(),
            start_position: fields.remove("startPosition").unwrap_or_default(),
            commands: fields.remove("commands").unwrap_or_default(),
        })
    }

    /// Checks every field and collects all messages, in field order.
    pub fn validate(&self) -> Result<NavigateInput, Vec<String>> {
        let mut errors = Vec::new();

        let room_size = check_room_size(&self.room_size, &mut errors);
        let start_position = check_start_position(&self.start_position, &mut errors);
        let commands = check_commands(&self.commands, &mut errors);

        match (room_size, start_position, commands) {
            (Some(room_size), Some(start_position), Some(commands)) if errors.is_empty() => {
                Ok(NavigateInput {
                    room_size,
                    start_position,
                    commands,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Integral JSON numbers in `i32` range; `5.0` counts as `5`.
fn as_i32(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
        .map(|f| f as i32)
}

fn check_room_size(value: &Value, errors: &mut Vec<String>) -> Option<RoomSize> {
    let dims: Option<Vec<i32>> = value
        .as_array()
        .and_then(|items| items.iter().map(as_i32).collect());
    let Some(dims) = dims else {
        errors.push(ROOM_SIZE_NOT_NUMBERS.to_string());
        return None;
    };

    let before = errors.len();
    if dims.len() != 2 {
        errors.push(ROOM_SIZE_NOT_PAIR.to_string());
    }
    if dims.iter().any(|&d| d < 1) {
        errors.push(ROOM_SIZE_TOO_SMALL.to_string());
    }

    match dims.as_slice() {
        [width, depth] if errors.len() == before => Some(RoomSize::new(*width, *depth)),
        _ => None,
    }
}

fn check_coordinate(value: Option<&Value>, axis: char, errors: &mut Vec<String>) -> Option<i32> {
    match value.and_then(as_i32) {
        Some(n) if n >= 0 => Some(n),
        Some(_) => {
            errors.push(format!("{axis}-coordinate must be greater than or equal to 0"));
            None
        }
        None => {
            errors.push(format!("{axis}-coordinate must be a number"));
            None
        }
    }
}

fn check_start_position(value: &Value, errors: &mut Vec<String>) -> Option<StartPosition> {
    let Some(fields) = value.as_object() else {
        errors.push(START_NOT_OBJECT.to_string());
        return None;
    };

    let x = check_coordinate(fields.get("x"), 'x', errors);
    let y = check_coordinate(fields.get("y"), 'y', errors);
    let orientation = fields
        .get("orientation")
        .and_then(Value::as_str)
        .filter(|s| s.parse::<Orientation>().is_ok());
    if orientation.is_none() {
        errors.push(ORIENTATION_INVALID.to_string());
    }

    Some(StartPosition::new(x?, y?, orientation?))
}

fn check_commands(value: &Value, errors: &mut Vec<String>) -> Option<String> {
    let Some(commands) = value.as_str() else {
        errors.push(COMMANDS_NOT_STRING.to_string());
        return None;
    };
    if !commands.chars().all(|c| matches!(c, 'L' | 'F' | 'R')) {
        errors.push(COMMANDS_INVALID.to_string());
        return None;
    }
    Some(commands.to_string())
}

/// Final pose as sent back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl From<Pose> for PositionDto {
    fn from(pose: Pose) -> Self {
        Self {
            x: pose.x(),
            y: pose.y(),
            orientation: pose.orientation,
        }
    }
}

/// Success body: `{ "report": { "x", "y", "orientation" } }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub report: PositionDto,
}

impl From<Pose> for ReportResponse {
    fn from(pose: Pose) -> Self {
        Self {
            report: pose.into(),
        }
    }
}
