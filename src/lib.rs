//! # grid-robot
//!
//! Simulates a single robot on a bounded grid. A command string of `L` (turn left),
//! `R` (turn right) and `F` (forward one cell) is folded over a start [`Pose`]; the
//! result is the final pose, or a typed [`NavigationError`] naming the first fault.
//!
//! The core ([`pose`], [`room`], [`validation`], [`navigator`]) is pure and never logs.
//! [`api`] exposes it over HTTP and [`config`] configures that service.

pub mod api;
pub mod config;
pub mod error;
pub mod navigator;
pub mod pose;
pub mod room;
pub mod validation;

pub use error::{NavigationError, Result, ServiceError};
pub use navigator::{Navigator, navigate};
pub use pose::{Command, Orientation, Pose};
pub use room::RoomSize;
pub use validation::{StartPosition, validate};
