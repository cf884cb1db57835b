//! Commands understood by the robot and their execution contracts.

use crate::robot::{Orientation, Robot};
use crate::table::Position;
use serde::Serialize;
use std::fmt;

/// Error returned when a command that needs a placed robot runs without one.
pub const NOT_PLACED: &str = "Robot is not placed on the table";

/// One parsed line of the command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table (`PLACE X,Y,F`).
    ///
    /// Coordinates are as written, not yet checked against any table.
    Place {
        x: u64,
        y: u64,
        orientation: Orientation,
    },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn 90 degrees counter-clockwise (`LEFT`).
    Left,
    /// Turn 90 degrees clockwise (`RIGHT`).
    Right,
    /// Print the current placement (`REPORT`).
    Report,
}

impl Command {
    /// Whether the command may only run on a robot that is already placed.
    pub fn requires_placement(&self) -> bool {
        !matches!(self, Self::Place { .. })
    }

    /// The message surfaced when the command's effect fails.
    pub fn failure_message(&self) -> String {
        match self {
            Self::Place { x, y, .. } => {
                format!("Cannot place robot at position {x},{y} - position is invalid")
            }
            Self::Move => "Cannot move robot - would fall off the table".to_string(),
            Self::Left => "Cannot rotate robot left".to_string(),
            Self::Right => "Cannot rotate robot right".to_string(),
            Self::Report => "Cannot generate report - robot state is invalid".to_string(),
        }
    }

    /// Runs the command against `robot`.
    pub fn execute(&self, robot: &mut Robot) -> CommandResult {
        execute_with(
            robot,
            |r| match *self {
                Self::Place { x, y, orientation } => {
                    let placed = match (u32::try_from(x), u32::try_from(y)) {
                        (Ok(x), Ok(y)) => r.place(Position::new(x, y), orientation),
                        _ => false,
                    };
                    (placed, None)
                }
                Self::Move => (r.advance(), None),
                Self::Left => (r.turn_left(), None),
                Self::Right => (r.turn_right(), None),
                Self::Report => {
                    let report = r.report();
                    (report.is_some(), report)
                }
            },
            || self.failure_message(),
            self.requires_placement(),
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, orientation } => write!(f, "PLACE {x},{y},{orientation}"),
            Self::Move => f.write_str("MOVE"),
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Report => f.write_str("REPORT"),
        }
    }
}

/// Outcome of running one command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn with_output(output: String) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}

/// Shared execution contract for every command.
///
/// When `requires_placement` is set and the robot is unplaced, the effect is
/// skipped and [`NOT_PLACED`] is returned. Otherwise the effect runs; on
/// failure only the fixed message from `failure` is surfaced, never the
/// underlying reason.
pub fn execute_with(
    robot: &mut Robot,
    effect: impl FnOnce(&mut Robot) -> (bool, Option<String>),
    failure: impl FnOnce() -> String,
    requires_placement: bool,
) -> CommandResult {
    if requires_placement && !robot.is_placed() {
        return CommandResult::failed(NOT_PLACED);
    }

    match effect(robot) {
        (true, Some(output)) => CommandResult::with_output(output),
        (true, None) => CommandResult::ok(),
        (false, _) => CommandResult::failed(failure()),
    }
}
