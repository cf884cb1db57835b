//! Error type shared by the table, robot, parser and input layers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing values or reading command input.
///
/// Geometric rejections (placing off the table, moving over the edge) are not
/// errors; they come back as a failed [`CommandResult`](crate::CommandResult).
#[derive(Debug, Error)]
pub enum RobotError {
    /// A table dimension was zero.
    #[error("Invalid {name}: {value}. Must be a positive integer")]
    InvalidDimension { name: &'static str, value: u32 },

    /// An orientation name outside the four compass directions.
    #[error("Invalid direction: {value}. Valid values are: NORTH, SOUTH, EAST, WEST")]
    InvalidOrientation { value: String },

    /// A signed coordinate that cannot become a [`Position`](crate::Position).
    #[error("Invalid {name}: {value}. Must be a non-negative integer")]
    CoordinateOutOfRange { name: &'static str, value: i64 },

    /// A line that does not match the command grammar.
    #[error("Invalid command: {line}")]
    UnrecognizedCommand { line: String },

    /// A command file could not be read.
    #[error("Failed to read file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RobotError {
    pub fn unrecognized(line: &str) -> Self {
        Self::UnrecognizedCommand {
            line: line.trim().to_string(),
        }
    }

    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }
}
