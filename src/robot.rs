//! Robot state and the pure operations that drive it.

use crate::error::RobotError;
use crate::table::{Position, Table};
use glam::I64Vec2;
use std::fmt;
use std::str::FromStr;

/// The compass direction the robot faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting from north.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The orientation after a 90 degree turn to the left.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The orientation after a 90 degree turn to the right.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken when moving forward. North is `+y`, east is `+x`.
    pub fn step(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::South => I64Vec2::NEG_Y,
            Self::East => I64Vec2::X,
            Self::West => I64Vec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = RobotError;

    /// Parses a direction name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == upper)
            .ok_or(RobotError::InvalidOrientation { value: upper })
    }
}

/// Computes the raw coordinate one cell ahead, without any bounds check.
pub fn step_ahead(position: Position, orientation: Orientation) -> I64Vec2 {
    position.coords() + orientation.step()
}

/// Where the robot is, if anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Unplaced,
    Placed {
        position: Position,
        orientation: Orientation,
    },
}

/// A robot bound to a single table.
///
/// The mutating operations return `false` and leave the robot untouched when
/// the operation is not possible, either because the robot is not on the
/// table yet or because the result would leave the table.
#[derive(Clone, Debug)]
pub struct Robot {
    table: Table,
    placement: Placement,
}

impl Robot {
    /// Creates an unplaced robot.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            placement: Placement::Unplaced,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.placement, Placement::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.placement {
            Placement::Placed { position, .. } => Some(position),
            Placement::Unplaced => None,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self.placement {
            Placement::Placed { orientation, .. } => Some(orientation),
            Placement::Unplaced => None,
        }
    }

    /// Puts the robot on `position` facing `orientation`.
    ///
    /// Works whether or not the robot is already placed. Returns `false` if
    /// `position` is off the table.
    pub fn place(&mut self, position: Position, orientation: Orientation) -> bool {
        if !self.table.contains_position(position) {
            return false;
        }
        self.placement = Placement::Placed {
            position,
            orientation,
        };
        true
    }

    /// Moves one cell forward. Returns `false` if that would leave the table.
    pub fn advance(&mut self) -> bool {
        let Placement::Placed {
            position,
            orientation,
        } = self.placement
        else {
            return false;
        };

        let target = step_ahead(position, orientation);
        if !self.table.contains(target) {
            return false;
        }
        match Position::try_from(target) {
            Ok(next) => {
                self.placement = Placement::Placed {
                    position: next,
                    orientation,
                };
                true
            }
            Err(_) => false,
        }
    }

    pub fn turn_left(&mut self) -> bool {
        self.rotate(Orientation::left)
    }

    pub fn turn_right(&mut self) -> bool {
        self.rotate(Orientation::right)
    }

    fn rotate(&mut self, turn: impl Fn(Orientation) -> Orientation) -> bool {
        match &mut self.placement {
            Placement::Placed { orientation, .. } => {
                *orientation = turn(*orientation);
                true
            }
            Placement::Unplaced => false,
        }
    }

    /// The `x,y,ORIENTATION` line for the current placement.
    pub fn report(&self) -> Option<String> {
        match self.placement {
            Placement::Placed {
                position,
                orientation,
            } => Some(format!("{position},{orientation}")),
            Placement::Unplaced => None,
        }
    }
}
