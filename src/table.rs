use crate::error::RobotError;
use glam::I64Vec2;
use std::fmt;

/// The square surface the robot moves on.
///
/// Cells are addressed from `(0, 0)` at the south-west corner to
/// `(width - 1, height - 1)` at the north-east corner. Both dimensions are
/// guaranteed positive; a table is never resized after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    width: u32,
    height: u32,
}

impl Table {
    /// Side length of the table used when nothing else is configured.
    pub const DEFAULT_SIZE: u32 = 5;

    /// Creates a table, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self, RobotError> {
        if width == 0 {
            return Err(RobotError::InvalidDimension {
                name: "table width",
                value: width,
            });
        }
        if height == 0 {
            return Err(RobotError::InvalidDimension {
                name: "table height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if the raw coordinate lies on the table.
    ///
    /// Takes signed coordinates so that a step west of column 0 (or south of
    /// row 0) can be asked about before any [`Position`] exists for it.
    pub fn contains(&self, coords: I64Vec2) -> bool {
        (0..i64::from(self.width)).contains(&coords.x)
            && (0..i64::from(self.height)).contains(&coords.y)
    }

    /// Returns `true` if `position` lies on the table.
    pub fn contains_position(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

/// A cell on the table.
///
/// Coordinates are unsigned, so a position is never negative; whether it is
/// actually on a given [`Table`] is checked separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The position as a signed vector, for step arithmetic.
    pub fn coords(self) -> I64Vec2 {
        I64Vec2::new(i64::from(self.x), i64::from(self.y))
    }
}

impl TryFrom<I64Vec2> for Position {
    type Error = RobotError;

    fn try_from(coords: I64Vec2) -> Result<Self, Self::Error> {
        let x = u32::try_from(coords.x).map_err(|_| RobotError::CoordinateOutOfRange {
            name: "x coordinate",
            value: coords.x,
        })?;
        let y = u32::try_from(coords.y).map_err(|_| RobotError::CoordinateOutOfRange {
            name: "y coordinate",
            value: coords.y,
        })?;
        Ok(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
