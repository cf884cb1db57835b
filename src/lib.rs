//! # table-robot
//!
//! A toy robot simulator. A single robot roams a square table, driven by a
//! line-oriented command language:
//!
//! ```text
//! PLACE X,Y,F   put the robot at (X, Y) facing F (NORTH, SOUTH, EAST or WEST)
//! MOVE          step one cell forward
//! LEFT, RIGHT   turn 90 degrees on the spot
//! REPORT        print X,Y,F
//! ```
//!
//! The robot never leaves the table: placements and moves that would put it
//! off the edge are rejected, and every command other than `PLACE` is ignored
//! until the robot has been placed once.
//!
//! ```
//! use table_robot::{CommandProcessor, OutputChannel, RecordingSink, Robot, Table};
//!
//! let mut processor = CommandProcessor::new(Robot::new(Table::default()), RecordingSink::new());
//! processor.process_all(["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]);
//! assert_eq!(processor.sink().messages(OutputChannel::Report), vec!["3,3,NORTH"]);
//! ```

pub mod app;
pub mod command;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod output;
pub mod parser;
pub mod robot;
pub mod table;

pub use app::*;
pub use command::*;
pub use error::*;
pub use input::*;
pub use interpreter::*;
pub use output::*;
pub use parser::*;
pub use robot::*;
pub use table::*;
