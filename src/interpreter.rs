//! Session controller that turns raw input lines into robot actions.
//!
//! The entry point is [`CommandProcessor`]. Build the [`Table`] from a
//! [`SimulatorConfig`], hand the processor a [`Robot`] and an [`OutputSink`],
//! then feed it one line at a time with
//! [`CommandProcessor::process_command`].

use crate::command::{Command, CommandResult};
use crate::error::RobotError;
use crate::output::OutputSink;
use crate::parser::parse_command;
use crate::robot::Robot;
use crate::table::Table;
use tracing::{debug, info, trace};

/// Notice written when a command arrives before the first valid `PLACE`.
pub const IGNORED_UNPLACED: &str =
    "Command ignored: Robot must be placed on the table before executing other commands";

/// Configuration for a simulator session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of columns on the table. Default: 5.
    pub table_width: u32,
    /// Number of rows on the table. Default: 5.
    pub table_height: u32,
    /// Style console output with ANSI colors.
    pub color: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            table_width: Table::DEFAULT_SIZE,
            table_height: Table::DEFAULT_SIZE,
            color: true,
        }
    }
}

impl SimulatorConfig {
    /// Builds the configured table, failing on a zero dimension.
    pub fn table(&self) -> Result<Table, RobotError> {
        Table::new(self.table_width, self.table_height)
    }
}

/// Parses, gates and executes commands for one robot.
///
/// Until a `PLACE` succeeds, every other command is skipped with a warning
/// on the sink and reported as a success, so a batch of out-of-order
/// commands keeps running. Once a `PLACE` succeeds the gate stays open until
/// [`reset`](Self::reset), even if later commands fail.
pub struct CommandProcessor<S> {
    robot: Robot,
    sink: S,
    has_valid_placement: bool,
}

impl<S: OutputSink> CommandProcessor<S> {
    pub fn new(robot: Robot, sink: S) -> Self {
        Self {
            robot,
            sink,
            has_valid_placement: false,
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether a `PLACE` has succeeded since the last reset.
    pub fn has_valid_placement(&self) -> bool {
        self.has_valid_placement
    }

    /// Processes a single raw input line.
    ///
    /// Unrecognized lines come back as a failed result carrying
    /// `Invalid command: <line>`; nothing is written to the sink for them.
    pub fn process_command(&mut self, line: &str) -> CommandResult {
        trace!(line, "input");
        let Some(command) = parse_command(line) else {
            debug!(line = line.trim(), "unrecognized command");
            return CommandResult::failed(RobotError::unrecognized(line).to_string());
        };

        if !self.can_execute(&command) {
            debug!(command = %command, "ignored before placement");
            self.sink.write_warning(IGNORED_UNPLACED);
            return CommandResult::ok();
        }

        let result = command.execute(&mut self.robot);
        debug!(
            command = %command,
            success = result.success,
            error = result.error.as_deref(),
            "executed"
        );

        self.update_placement(&command, &result);
        self.route_output(&command, &result);
        result
    }

    /// Processes `lines` in order, returning one result per line.
    pub fn process_all<I>(&mut self, lines: I) -> Vec<CommandResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.process_command(line.as_ref()))
            .collect()
    }

    /// Closes the placement gate. The robot itself stays where it is.
    pub fn reset(&mut self) {
        if self.has_valid_placement {
            info!("placement gate reset");
        }
        self.has_valid_placement = false;
    }

    fn can_execute(&self, command: &Command) -> bool {
        self.has_valid_placement || matches!(command, Command::Place { .. })
    }

    fn update_placement(&mut self, command: &Command, result: &CommandResult) {
        if self.has_valid_placement || !result.success {
            return;
        }
        if matches!(command, Command::Place { .. }) {
            info!(command = %command, "robot placed, accepting all commands");
            self.has_valid_placement = true;
        }
    }

    fn route_output(&mut self, command: &Command, result: &CommandResult) {
        let Some(output) = result.output.as_deref() else {
            return;
        };
        match command {
            Command::Report => self.sink.write_report(output),
            Command::Place { .. } | Command::Move | Command::Left | Command::Right => {
                self.sink.write(output)
            }
        }
    }
}
