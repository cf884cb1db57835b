//! Interactive and batch drivers around [`CommandProcessor`].

use crate::command::CommandResult;
use crate::error::RobotError;
use crate::input::{FileInput, LineSource};
use crate::interpreter::{CommandProcessor, SimulatorConfig};
use crate::output::{OutputChannel, OutputSink, RecordingSink};
use crate::robot::Robot;
use serde::Serialize;
use tracing::info;

/// One processed line in a batch transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub command: String,
    #[serde(flatten)]
    pub result: CommandResult,
    /// Notices the line produced, such as a command ignored before placement.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A robot session wired to an output sink.
pub struct Simulator<S> {
    processor: CommandProcessor<S>,
}

impl<S: OutputSink> Simulator<S> {
    /// Builds the table from `config` and puts an unplaced robot on it.
    pub fn new(config: &SimulatorConfig, sink: S) -> Result<Self, RobotError> {
        let table = config.table()?;
        info!(width = table.width(), height = table.height(), "table ready");
        Ok(Self {
            processor: CommandProcessor::new(Robot::new(table), sink),
        })
    }

    pub fn processor(&self) -> &CommandProcessor<S> {
        &self.processor
    }

    pub fn into_sink(self) -> S {
        self.processor.into_sink()
    }

    /// Processes one line, printing `Error: <message>` if it failed.
    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        let result = self.processor.process_command(line);
        if !result.success
            && let Some(error) = &result.error
        {
            self.processor
                .sink_mut()
                .write_error(&format!("Error: {error}"));
        }
        result
    }

    /// Closes the placement gate before an unrelated batch of commands.
    pub fn reset(&mut self) {
        self.processor.reset();
    }

    pub fn print_banner(&mut self) {
        let sink = self.processor.sink_mut();
        sink.write_success("Robot Simulation Started");
        sink.write_info("Available commands: PLACE X,Y,F | MOVE | LEFT | RIGHT | REPORT");
        sink.write_info("Type EXIT or QUIT to exit, or press Ctrl+C");
        sink.write_info(
            "Commands are case-insensitive (e.g., 'place', 'PLACE', 'Place' all work)",
        );
        sink.write_info("Valid directions for F parameter: NORTH, SOUTH, EAST, WEST");
        sink.write_warning(
            "Note: Robot must be placed on the table before other commands can be executed.",
        );
        sink.write("");
    }

    /// Reads lines from `input` until it ends, calling `prompt` before each read.
    pub fn run_interactive(&mut self, input: &mut impl LineSource, mut prompt: impl FnMut()) {
        self.print_banner();
        loop {
            prompt();
            let Some(line) = input.next_line() else {
                break;
            };
            self.handle_line(&line);
        }
        info!("interactive session ended");
    }

    /// Runs every line of `input`, echoing each one before it executes.
    pub fn run_file(&mut self, input: &mut FileInput) {
        let sink = self.processor.sink_mut();
        sink.write_info(&format!("Reading commands from: {}", input.path().display()));
        sink.write("");

        while let Some(line) = input.next_line() {
            self.processor.sink_mut().write_command(&format!("> {line}"));
            self.handle_line(&line);
        }

        let sink = self.processor.sink_mut();
        sink.write("");
        sink.write_success("File processing completed.");
        info!(
            path = %input.path().display(),
            lines = input.total_lines(),
            "file processed"
        );
    }
}

impl Simulator<RecordingSink> {
    /// Runs every line of `input` and returns the per-line results.
    ///
    /// Nothing is echoed. Whatever the processor writes for a line is drained
    /// from the sink after that line; warnings are kept on the entry and the
    /// rest is already carried by the result.
    pub fn run_file_transcript(&mut self, input: &mut FileInput) -> Vec<TranscriptEntry> {
        let mut transcript = Vec::with_capacity(input.total_lines());
        while let Some(line) = input.next_line() {
            let result = self.processor.process_command(&line);
            let warnings = self
                .processor
                .sink_mut()
                .take()
                .into_iter()
                .filter(|(channel, _)| *channel == OutputChannel::Warning)
                .map(|(_, message)| message)
                .collect();
            transcript.push(TranscriptEntry {
                command: line,
                result,
                warnings,
            });
        }
        info!(
            path = %input.path().display(),
            lines = transcript.len(),
            "transcript recorded"
        );
        transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InteractiveInput;
    use std::io::Cursor;

    fn simulator() -> Simulator<RecordingSink> {
        Simulator::new(&SimulatorConfig::default(), RecordingSink::new()).unwrap()
    }

    #[test]
    fn zero_sized_table_is_rejected() {
        let config = SimulatorConfig {
            table_height: 0,
            ..Default::default()
        };
        assert!(Simulator::new(&config, RecordingSink::new()).is_err());
    }

    #[test]
    fn failures_are_printed_as_errors() {
        let mut sim = simulator();
        sim.handle_line("PLACE 7,7,NORTH");
        sim.handle_line("nonsense");
        let sink = sim.into_sink();
        assert_eq!(
            sink.messages(OutputChannel::Error),
            vec![
                "Error: Cannot place robot at position 7,7 - position is invalid",
                "Error: Invalid command: nonsense",
            ]
        );
    }

    #[test]
    fn interactive_session_prompts_per_line() {
        let mut sim = simulator();
        let mut input =
            InteractiveInput::new(Cursor::new("PLACE 0,0,NORTH\nMOVE\nREPORT\nEXIT\n"));
        let mut prompts = 0;
        sim.run_interactive(&mut input, || prompts += 1);

        assert_eq!(prompts, 4);
        let sink = sim.into_sink();
        assert_eq!(sink.messages(OutputChannel::Report), vec!["0,1,NORTH"]);
        assert_eq!(
            sink.messages(OutputChannel::Success),
            vec!["Robot Simulation Started"]
        );
    }

    #[test]
    fn file_run_echoes_commands() {
        let mut sim = simulator();
        let mut input =
            FileInput::from_contents("demo.txt", "PLACE 0,0,NORTH\nLEFT\nREPORT\n");
        sim.run_file(&mut input);

        let sink = sim.into_sink();
        assert_eq!(
            sink.messages(OutputChannel::Command),
            vec!["> PLACE 0,0,NORTH", "> LEFT", "> REPORT"]
        );
        assert_eq!(sink.messages(OutputChannel::Report), vec!["0,0,WEST"]);
        assert_eq!(
            sink.messages(OutputChannel::Info),
            vec!["Reading commands from: demo.txt"]
        );
        assert_eq!(
            sink.messages(OutputChannel::Success),
            vec!["File processing completed."]
        );
    }

    #[test]
    fn transcript_drains_the_sink_per_line() {
        let mut sim = simulator();
        let mut input = FileInput::from_contents(
            "t.txt",
            "REPORT\nLEFT\nPLACE 0,0,NORTH\nREPORT\nMOVE\n",
        );
        let transcript = sim.run_file_transcript(&mut input);

        assert!(sim.processor().sink().is_empty());
        let warned: Vec<usize> = transcript
            .iter()
            .map(|entry| entry.warnings.len())
            .collect();
        assert_eq!(warned, vec![1, 1, 0, 0, 0]);
        assert_eq!(transcript[0].warnings[0], crate::interpreter::IGNORED_UNPLACED);
        assert_eq!(transcript[3].result.output.as_deref(), Some("0,0,NORTH"));
    }

    #[test]
    fn transcript_serializes_without_empty_fields() {
        let mut sim = simulator();
        let mut input =
            FileInput::from_contents("t.txt", "MOVE\nPLACE 1,1,EAST\nREPORT\nJUMP");
        let transcript = sim.run_file_transcript(&mut input);
        let json: Vec<String> = transcript
            .iter()
            .map(|e| serde_json::to_string(e).unwrap())
            .collect();

        assert_eq!(
            json,
            vec![
                r#"{"command":"MOVE","success":true,"warnings":["Command ignored: Robot must be placed on the table before executing other commands"]}"#,
                r#"{"command":"PLACE 1,1,EAST","success":true}"#,
                r#"{"command":"REPORT","success":true,"output":"1,1,EAST"}"#,
                r#"{"command":"JUMP","success":false,"error":"Invalid command: JUMP"}"#,
            ]
        );
    }
}
