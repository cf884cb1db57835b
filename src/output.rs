//! Output boundary: where command results and notices are written.

/// Kind of line being written.
///
/// Sinks are free to style channels differently; the processor only decides
/// which channel a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputChannel {
    /// Normal text (no special styling).
    Plain,
    Error,
    Success,
    Info,
    Warning,
    /// Echo of an input line in file mode.
    Command,
    /// Output of a `REPORT` command.
    Report,
}

impl OutputChannel {
    /// ANSI style prefix for the channel, or `None` for unstyled text.
    fn ansi_style(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Error => Some("\x1B[31m"),
            Self::Success => Some("\x1B[32m"),
            Self::Info => Some("\x1B[36m"),
            Self::Warning => Some("\x1B[33m"),
            Self::Command => Some("\x1B[90m"),
            Self::Report => Some("\x1B[1m\x1B[35m"),
        }
    }
}

/// Destination for everything the simulator prints.
pub trait OutputSink {
    fn emit(&mut self, channel: OutputChannel, message: &str);

    fn write(&mut self, message: &str) {
        self.emit(OutputChannel::Plain, message);
    }

    fn write_error(&mut self, message: &str) {
        self.emit(OutputChannel::Error, message);
    }

    fn write_success(&mut self, message: &str) {
        self.emit(OutputChannel::Success, message);
    }

    fn write_info(&mut self, message: &str) {
        self.emit(OutputChannel::Info, message);
    }

    fn write_warning(&mut self, message: &str) {
        self.emit(OutputChannel::Warning, message);
    }

    fn write_command(&mut self, message: &str) {
        self.emit(OutputChannel::Command, message);
    }

    fn write_report(&mut self, message: &str) {
        self.emit(OutputChannel::Report, message);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, channel: OutputChannel, message: &str) {
        (**self).emit(channel, message);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, channel: OutputChannel, message: &str) {
        (**self).emit(channel, message);
    }
}

/// Terminal sink. Errors go to stderr, everything else to stdout.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleWriter {
    color: bool,
}

impl ConsoleWriter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Applies the channel's style to `message`.
    pub fn styled(&self, channel: OutputChannel, message: &str) -> String {
        match channel.ansi_style() {
            Some(style) if self.color => format!("{style}{message}\x1B[0m"),
            _ => message.to_string(),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputSink for ConsoleWriter {
    fn emit(&mut self, channel: OutputChannel, message: &str) {
        let line = self.styled(channel, message);
        match channel {
            OutputChannel::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// In-memory sink that records every line with its channel.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Vec<(OutputChannel, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(OutputChannel, String)] {
        &self.lines
    }

    /// Messages written to `channel`, in order.
    pub fn messages(&self, channel: OutputChannel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<(OutputChannel, String)> {
        std::mem::take(&mut self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, channel: OutputChannel, message: &str) {
        self.lines.push((channel, message.to_string()));
    }
}
