//! Line sources feeding the command processor.

use crate::error::RobotError;
use std::borrow::Cow;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Words that end an interactive session. Matched case-insensitively.
pub const EXIT_TOKENS: [&str; 2] = ["EXIT", "QUIT"];

/// Returns `true` if `line` asks to end the session.
pub fn is_exit_token(line: &str) -> bool {
    let line = line.trim();
    EXIT_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(line))
}

/// A sequence of raw command lines.
pub trait LineSource {
    /// The next line, or `None` once the source is exhausted.
    fn next_line(&mut self) -> Option<String>;
}

/// Commands loaded eagerly from a file.
///
/// Lines are trimmed and blank lines are dropped at load time.
#[derive(Clone, Debug)]
pub struct FileInput {
    path: PathBuf,
    lines: Vec<String>,
    cursor: usize,
}

impl FileInput {
    /// Loads `path`. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD, so such a line becomes an invalid command instead of failing
    /// the whole file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RobotError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| RobotError::read_input(path, e))?;
        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warn!(path = %path.display(), "input is not valid UTF-8, decoding lossily");
        }
        Ok(Self::from_contents(path, &contents))
    }

    /// Builds a source from already loaded text. `path` is only used for display.
    pub fn from_contents(path: impl Into<PathBuf>, contents: &str) -> Self {
        let lines = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        Self {
            path: path.into(),
            lines,
            cursor: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines handed out so far.
    pub fn current_line(&self) -> usize {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.lines.len()
    }

    /// Starts over from the first line.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Drains every line not yet read.
    pub fn remaining(&mut self) -> Vec<String> {
        let rest = self.lines[self.cursor..].to_vec();
        self.cursor = self.lines.len();
        rest
    }
}

impl LineSource for FileInput {
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(line)
    }
}

/// Lines typed by a user, read lazily from any buffered reader.
///
/// Ends at end of input, on a read error, or on an [exit token](EXIT_TOKENS).
/// A line that is not valid UTF-8 is decoded lossily and handed out like any
/// other line.
#[derive(Debug)]
pub struct InteractiveInput<R> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> InteractiveInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    /// Whether the session has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<R: BufRead> LineSource for InteractiveInput<R> {
    fn next_line(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim();
                if is_exit_token(line) {
                    debug!(token = line, "exit requested");
                    self.finished = true;
                    return None;
                }
                Some(line.to_string())
            }
            Err(e) => {
                warn!(error = %e, "failed to read input, ending session");
                self.finished = true;
                None
            }
        }
    }
}
