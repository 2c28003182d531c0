// Blocking line-input abstraction.
//
// The interactive flows never touch stdin directly; they go through this
// trait, so tests can drive a whole session with a scripted sequence of
// lines and assert on what was said back.

use std::collections::VecDeque;
use std::io;

pub trait Console {
    /// Show a prompt and block until one full line of input arrives.
    /// The returned line has its trailing newline removed.
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// Report one line of output to the user.
    fn say(&mut self, message: &str);
}

/// Test console fed from a fixed script of input lines. Every prompt and
/// report is recorded in `transcript`; running out of script lines yields
/// an EOF error, the same way a closed stdin would.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Whether any transcript line contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.transcript.push(message.to_string());
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
