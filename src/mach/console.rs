use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Host terminal
///
/// `PRINT`, `INPUT` and trace output all go through here.

pub trait Console {
    fn print(&mut self, s: &str) -> Result<()>;
    /// Writes `prompt` then blocks for one line, without its line ending.
    fn input(&mut self, prompt: &str) -> Result<String>;
}

/// In-memory console. Input is queued up front and output is captured.
#[derive(Debug, Default)]
pub struct Transcript {
    input: VecDeque<String>,
    output: String,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn with_input<I, S>(lines: I) -> Transcript
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transcript {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn push_input<S: Into<String>>(&mut self, line: S) {
        self.input.push_back(line.into());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for Transcript {
    fn print(&mut self, s: &str) -> Result<()> {
        self.output.push_str(s);
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(line) => Ok(line),
            None => Err(error!(InputPastEnd)),
        }
    }
}
