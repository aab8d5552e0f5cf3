//! Line-oriented console used by questions and exams.
//!
//! The exam flow only ever needs two things from a terminal: read one line,
//! write text. Keeping those behind `BufRead`/`Write` lets tests drive a whole
//! session from an in-memory transcript.

use std::io::{self, BufRead, Write};

use crate::error::ExamError;

/// A blocking, line-based console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without its trailing newline.
    ///
    /// Returns [`ExamError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String, ExamError> {
        self.try_read_line()?.ok_or(ExamError::InputClosed)
    }

    /// Read one line, or `None` at end of input.
    pub fn try_read_line(&mut self) -> Result<Option<String>, ExamError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Write a prompt without a newline and flush it so it shows before the
    /// next read blocks.
    pub fn prompt(&mut self, text: &str) -> Result<(), ExamError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Wait for one final line before exiting. End of input counts as done.
    pub fn wait_for_exit(&mut self) -> Result<(), ExamError> {
        self.output.flush()?;
        self.try_read_line()?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
