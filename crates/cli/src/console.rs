//! Line-oriented console collaborators.
//!
//! Every prompt consumes exactly one input line. Numeric prompts parse the
//! first whitespace-delimited token of their line, so a numeric read never
//! leaves residue behind for the next text prompt.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Fatal console-boundary failures.
///
/// Malformed numeric input and end of input terminate the process; no
/// workflow retries a prompt.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input")]
    Eof,

    #[error("malformed input at prompt {prompt:?}: {input:?}")]
    Parse { prompt: String, input: String },
}

/// Result type used across the console boundary.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Terminal dialog driver over explicit reader/writer collaborators.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a trailing newline and flush, so prompts stay on
    /// the same line as the operator's answer.
    pub fn write(&mut self, text: &str) -> ConsoleResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one line.
    pub fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.write_all(b"\n")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt, then read one full line. The line may be empty.
    pub fn prompt_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.write(prompt)?;
        self.read_line()
    }

    /// Prompt, then parse the first whitespace-delimited token of the line.
    pub fn prompt_parse<T: FromStr>(&mut self, prompt: &str) -> ConsoleResult<T> {
        self.write(prompt)?;
        let line = self.read_line()?;
        let token = line.split_whitespace().next().unwrap_or("");
        token.parse().map_err(|_| ConsoleError::Parse {
            prompt: prompt.to_string(),
            input: line,
        })
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
