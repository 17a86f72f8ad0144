//! Line-based console input and output.

use std::io::{self, BufRead, Write};

use crate::error::StoreError;

/// The request/response surface a session runs against.
pub trait Console {
    /// Print text as-is; prompts carry no trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read the next token, or `None` once input is exhausted.
    ///
    /// Each call consumes fresh input; nothing left over from a previous
    /// read is ever returned.
    fn read_token(&mut self) -> io::Result<Option<String>>;
}

/// A [`Console`] over any buffered reader and writer.
///
/// Each read takes one line and returns its first whitespace-delimited
/// token, discarding the rest of the line. Blank lines are skipped. Bytes
/// that are not valid UTF-8 are replaced rather than failing the read.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = String::from_utf8_lossy(&line).split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}

/// Parse a menu selection between 1 and `max` inclusive.
pub fn parse_choice(token: &str, max: usize) -> Result<usize, StoreError> {
    let choice: i64 = token
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidChoice(token.to_string()))?;
    match usize::try_from(choice) {
        Ok(index) if (1..=max).contains(&index) => Ok(index),
        _ => Err(StoreError::OutOfRange { choice, max }),
    }
}
