//! Line-oriented console I/O and the numeric input reader.

use std::io::{self, BufRead, Write};

use calc_common::CalcError;
use tracing::debug;

use crate::number::Number;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number. Try again (or type 'q' to cancel).";

/// Outcome of asking the user for a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    Value(Number),
    /// The user typed `q`/`quit`, or input ended.
    Cancelled,
}

/// Parse trimmed text into a normalized number.
pub fn parse_number(text: &str) -> Result<Number, CalcError> {
    text.parse()
}

/// Whether `text` is one of the cancellation words, ignoring case.
pub fn is_cancel(text: &str) -> bool {
    text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit")
}

/// Prompt/response console over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show `prompt` and read one trimmed line. `None` means end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Keep prompting until the user enters a number or cancels.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<NumberInput> {
        loop {
            let Some(text) = self.prompt_line(prompt)? else {
                debug!("input closed while reading a number");
                return Ok(NumberInput::Cancelled);
            };

            if is_cancel(&text) {
                return Ok(NumberInput::Cancelled);
            }

            match parse_number(&text) {
                Ok(value) => return Ok(NumberInput::Value(value)),
                Err(e) => {
                    debug!(error = %e, "rejected numeric input");
                    writeln!(self.output, "{INVALID_NUMBER_MESSAGE}")?;
                }
            }
        }
    }
}
