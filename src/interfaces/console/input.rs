use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-based console over any `BufRead` source and `Write` sink (e.g. Stdin/Stdout).
///
/// Every read echoes a prompt first and blocks until a full line or end of input.
pub struct Console<R: BufRead, W: Write> {
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

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next line without its line ending.
    ///
    /// Nothing else is trimmed, so free-text fields are stored as typed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::InputClosed);
        }
        Ok(strip_line_ending(&line).to_string())
    }

    /// Prints `prompt` and parses the reply as a decimal amount.
    pub fn read_amount(&mut self, prompt: &str) -> Result<Decimal> {
        let line = self.read_line(prompt)?;
        parse_amount(&line)
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses operator text such as `100`, ` 12.50 ` or `1e3` into an amount.
///
/// Sign is kept; whether the amount is acceptable is up to the operation.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let text = input.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| BankError::MalformedAmount {
            input: input.to_string(),
        })
}
