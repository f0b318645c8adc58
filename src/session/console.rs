//! Line-based console prompts
//!
//! Every prompt that expects a number retries on bad input; only a closed
//! input stream ends a prompt with an error.

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MoneyParseError};

/// Prompt/response channel over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, line: impl AsRef<str>) -> TrackerResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print text verbatim (multi-line report output)
    pub fn write_block(&mut self, text: &str) -> TrackerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read one line, without the line terminator
    pub fn prompt(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(TrackerError::UnexpectedEof(prompt.trim().to_string()));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Keep asking until the answer is an integer greater than zero
    pub fn prompt_positive_int(&mut self, prompt: &str) -> TrackerResult<u32> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.trim().parse::<i64>() {
                Ok(n) if n <= 0 => self.say("Please enter a positive integer.")?,
                Ok(n) => match u32::try_from(n) {
                    Ok(n) => return Ok(n),
                    Err(_) => self.say("Invalid input! Please enter a positive integer.")?,
                },
                Err(_) => self.say("Invalid input! Please enter a positive integer.")?,
            }
        }
    }

    /// Keep asking until the answer is an amount of zero or more
    pub fn prompt_amount(&mut self, prompt: &str) -> TrackerResult<Money> {
        loop {
            let answer = self.prompt(prompt)?;
            match Money::parse(&answer) {
                Ok(amount) if amount.is_negative() => {
                    self.say("Invalid input! Please enter a number that is zero or greater.")?
                }
                Ok(amount) => return Ok(amount),
                Err(MoneyParseError::TooLarge) => {
                    self.say("Invalid input! That amount is too large.")?
                }
                Err(_) => self.say("Invalid input! Please enter a valid number.")?,
            }
        }
    }
}
