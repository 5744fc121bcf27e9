//! Line-oriented terminal I/O.
//!
//! [`Console`] wraps any `BufRead`/`Write` pair so the menu and handlers run the
//! same against a real terminal and against in-memory buffers in tests.

use crate::errors::{Error, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// ANSI: clear the screen and home the cursor.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Prompting and printing for one interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio(clear_screen: bool) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub const fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Clears the screen, if enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SEQUENCE}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prints `message` without a newline and reads one line of input.
    ///
    /// The trailing line break is stripped; other whitespace is kept.
    ///
    /// # Errors
    /// Returns [`Error::InputClosed`] at end of input.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompts until `parse` accepts the answer, printing `retry` after each
    /// validation failure.
    ///
    /// # Errors
    /// Non-validation errors from `parse` and [`Error::InputClosed`] end the loop.
    pub fn prompt_valid<T, F>(&mut self, message: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.prompt(message)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => self.say(retry)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
