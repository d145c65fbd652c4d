//! Line-oriented input service for the interactive menu.
//!
//! One [`Prompter`] is created at startup and passed to every menu handler,
//! so all input flows through a single reader. Typed reads re-prompt on
//! malformed input up to [`MAX_ATTEMPTS`] times and then give up, returning
//! `None` so the calling operation aborts cleanly instead of looping or
//! recursing without bound.

use std::io::{self, BufRead, Write};

use jiff::civil::Date;

/// How many times a typed read re-prompts before giving up.
pub const MAX_ATTEMPTS: usize = 3;

pub struct Prompter<R> {
    reader: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Prints the prompt and reads one trimmed line. `None` means the input
    /// stream is exhausted.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }

    /// Reads an integer, re-prompting on malformed input.
    pub fn integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.parse_with(prompt, "Invalid input, expected an integer value.")
    }

    /// Reads a non-negative count, re-prompting on malformed input.
    pub fn count(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        self.parse_with(prompt, "Invalid input, expected a non-negative integer value.")
    }

    /// Reads a calendar date, re-prompting on malformed input.
    pub fn date(&mut self, prompt: &str) -> io::Result<Option<Date>> {
        self.parse_with(prompt, "Invalid input, expected a date in YYYY-MM-DD format.")
    }

    fn parse_with<T: std::str::FromStr>(
        &mut self,
        prompt: &str,
        complaint: &str,
    ) -> io::Result<Option<T>> {
        for _ in 0..MAX_ATTEMPTS {
            let Some(line) = self.line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("{complaint}"),
            }
        }
        println!("!!! Too many invalid attempts, abandoning the operation.");
        Ok(None)
    }
}
