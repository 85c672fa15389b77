//! Interactive fallback for values missing from arguments and config

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, bail};

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `label` and reads one value, asking again on unparsable input.
    /// Fails once the input is exhausted.
    pub fn ask<T>(&mut self, label: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                bail!("input ended before '{}' was answered", label.trim_end());
            }

            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid value ({e}), please try again.")?,
            }
        }
    }

    /// Prints a line without waiting for input
    pub fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Returns `value` if present, otherwise asks for it
    pub fn or_ask<T>(&mut self, value: Option<T>, label: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match value {
            Some(value) => Ok(value),
            None => self.ask(label),
        }
    }
}
