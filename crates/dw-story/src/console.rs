//! Line-oriented console contract.
//!
//! The engine never touches stdin or stdout directly. A [`Console`] supplies
//! raw lines and accepts text; the [`Narrator`] layers the selection prompt,
//! retry budget and pacing on top of it.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{StoryError, StoryResult};

/// Attempts allowed before a selection defaults to 0.
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// A source of input lines and a sink for output text.
pub trait Console {
    /// Read one line of input without its line terminator.
    ///
    /// Returns `None` once the input is closed.
    fn read_line(&mut self) -> Option<String>;

    /// Write text exactly as given.
    fn write(&mut self, text: &str);

    /// Cosmetic delay between narrated steps.
    fn pause(&mut self, duration: Duration) {
        let _ = duration;
    }
}

/// Parse a selection in `[0, max]`.
///
/// Leading whitespace is ignored; anything after the digits is not.
fn parse_selection(line: &str, max: usize) -> Option<usize> {
    let digits = line.trim_start();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&n| n <= max)
}

/// Render lines inside a dash rule sized to the longest line plus two.
pub fn bordered<S: AsRef<str>>(lines: &[S]) -> String {
    let width = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(width + 2);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for line in lines {
        out.push(' ');
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Prompting and pacing on top of a [`Console`].
pub struct Narrator<'c> {
    console: &'c mut dyn Console,
    attempts: u32,
    pacing: Duration,
}

impl<'c> Narrator<'c> {
    /// Wrap a console with the default retry budget and no pacing.
    pub fn new(console: &'c mut dyn Console) -> Self {
        Self {
            console,
            attempts: DEFAULT_ATTEMPTS,
            pacing: Duration::ZERO,
        }
    }

    /// Set the number of invalid entries tolerated per selection.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Set the pause between narrated combat steps.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Write text without a trailing newline.
    pub fn write(&mut self, text: &str) {
        self.console.write(text);
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) {
        self.console.write(line.as_ref());
        self.console.write("\n");
    }

    /// Write a bordered block.
    pub fn block<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.console.write(&bordered(lines));
    }

    /// Pause for the configured pacing, if any.
    pub fn pause(&mut self) {
        if !self.pacing.is_zero() {
            self.console.pause(self.pacing);
        }
    }

    /// Read a free-form line.
    pub fn read_line(&mut self) -> StoryResult<String> {
        self.console.read_line().ok_or(StoryError::InputClosed)
    }

    /// Read a selection in `[0, max]`.
    ///
    /// Blank lines are skipped without costing an attempt. After the retry
    /// budget is spent the selection defaults to 0.
    pub fn choose(&mut self, max: usize) -> StoryResult<usize> {
        let mut failures = 0;
        loop {
            let line = self.read_line()?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(choice) = parse_selection(&line, max) {
                return Ok(choice);
            }

            failures += 1;
            tracing::debug!(input = %line, failures, "rejected selection");
            if failures >= self.attempts {
                self.console
                    .write("\nToo many invalid attempts. Defaulting to 0.\n\n");
                return Ok(0);
            }
            self.console.write("Invalid choice. Please try again: ");
        }
    }
}

/// A console fed from a fixed script, recording everything written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    pauses: usize,
}

impl ScriptedConsole {
    /// Create a console that yields the given lines, then reports closed input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            pauses: 0,
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Number of pauses requested.
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn pause(&mut self, _duration: Duration) {
        self.pauses += 1;
    }
}
