use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::game::Direction;

/// Result of reading one turn's worth of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A recognized direction token
    Move(Direction),
    /// An unrecognized token; the previous direction stays in effect
    Ignored,
    /// The input stream ended
    Closed,
}

/// Supplies one direction token per turn
///
/// Implementations block until a full line is available; the game has no
/// notion of time beyond that.
pub trait InputSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Line-at-a-time input over any buffered reader
///
/// Each line is parsed as a direction token at this boundary; unparseable
/// lines become `InputEvent::Ignored` rather than errors.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_event(&mut self) -> Result<InputEvent> {
        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .context("failed to read input line")?;

        if bytes == 0 {
            return Ok(InputEvent::Closed);
        }

        Ok(match Direction::parse(&line) {
            Some(direction) => InputEvent::Move(direction),
            None => InputEvent::Ignored,
        })
    }
}

/// Blocking stdin reader that prompts on stdout before each turn
pub struct StdinSource {
    inner: LineSource<io::StdinLock<'static>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            inner: LineSource::new(io::stdin().lock()),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinSource {
    fn next_event(&mut self) -> Result<InputEvent> {
        let mut stdout = io::stdout();
        write!(stdout, "Enter direction (UP, DOWN, LEFT, RIGHT): ")
            .context("failed to write prompt")?;
        stdout.flush().context("failed to flush prompt")?;

        self.inner.next_event()
    }
}
