//! Random walk simulation loop

use std::io::Write;

use tracing::{debug, instrument, trace};

use crate::domain::{DomainError, Point, PointFormat};
use crate::infrastructure::OffsetSource;

use super::error::{ApplicationError, ApplicationResult};

/// Iteration count used when none is configured.
pub const DEFAULT_ITERATIONS: u64 = 10;

/// Parse an iteration count written as plain decimal digits.
///
/// Signs are rejected, including the leading `+` that `u64::from_str` allows.
pub fn parse_iterations(s: &str) -> Result<u64, DomainError> {
    let invalid = || DomainError::InvalidIterations(s.to_string());
    let digits = s.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

/// Fully resolved run configuration, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub iterations: u64,
    pub format: PointFormat,
    pub seed: Option<u64>,
    pub start: Point,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            format: PointFormat::default(),
            seed: None,
            start: Point::origin(),
            show_help: false,
            show_version: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Stepping { done: u64 },
    Done,
}

/// Iterator over the positions of a walk.
///
/// Yields the start point first, then the position after each step, so a
/// walk of `n` iterations yields `n + 1` points. Each step draws the x offset
/// before the y offset.
#[derive(Debug)]
pub struct Walk<R> {
    position: Point,
    iterations: u64,
    source: R,
    phase: Phase,
}

impl<R: OffsetSource> Walk<R> {
    pub fn new(start: Point, iterations: u64, source: R) -> Self {
        Self {
            position: start,
            iterations,
            source,
            phase: Phase::Init,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    fn step(&mut self) {
        let dx = self.source.next_offset();
        let dy = self.source.next_offset();
        self.position.move_by(dx, dy);
        trace!(dx, dy, x = self.position.x, y = self.position.y, "step");
    }
}

impl<R: OffsetSource> Iterator for Walk<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self.phase {
            Phase::Init => {
                self.phase = if self.iterations == 0 {
                    Phase::Done
                } else {
                    Phase::Stepping { done: 0 }
                };
                Some(self.position)
            }
            Phase::Stepping { done } => {
                self.step();
                let done = done + 1;
                self.phase = if done == self.iterations {
                    Phase::Done
                } else {
                    Phase::Stepping { done }
                };
                Some(self.position)
            }
            Phase::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.phase {
            Phase::Init => self.iterations.checked_add(1),
            Phase::Stepping { done } => Some(self.iterations - done),
            Phase::Done => Some(0),
        };
        match remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Drives a walk and renders every position as one output line.
#[derive(Debug)]
pub struct Simulation<R> {
    walk: Walk<R>,
    format: PointFormat,
}

impl<R: OffsetSource> Simulation<R> {
    pub fn new(config: &SimulationConfig, source: R) -> Self {
        Self {
            walk: Walk::new(config.start, config.iterations, source),
            format: config.format,
        }
    }

    /// Write all renderings to `out` and return the number of lines written.
    ///
    /// Only writer failures can end the run early.
    #[instrument(level = "debug", skip_all, fields(iterations = self.walk.iterations))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> ApplicationResult<u64> {
        let mut lines = 0u64;
        for point in self.walk.by_ref() {
            writeln!(out, "{}", point.render(self.format))
                .map_err(|e| ApplicationError::io("write simulation output", e))?;
            lines += 1;
        }
        out.flush()
            .map_err(|e| ApplicationError::io("flush simulation output", e))?;
        debug!(lines, end = %self.walk.position(), "simulation finished");
        Ok(lines)
    }
}
