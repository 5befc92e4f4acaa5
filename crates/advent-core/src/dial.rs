//! The safe dial behind the secret entrance.
//!
//! The dial shows positions `0..size` and wraps in both directions. The
//! password is derived from how often the dial points at zero, either at
//! the end of a rotation or on any single click.

use std::fmt;

use log::trace;
use serde::Deserialize;

use crate::SolveError;

/// Direction a rotation turns the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward lower numbers.
    Left,
    /// Toward higher numbers.
    Right,
}

/// A single rotation from the instruction sheet, e.g. `L68`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    direction: Direction,
    clicks: u64,
}

impl Rotation {
    pub fn new(direction: Direction, clicks: u64) -> Self {
        Self { direction, clicks }
    }

    pub fn left(clicks: u64) -> Self {
        Self::new(Direction::Left, clicks)
    }

    pub fn right(clicks: u64) -> Self {
        Self::new(Direction::Right, clicks)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.direction {
            Direction::Left => 'L',
            Direction::Right => 'R',
        };
        write!(f, "{letter}{}", self.clicks)
    }
}

/// Shape of the dial: how many positions it has and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DialSpec {
    #[serde(default = "DialSpec::default_size")]
    size: u64,

    #[serde(default = "DialSpec::default_start")]
    start: u64,
}

impl DialSpec {
    pub fn new(size: u64, start: u64) -> Self {
        Self { size, start }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    fn default_size() -> u64 {
        100
    }

    fn default_start() -> u64 {
        50
    }
}

impl Default for DialSpec {
    fn default() -> Self {
        Self::new(Self::default_size(), Self::default_start())
    }
}

/// A dial that remembers how often it met zero.
#[derive(Debug, Clone)]
pub struct Dial {
    size: u64,
    position: u64,
    /// Rotations that finished on zero.
    zero_stops: u64,
    /// Clicks that landed on zero, including those mid-rotation.
    zero_clicks: u64,
}

impl Dial {
    /// Create a dial from its spec.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDial`] when the dial has no positions or
    /// the start position is not on the dial.
    pub fn new(spec: DialSpec) -> Result<Self, SolveError> {
        if spec.size == 0 || spec.start >= spec.size {
            return Err(SolveError::InvalidDial {
                size: spec.size,
                start: spec.start,
            });
        }
        Ok(Self {
            size: spec.size,
            position: spec.start,
            zero_stops: 0,
            zero_clicks: 0,
        })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn zero_stops(&self) -> u64 {
        self.zero_stops
    }

    pub fn zero_clicks(&self) -> u64 {
        self.zero_clicks
    }

    /// Turn the dial, updating both zero counters.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Overflow`] when a zero counter exceeds `u64`.
    pub fn rotate(&mut self, rotation: Rotation) -> Result<(), SolveError> {
        let size = u128::from(self.size);
        let position = u128::from(self.position);
        let clicks = u128::from(rotation.clicks);
        let step = clicks % size;

        let (passes, position) = match rotation.direction {
            Direction::Right => ((position + clicks) / size, (position + step) % size),
            Direction::Left => {
                let passes = if position == 0 {
                    clicks / size
                } else if clicks >= position {
                    (clicks - position) / size + 1
                } else {
                    0
                };
                (passes, (position + size - step) % size)
            }
        };

        // Both stay below `size` or the click count, so they fit in u64.
        self.position = u64::try_from(position).map_err(|_| SolveError::Overflow)?;
        let passes = u64::try_from(passes).map_err(|_| SolveError::Overflow)?;
        self.zero_clicks = self
            .zero_clicks
            .checked_add(passes)
            .ok_or(SolveError::Overflow)?;
        if self.position == 0 {
            self.zero_stops = self.zero_stops.checked_add(1).ok_or(SolveError::Overflow)?;
        }
        trace!(rotation:% = rotation, position = self.position, passes; "Rotated dial");
        Ok(())
    }
}

/// Apply every rotation to a fresh dial and return the final dial.
///
/// # Errors
///
/// Returns [`SolveError::InvalidDial`] for an unusable dial spec and
/// [`SolveError::Overflow`] when a zero counter exceeds `u64`.
pub fn run(spec: DialSpec, rotations: &[Rotation]) -> Result<Dial, SolveError> {
    let mut dial = Dial::new(spec)?;
    for rotation in rotations {
        dial.rotate(*rotation)?;
    }
    Ok(dial)
}
