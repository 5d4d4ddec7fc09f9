//! Quadrature decoding
//!
//! Single-edge decode: only transitions on line A are considered, and line B
//! is sampled at that instant to tell the rotation sense apart.
//!
//! ```text
//!          ┌───┐   ┌───┐
//!   A  ────┘   └───┘   └────     falling A with B high → clockwise
//!        ┌───┐   ┌───┐
//!   B  ──┘   └───┘   └──────     falling A with B low  → counter-clockwise
//! ```
//!
//! Only the falling edge of A (A reaching the active, low level) moves the
//! value. Rising edges are still reported as transitions so observers see
//! both halves of the cycle, but one detent produces exactly one step.

use detent_hal::clock::elapsed_ms;
use detent_hal::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Level of line A treated as triggered
pub const ACTIVE_LEVEL: Level = Level::Low;

/// Rotation sense of the knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// No step has been detected yet
    #[default]
    NoRotation,
    /// Clockwise rotation (value increases)
    Clockwise,
    /// Counter-clockwise rotation (value decreases)
    CounterClockwise,
}

impl Direction {
    /// Signed unit of this direction (-1, 0, or +1)
    pub fn sign(self) -> i32 {
        match self {
            Direction::NoRotation => 0,
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Check if this direction is an actual rotation
    pub fn is_rotation(self) -> bool {
        !matches!(self, Direction::NoRotation)
    }
}

/// Edge observed on line A
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high
    Rising,
    /// High to low
    Falling,
}

impl Edge {
    /// Level of line A after this edge
    pub fn level(self) -> Level {
        match self {
            Edge::Rising => Level::High,
            Edge::Falling => Level::Low,
        }
    }
}

/// Line A edge detector and direction classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    last_a: Level,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        // Encoder lines idle high behind their pull-ups
        Self::new(Level::High)
    }
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the current level of line A
    pub const fn new(initial_a: Level) -> Self {
        Self { last_a: initial_a }
    }

    /// Re-seed with a fresh sample of line A, discarding any pending edge
    pub fn reset(&mut self, a: Level) {
        self.last_a = a;
    }

    /// Level of line A recorded by the last sample
    pub fn last_a(&self) -> Level {
        self.last_a
    }

    /// Feed a sample of line A
    ///
    /// Returns the edge if the level differs from the previous sample.
    /// The new level is recorded either way.
    pub fn detect(&mut self, a: Level) -> Option<Edge> {
        let edge = match (self.last_a, a) {
            (Level::High, Level::Low) => Some(Edge::Falling),
            (Level::Low, Level::High) => Some(Edge::Rising),
            _ => None,
        };
        self.last_a = a;
        edge
    }

    /// Classify the rotation for line A's new level and line B's level
    ///
    /// Returns [`Direction::NoRotation`] unless A is at the active level.
    pub fn classify(a: Level, b: Level) -> Direction {
        if a != ACTIVE_LEVEL {
            Direction::NoRotation
        } else if b != a {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

/// Accumulated encoder state
///
/// This is also the snapshot handed to change callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotaryState {
    /// Accumulated value
    pub value: i32,
    /// Value at the start of the most recent transition
    pub last_value: i32,
    /// Direction that produced the current value
    pub direction: Direction,
    /// Amount added or subtracted per step
    pub step: i32,
    /// Clock time of the most recent transition
    pub last_change_ms: u32,
}

impl Default for RotaryState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RotaryState {
    /// Create a zeroed state with the given step
    pub const fn new(step: i32) -> Self {
        Self {
            value: 0,
            last_value: 0,
            direction: Direction::NoRotation,
            step,
            last_change_ms: 0,
        }
    }

    /// Record the start of a transition on line A
    pub fn begin_transition(&mut self, now_ms: u32) {
        self.last_change_ms = now_ms;
        self.last_value = self.value;
    }

    /// Apply a classified rotation
    ///
    /// `NoRotation` leaves both value and direction untouched. The value
    /// wraps on overflow.
    pub fn apply(&mut self, direction: Direction) {
        if direction.is_rotation() {
            self.direction = direction;
            self.value = self
                .value
                .wrapping_add(self.step.wrapping_mul(direction.sign()));
        }
    }

    /// Milliseconds since the most recent transition
    pub fn idle_ms(&self, now_ms: u32) -> u32 {
        elapsed_ms(now_ms, self.last_change_ms)
    }
}
