//! Coordinate and position arithmetic on the fixed-size grid.
//!
//! A [`Coordinate`] is a zero-based `(x, y)` pair, a [`Position`] the
//! row-major index `y * WIDTH + x`. Conversions never clamp: callers test
//! [`inside`] before using a value as a grid index.

use crate::config::{HEIGHT, WIDTH};

/// Row-major cell index.
pub type Position = i32;

/// Zero-based column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate reached after `steps` moves along `direction`.
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        Self {
            x: self.x + direction.dx * steps,
            y: self.y + direction.dy * steps,
        }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: Coordinate) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Unit step on the grid, each component in `-1..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

/// Convert a coordinate to its row-major position.
pub fn to_position(coordinate: Coordinate) -> Position {
    coordinate.y * WIDTH + coordinate.x
}

/// Convert a position back to a coordinate. Uses floored division so that
/// negative positions map to rows above the board.
pub fn to_coordinate(position: Position) -> Coordinate {
    Coordinate {
        x: position.rem_euclid(WIDTH),
        y: position.div_euclid(WIDTH),
    }
}

/// Anything that designates a cell: a coordinate or a raw position.
pub trait Location {
    fn coordinate(&self) -> Coordinate;
}

impl Location for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl Location for Position {
    fn coordinate(&self) -> Coordinate {
        to_coordinate(*self)
    }
}

/// `true` when the location lies on the board.
pub fn inside<L: Location>(location: L) -> bool {
    let c = location.coordinate();
    c.x >= 0 && c.y >= 0 && c.x < WIDTH && c.y < HEIGHT
}

/// Snap an angle in radians to one of the eight compass steps.
///
/// Only multiples of π/4 give a reliable result; orientation input is
/// restricted to the keypad angles in [`crate::parser::ORIENTATION_KEYS`].
pub fn direction(angle: f64) -> Direction {
    Direction {
        dx: snap(libm::cos(angle)),
        dy: snap(libm::sin(angle)),
    }
}

fn snap(value: f64) -> i32 {
    // one decimal place, then keep only the sign
    let rounded = libm::round(value * 10.0) / 10.0;
    if rounded > 0.0 {
        1
    } else if rounded < 0.0 {
        -1
    } else {
        0
    }
}
