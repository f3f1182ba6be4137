//! Common types for salvo: shot results and the recoverable error kinds.

use alloc::string::String;

use crate::geometry::Coordinate;

/// Outcome of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot hit empty sea.
    Miss,
    /// Shot hit a ship part, the ship is still afloat.
    Hit,
    /// Shot hit the last intact part of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Invalid text typed by a player. The prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Text is not `<row letter><column digit>`.
    MalformedCoordinate(String),
    /// Coordinate parsed but lies outside the board.
    OutsideBoard(Coordinate),
    /// Orientation is not one of the keypad keys.
    InvalidOrientation(String),
    /// Answer is neither a yes nor a no word.
    UnrecognizedAnswer(String),
    /// Player name is blank.
    EmptyName,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::MalformedCoordinate(text) => {
                write!(f, "Malformed coordinate |{}|", text)
            }
            InputError::OutsideBoard(c) => {
                write!(f, "Coordinate ({}, {}) is outside of the board", c.x, c.y)
            }
            InputError::InvalidOrientation(key) => write!(
                f,
                "Orientation |{}| is not valid, choose one of the keypad keys 1-4, 6-9",
                key
            ),
            InputError::UnrecognizedAnswer(text) => {
                write!(f, "Answer |{}| not understood, use y/yes/t or n/no/f", text)
            }
            InputError::EmptyName => write!(f, "Player name cannot be empty"),
        }
    }
}

/// Ship placement failure. Nothing is written to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A part would land outside of the board.
    OutOfBounds(Coordinate),
    /// A part would land on a cell already holding a ship.
    Overlap(Coordinate),
    /// Ship size is zero.
    ZeroSize,
    /// Ship has no parts yet, see [`Ship::build`](crate::Ship::build).
    NotBuilt,
    /// Ship id is not the next free slot of the fleet.
    UnexpectedId { expected: usize, found: usize },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds(c) => {
                write!(f, "Ship leaves the board at ({}, {})", c.x, c.y)
            }
            PlacementError::Overlap(c) => {
                write!(f, "Ship overlaps another ship at ({}, {})", c.x, c.y)
            }
            PlacementError::ZeroSize => write!(f, "Ship size must be at least 1"),
            PlacementError::NotBuilt => write!(f, "Ship has not been built"),
            PlacementError::UnexpectedId { expected, found } => {
                write!(f, "Ship #{} cannot join the fleet, next id is #{}", found, expected)
            }
        }
    }
}

/// Errors returned when firing at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// Target is outside of the board.
    OutsideBoard(Coordinate),
    /// Target cell was already fired at.
    AlreadyFired(Coordinate),
    /// Cell links to a ship missing from the fleet.
    UnknownShip(usize),
}

impl core::fmt::Display for FireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FireError::OutsideBoard(c) => {
                write!(f, "Coordinate ({}, {}) is outside of the board", c.x, c.y)
            }
            FireError::AlreadyFired(c) => {
                write!(f, "Cell ({}, {}) has already been fired at", c.x, c.y)
            }
            FireError::UnknownShip(id) => write!(f, "Ship #{} is not part of the fleet", id),
        }
    }
}
