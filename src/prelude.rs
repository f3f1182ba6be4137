//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Console, Coordinate, GameEngine, GameState, Player, ScriptedConsole, Ship,
    ShotResult,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, TerminalConsole};
