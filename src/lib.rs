#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod console;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
pub mod parser;
mod player;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use console::{Console, Line, ScriptedConsole};
#[cfg(feature = "std")]
pub use console::TerminalConsole;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, parse_level, LOG_ENV};
pub use parser::{
    parse_answer, parse_coordinate, parse_orientation, parse_placement, parse_target,
    to_display_coordinate, Command,
};
pub use player::*;
pub use ship::*;
