//! Input/output collaborator used by the game engine.
//!
//! - `ScriptedConsole`: in-memory console replaying canned input
//! - `TerminalConsole`: stdin/stdout/stderr (std only)

use alloc::string::String;

/// Line-oriented dialogue with the people at the keyboard.
pub trait Console {
    /// Block until one line of input is available and return it trimmed.
    fn ask(&mut self) -> anyhow::Result<String>;
    fn notify(&mut self, text: &str);
    fn notify_error(&mut self, text: &str);
    /// Push previous output out of sight, e.g. between setup turns.
    fn clear_display(&mut self);
}

pub mod scripted;
#[cfg(feature = "std")]
pub mod terminal;

pub use scripted::{Line, ScriptedConsole};
#[cfg(feature = "std")]
pub use terminal::TerminalConsole;
