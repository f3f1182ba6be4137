//! Text ⇄ domain conversions for everything a player types.

use alloc::format;
use alloc::string::{String, ToString};
use core::f64::consts::PI;

use crate::common::InputError;
use crate::config::{ALPHABET, HEIGHT};
use crate::geometry::{inside, Coordinate};

/// Numeric keypad keys (5 excluded) and the angle each one points to.
pub const ORIENTATION_KEYS: [(&str, f64); 8] = [
    ("6", 0.0),
    ("9", PI / 4.0),
    ("8", PI / 2.0),
    ("7", 3.0 * PI / 4.0),
    ("4", PI),
    ("1", 5.0 * PI / 4.0),
    ("2", 3.0 * PI / 2.0),
    ("3", 7.0 * PI / 4.0),
];

pub const TRUE_WORDS: [&str; 3] = ["yes", "y", "t"];
pub const FALSE_WORDS: [&str; 3] = ["n", "no", "f"];

/// Reserved words accepted at any prompt in place of regular input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Draw,
    Player,
    Hint,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Quit,
        Command::Restart,
        Command::Draw,
        Command::Player,
        Command::Hint,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Restart => "restart",
            Command::Draw => "draw",
            Command::Player => "player",
            Command::Hint => "hint",
        }
    }

    /// Recognize a reserved word, ignoring case and surrounding blanks.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(input))
    }
}

/// Parse `<row letter><column digit>`, e.g. `"b3"` → `{x: 3, y: 1}`.
///
/// Only the first two characters are read, so `"a10"` is `{x: 1, y: 0}`.
/// The column is not checked against the board width, see [`parse_target`].
pub fn parse_coordinate(input: &str) -> Result<Coordinate, InputError> {
    let malformed = || InputError::MalformedCoordinate(input.to_string());
    let mut chars = input.trim().chars();
    let letter = chars.next().ok_or_else(malformed)?.to_ascii_lowercase();
    let digit = chars.next().ok_or_else(malformed)?;
    let y = ALPHABET
        .iter()
        .take(HEIGHT as usize)
        .position(|&l| l == letter)
        .ok_or_else(malformed)?;
    let x = digit.to_digit(10).ok_or_else(malformed)?;
    Ok(Coordinate::new(x as i32, y as i32))
}

/// [`parse_coordinate`] restricted to cells on the board.
pub fn parse_target(input: &str) -> Result<Coordinate, InputError> {
    let coordinate = parse_coordinate(input)?;
    if !inside(coordinate) {
        return Err(InputError::OutsideBoard(coordinate));
    }
    Ok(coordinate)
}

/// Format a coordinate the way players type it: `{x: 1, y: 1}` → `"B1"`.
pub fn to_display_coordinate(coordinate: Coordinate) -> String {
    let letter = usize::try_from(coordinate.y)
        .ok()
        .and_then(|y| ALPHABET.get(y))
        .map_or('?', |l| l.to_ascii_uppercase());
    format!("{}{}", letter, coordinate.x)
}

/// Angle in radians for a keypad key.
pub fn parse_orientation(key: &str) -> Result<f64, InputError> {
    let key = key.trim();
    ORIENTATION_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, angle)| *angle)
        .ok_or_else(|| InputError::InvalidOrientation(key.to_string()))
}

/// Parse a placement such as `"A0-6"`: origin, a dash, an orientation key.
pub fn parse_placement(input: &str) -> Result<(Coordinate, f64), InputError> {
    let mut fields = input.split('-').map(str::trim);
    let origin = parse_target(fields.next().unwrap_or_default())?;
    let orientation = parse_orientation(fields.next().unwrap_or_default())?;
    Ok((origin, orientation))
}

/// `true` for a yes word, `false` for a no word.
pub fn parse_answer(input: &str) -> Result<bool, InputError> {
    let answer = input.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&answer.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&answer.as_str()) {
        Ok(false)
    } else {
        Err(InputError::UnrecognizedAnswer(input.to_string()))
    }
}
