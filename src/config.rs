//! Board dimensions and match rules.

/// Number of columns on a board.
pub const WIDTH: i32 = 5;
/// Number of rows on a board.
pub const HEIGHT: i32 = 5;
/// Number of cells on a board.
pub const CELL_COUNT: usize = (WIDTH * HEIGHT) as usize;

/// Row letters, one per row. Must hold at least `HEIGHT` entries.
pub const ALPHABET: [char; HEIGHT as usize] = ['a', 'b', 'c', 'd', 'e'];

/// Sizes of the ships every player lays out during setup, in prompt order.
pub const SHIP_SIZES: [usize; 2] = [4, 3];

pub const NUMBER_OF_PLAYERS: usize = 2;

/// Match wins that end the whole session.
pub const NUMBER_OF_WIN: u32 = 2;

/// Exclusive upper bound of the draw deciding how many times the turn order
/// is swapped before the first shot.
pub const FIRST_PLAYER_DRAW: u32 = 10;

/// Consecutive misses after which the shooter is offered a hint.
pub const HINT_AFTER_MISSES: u32 = 3;
