//! Game board: a fixed grid of cells linked to ship parts.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::FireError;
use crate::config::{ALPHABET, CELL_COUNT, HEIGHT, WIDTH};
use crate::geometry::{inside, to_coordinate, to_position, Coordinate, Position};
use crate::ship::{PartRef, Ship};

/// One grid slot. A cell without a part is empty sea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    checked: bool,
    ship_part: Option<PartRef>,
}

impl Cell {
    /// Whether the cell has been fired at.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn ship_part(&self) -> Option<PartRef> {
        self.ship_part
    }

    pub fn is_occupied(&self) -> bool {
        self.ship_part.is_some()
    }

    /// Mark the cell as fired at and return the part it holds, if any.
    ///
    /// The part itself is not touched: a cell cannot reach the ship. Use
    /// [`Ship::hit_part`] with the returned handle, as
    /// [`Player::receive_fire`](crate::Player::receive_fire) does.
    pub fn check(&mut self) -> Option<PartRef> {
        self.checked = true;
        self.ship_part
    }

    pub fn reset(&mut self) {
        self.checked = false;
        self.ship_part = None;
    }

    /// Debug drawing symbol: `X` hit ship, `O` intact ship part, `_` missed
    /// fire, `.` untouched sea.
    ///
    /// Reveals ship locations, so it is not meant for the shooter's view.
    pub fn symbol(&self) -> char {
        match (self.checked, self.ship_part.is_some()) {
            (true, true) => 'X',
            (false, true) => 'O',
            (true, false) => '_',
            (false, false) => '.',
        }
    }
}

/// `WIDTH × HEIGHT` cells in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: vec![Cell::default(); CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `coordinate`, or `None` outside of the board.
    pub fn get_cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        if !inside(coordinate) {
            return None;
        }
        self.cells.get(to_position(coordinate) as usize)
    }

    pub fn get_cell_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell> {
        if !inside(coordinate) {
            return None;
        }
        self.cells.get_mut(to_position(coordinate) as usize)
    }

    /// Link every part of `ship` into the cell at its position.
    ///
    /// No collision check happens here, [`Ship::build`] already did it.
    /// Attaching a ship twice silently overwrites the links.
    pub fn add_ship(&mut self, ship: &Ship) {
        for (part, part_ref) in ship.parts().iter().zip(ship.part_refs()) {
            if let Some(cell) = self.slot_mut(part.position()) {
                cell.ship_part = Some(part_ref);
            }
        }
    }

    pub fn add_ships<'a, I>(&mut self, ships: I)
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        for ship in ships {
            self.add_ship(ship);
        }
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Fire at `coordinate`, returning the struck part if the cell held one.
    ///
    /// Only the cell is marked. The ship owning the returned part does not
    /// learn about the hit, so [`Ship::sank`] is unaffected until
    /// [`Ship::hit_part`] is called. Shots in a game go through
    /// [`Player::receive_fire`](crate::Player::receive_fire), which does both.
    pub fn fire(&mut self, coordinate: Coordinate) -> Result<Option<PartRef>, FireError> {
        let cell = self
            .get_cell_mut(coordinate)
            .ok_or(FireError::OutsideBoard(coordinate))?;
        if cell.checked {
            return Err(FireError::AlreadyFired(coordinate));
        }
        Ok(cell.check())
    }

    /// Checked cell closest to an intact ship part.
    ///
    /// Distance is squared Euclidean; on a tie the lowest position wins.
    /// `None` when nothing has been fired at or every part is already hit.
    pub fn hint(&self) -> Option<Coordinate> {
        let intact: Vec<Coordinate> = self
            .positions()
            .filter(|(_, cell)| cell.is_occupied() && !cell.checked)
            .map(|(pos, _)| to_coordinate(pos))
            .collect();
        if intact.is_empty() {
            return None;
        }
        self.positions()
            .filter(|(_, cell)| cell.checked)
            .map(|(pos, _)| to_coordinate(pos))
            .min_by_key(|checked| {
                intact
                    .iter()
                    .map(|part| checked.distance_sq(*part))
                    .min()
                    .unwrap_or(i32::MAX)
            })
    }

    fn positions(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i as Position, cell))
    }

    fn slot_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if !inside(position) {
            return None;
        }
        self.cells.get_mut(position as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..WIDTH {
            write!(f, " {}", x)?;
        }
        writeln!(f)?;
        for (y, letter) in ALPHABET.iter().enumerate().take(HEIGHT as usize) {
            write!(f, "{}", letter.to_ascii_uppercase())?;
            for cell in &self.cells[y * WIDTH as usize..(y + 1) * WIDTH as usize] {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.cells.iter().filter(|c| c.is_occupied()).count();
        let checked = self.cells.iter().filter(|c| c.checked).count();
        write!(
            f,
            "Board {{ occupied: {}, checked: {} }}",
            occupied, checked
        )
    }
}
