use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::Board,
    common::{FireError, PlacementError, ShotResult},
    geometry::{to_coordinate, Coordinate},
    ship::{Ship, ShipId},
};

/// A contestant: their board, the fleet laid out on it, and counters.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    ships: Vec<Ship>,
    missed_fire_count: u32,
    win_count: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            ships: Vec::new(),
            missed_fire_count: 0,
            win_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Consecutive misses of this player's shots.
    pub fn missed_fire_count(&self) -> u32 {
        self.missed_fire_count
    }

    /// Matches won during the session.
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    /// Id the next ship added to the fleet must carry.
    pub fn next_ship_id(&self) -> ShipId {
        self.ships.len()
    }

    /// Add a built ship to the fleet and link it into the board.
    ///
    /// The ship must carry [`Player::next_ship_id`] and every part must sit
    /// on an empty cell of this player's board. Nothing changes on error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let expected = self.next_ship_id();
        if ship.id() != expected {
            return Err(PlacementError::UnexpectedId {
                expected,
                found: ship.id(),
            });
        }
        if !ship.is_built() {
            return Err(PlacementError::NotBuilt);
        }
        for part in ship.parts() {
            let coordinate = to_coordinate(part.position());
            let cell = self
                .board
                .get_cell(coordinate)
                .ok_or(PlacementError::OutOfBounds(coordinate))?;
            if cell.is_occupied() {
                return Err(PlacementError::Overlap(coordinate));
            }
        }
        self.board.add_ship(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Build a ship on this player's board and add it to the fleet.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        size: usize,
        orientation: f64,
    ) -> Result<(), PlacementError> {
        let mut ship = Ship::new(self.next_ship_id(), origin, size, orientation);
        ship.build(&self.board)?;
        self.add_ship(ship)
    }

    /// Resolve an opponent's shot against this player's board.
    ///
    /// The cell is only marked once the part it links to is known to exist.
    pub fn receive_fire(&mut self, target: Coordinate) -> Result<ShotResult, FireError> {
        let linked = self.board.get_cell(target).and_then(|c| c.ship_part());
        if let Some(part_ref) = linked {
            let known = self
                .ships
                .get(part_ref.ship)
                .is_some_and(|s| part_ref.part < s.parts().len());
            if !known {
                return Err(FireError::UnknownShip(part_ref.ship));
            }
        }
        let Some(part_ref) = self.board.fire(target)? else {
            return Ok(ShotResult::Miss);
        };
        let ship = self
            .ships
            .get_mut(part_ref.ship)
            .ok_or(FireError::UnknownShip(part_ref.ship))?;
        if !ship.hit_part(part_ref.part) {
            return Err(FireError::UnknownShip(part_ref.ship));
        }
        if ship.sank() {
            Ok(ShotResult::Sunk)
        } else {
            Ok(ShotResult::Hit)
        }
    }

    /// `true` when no ship has an intact part left.
    ///
    /// An empty fleet has lost, so setup always lays ships out before the
    /// first shot.
    pub fn loose(&self) -> bool {
        self.ships.iter().all(Ship::sank)
    }

    /// Hint on this player's board for the opponent.
    pub fn hint(&self) -> Option<Coordinate> {
        self.board.hint()
    }

    pub fn add_miss(&mut self) {
        self.missed_fire_count += 1;
    }

    pub fn reset_miss(&mut self) {
        self.missed_fire_count = 0;
    }

    pub fn add_win(&mut self) {
        self.win_count += 1;
    }

    /// Clear board, fleet and miss counter for a rematch. Name and wins stay.
    pub fn reset(&mut self) {
        self.board.reset();
        self.ships.clear();
        self.missed_fire_count = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
