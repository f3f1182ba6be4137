//! Ship definitions and placement logic.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::PlacementError;
use crate::geometry::{direction, to_position, Coordinate, Position};

/// Index of a ship inside its owner's fleet.
pub type ShipId = usize;

/// Handle from a board cell to one part of one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartRef {
    pub ship: ShipId,
    pub part: usize,
}

/// One grid cell occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    position: Position,
    hit: bool,
    ship: ShipId,
}

impl Part {
    /// Board position of this part.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Ship this part belongs to.
    pub fn ship(&self) -> ShipId {
        self.ship
    }
}

/// A ship anchored at `origin`, extending `size` cells along `orientation`.
#[derive(Clone, PartialEq)]
pub struct Ship {
    id: ShipId,
    origin: Coordinate,
    size: usize,
    orientation: f64,
    parts: Vec<Part>,
}

impl Ship {
    /// Describe a ship. It owns no parts until [`Ship::build`] succeeds.
    pub fn new(id: ShipId, origin: Coordinate, size: usize, orientation: f64) -> Self {
        Self {
            id,
            origin,
            size,
            orientation,
            parts: Vec::new(),
        }
    }

    /// Lay the ship out against `board`.
    ///
    /// Every cell the ship would cover must exist and be empty. On failure
    /// neither the ship nor the board changes. The board is never written
    /// here; attach the built ship with [`Board::add_ship`].
    pub fn build(&mut self, board: &Board) -> Result<(), PlacementError> {
        if self.size == 0 {
            return Err(PlacementError::ZeroSize);
        }
        let step = direction(self.orientation);
        let mut parts = Vec::with_capacity(self.size);
        for i in 0..self.size {
            let coordinate = self.origin.step(step, i as i32);
            let cell = board
                .get_cell(coordinate)
                .ok_or(PlacementError::OutOfBounds(coordinate))?;
            if cell.is_occupied() {
                return Err(PlacementError::Overlap(coordinate));
            }
            parts.push(Part {
                position: to_position(coordinate),
                hit: false,
                ship: self.id,
            });
        }
        log::debug!(
            "ship #{} built at {:?}",
            self.id,
            parts.iter().map(|p| p.position).collect::<Vec<_>>()
        );
        self.parts = parts;
        Ok(())
    }

    /// `true` once every part has been hit. A ship that was never built is
    /// not sunk.
    pub fn sank(&self) -> bool {
        self.is_built() && self.parts.iter().all(|p| p.hit)
    }

    /// Mark part `index` as hit. Returns `false` when there is no such part.
    pub fn hit_part(&mut self, index: usize) -> bool {
        match self.parts.get_mut(index) {
            Some(part) => {
                part.hit = true;
                true
            }
            None => false,
        }
    }

    /// Handles for every part, in build order.
    pub fn part_refs(&self) -> impl Iterator<Item = PartRef> + '_ {
        (0..self.parts.len()).map(move |part| PartRef {
            ship: self.id,
            part,
        })
    }

    pub fn is_built(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Orientation in radians.
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Board positions of the parts, in build order.
    pub fn positions(&self) -> Vec<Position> {
        self.parts.iter().map(|p| p.position).collect()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, origin: ({}, {}), size: {}, orientation: {:.3}, hits: {}/{} }}",
            self.id,
            self.origin.x,
            self.origin.y,
            self.size,
            self.orientation,
            self.parts.iter().filter(|p| p.hit).count(),
            self.parts.len(),
        )
    }
}
