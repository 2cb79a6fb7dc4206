//! Game board state: a square grid of positions and the ships placed on it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::position::{CellView, Position, Strike};
use crate::ship::{Direction, Ship, ShipId};

/// Attempts made by [`Board::random_placement`] before giving up.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// One player's board. Cells are stored row-major, so index = x + y * size.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    owner: String,
    size: usize,
    cells: Vec<Position>,
    ships: Vec<Ship>,
    ships_remaining: usize,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(owner: impl Into<String>, size: usize) -> Self {
        Board {
            owner: owner.into(),
            size,
            cells: alloc::vec![Position::new(); size * size],
            ships: Vec::new(),
            ships_remaining: 0,
        }
    }

    /// Name of the player this board belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Ships that still have hit points.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Every ship placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub fn position(&self, index: usize) -> Option<&Position> {
        self.cells.get(index)
    }

    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// Flat index of column `x`, row `y`, if it lies on the board.
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(x + y * self.size)
        } else {
            None
        }
    }

    /// Column and row of a flat index.
    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cells.len() {
            Some((index % self.size, index / self.size))
        } else {
            None
        }
    }

    /// Cells a ship of `ship_size` would occupy growing from (`x`, `y`)
    /// towards `direction`. The origin is always the first index.
    pub fn ship_indices(
        &self,
        x: usize,
        y: usize,
        direction: Direction,
        ship_size: usize,
    ) -> Result<Vec<usize>, BoardError> {
        if ship_size == 0 {
            return Err(BoardError::ShipSizeMismatch {
                expected: 0,
                actual: 0,
            });
        }
        let (dx, dy) = direction.delta();
        let mut indices = Vec::with_capacity(ship_size);
        for step in 0..ship_size as isize {
            let cx = x as isize + dx * step;
            let cy = y as isize + dy * step;
            if cx < 0 || cy < 0 {
                return Err(BoardError::ShipOutOfBounds);
            }
            let index = self
                .index_of(cx as usize, cy as usize)
                .ok_or(BoardError::ShipOutOfBounds)?;
            if self.cells[index].has_ship() {
                return Err(BoardError::PlacementConflict { index });
            }
            indices.push(index);
        }
        Ok(indices)
    }

    /// Returns a random non-overlapping placement for a ship of `ship_size`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_size: usize,
    ) -> Result<Vec<usize>, BoardError> {
        if self.size == 0 {
            return Err(BoardError::UnableToPlaceShip);
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let x = rng.random_range(0..self.size);
            let y = rng.random_range(0..self.size);
            match self.ship_indices(x, y, direction, ship_size) {
                Ok(indices) => return Ok(indices),
                Err(BoardError::ShipOutOfBounds) | Err(BoardError::PlacementConflict { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place one ship of `ship_size` on exactly the given cells.
    ///
    /// All checks run before anything is written, so a rejected placement
    /// leaves the board untouched.
    pub fn place_ship(&mut self, indices: &[usize], ship_size: usize) -> Result<ShipId, BoardError> {
        if ship_size == 0 || indices.len() != ship_size {
            return Err(BoardError::ShipSizeMismatch {
                expected: ship_size,
                actual: indices.len(),
            });
        }
        let len = self.cells.len();
        for (i, &index) in indices.iter().enumerate() {
            if index >= len {
                return Err(BoardError::IndexOutOfRange { index, len });
            }
            if self.cells[index].has_ship() || indices[..i].contains(&index) {
                return Err(BoardError::PlacementConflict { index });
            }
        }

        let id = ShipId(self.ships.len());
        for &index in indices {
            self.cells[index].place_ship(id, index)?;
        }
        self.ships.push(Ship::new(ship_size));
        self.ships_remaining += 1;
        log::debug!(
            "{}: placed ship #{} of size {} at {:?}",
            self.owner,
            id.0,
            ship_size,
            indices
        );
        Ok(id)
    }

    /// Attack the cell at `index`, reporting the result.
    ///
    /// Sinking the last remaining ship reports `Won` instead of `Sunk`.
    pub fn attack(&mut self, index: usize) -> Result<AttackResult, BoardError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })?;
        let result = match cell.attack(index)? {
            Strike::Water => AttackResult::Miss,
            Strike::Ship(id) => self
                .ships
                .get_mut(id.0)
                .ok_or(BoardError::InvalidState)?
                .apply_hit()?,
        };

        let result = if result == AttackResult::Sunk {
            self.ships_remaining -= 1;
            if self.ships_remaining == 0 {
                AttackResult::Won
            } else {
                AttackResult::Sunk
            }
        } else {
            result
        };
        log::debug!("{}: attack at {} -> {}", self.owner, index, result);
        Ok(result)
    }

    /// Every cell's view in row-major order, leaving highlights alone.
    pub fn cell_views(&self, show_ships: bool) -> Vec<CellView> {
        self.cells.iter().map(|cell| cell.view(show_ships)).collect()
    }

    /// Render every cell in row-major order.
    ///
    /// Rendering with `show_ships == false` clears the recent-attack highlight
    /// of the cells it reports.
    pub fn render(&mut self, show_ships: bool) -> Vec<CellView> {
        self.cells
            .iter_mut()
            .map(|cell| cell.render(show_ships))
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  owner: {:?},\n  size: {},\n  ships_remaining: {},\n  ships: {:?}\n}}",
            self.owner, self.size, self.ships_remaining, self.ships
        )
    }
}
