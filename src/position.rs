//! A single board cell: the ship it hosts and its attack history.

use crate::common::BoardError;
use crate::ship::ShipId;

/// What a position looks like to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    /// A ship occupies the cell and ships are being revealed.
    pub ship: bool,
    /// The cell has been attacked.
    pub attacked: bool,
    /// The cell was attacked and holds a ship. Hits are visible even when
    /// ships are hidden.
    pub hit: bool,
    /// The attack landed since this cell was last rendered with ships hidden.
    pub recent: bool,
}

/// Outcome of attacking a position, before the ship (if any) takes the hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Water,
    Ship(ShipId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    ship: Option<ShipId>,
    attacked: bool,
    recent: bool,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_attacked(&self) -> bool {
        self.attacked
    }

    pub fn is_recent(&self) -> bool {
        self.recent
    }

    /// Bind a ship to this cell. A cell never changes owner once bound.
    pub(crate) fn place_ship(&mut self, id: ShipId, index: usize) -> Result<(), BoardError> {
        if self.ship.is_some() {
            return Err(BoardError::PlacementConflict { index });
        }
        self.ship = Some(id);
        Ok(())
    }

    /// Mark the cell attacked. `index` is only used for error reporting.
    pub(crate) fn attack(&mut self, index: usize) -> Result<Strike, BoardError> {
        if self.attacked {
            return Err(BoardError::AlreadyAttacked { index });
        }
        self.attacked = true;
        self.recent = true;
        Ok(match self.ship {
            Some(id) => Strike::Ship(id),
            None => Strike::Water,
        })
    }

    /// Describe the cell without touching the recent-attack flag.
    pub fn view(&self, show_ship: bool) -> CellView {
        CellView {
            ship: show_ship && self.has_ship(),
            attacked: self.attacked,
            hit: self.attacked && self.has_ship(),
            recent: self.recent,
        }
    }

    /// Describe the cell for display.
    ///
    /// A recent attack stays highlighted while the cell is rendered with ships
    /// shown (the owner's view) and is cleared by the first render with ships
    /// hidden (the opponent's view).
    pub fn render(&mut self, show_ship: bool) -> CellView {
        let view = self.view(show_ship);
        if self.attacked && self.recent {
            self.recent = show_ship;
        }
        view
    }
}
