//! Ship definitions, hit tracking and placement directions.

use core::fmt;

use crate::common::{AttackResult, BoardError};

/// Key of a ship inside its board's ship arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Direction a ship grows in from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in prompt order (0: up, 1: down, 2: left, 3: right).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction from its prompt number.
    pub fn from_index(n: usize) -> Option<Self> {
        Self::ALL.get(n).copied()
    }

    /// Column and row step for one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A ship placed on a board, with its remaining hit points.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    size: usize,
    hit_points: usize,
}

impl Ship {
    /// Create an undamaged ship of `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hit_points: size,
        }
    }

    /// Take one hit. Returns `Sunk` when this hit removes the last hit point.
    pub fn apply_hit(&mut self) -> Result<AttackResult, BoardError> {
        if self.hit_points == 0 {
            return Err(BoardError::InvalidState);
        }
        self.hit_points -= 1;
        if self.is_sunk() {
            Ok(AttackResult::Sunk)
        } else {
            Ok(AttackResult::Hit)
        }
    }

    /// Check if the ship is sunk (no hit points left).
    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Ship's length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Remaining hit points.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ size: {}, hp: {} }}", self.size, self.hit_points)
    }
}
