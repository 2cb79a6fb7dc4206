use alloc::vec::Vec;

use crate::common::GameError;
use crate::game::GameMode;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
/// Ship sizes each player places, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Largest accepted board side. Row and column labels are at most two digits.
pub const MAX_BOARD_SIZE: usize = 100;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            mode: GameMode::Classic,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: Vec<usize>, mode: GameMode) -> Self {
        Self {
            board_size,
            fleet,
            mode,
        }
    }

    /// Check that every ship fits on the board and the fleet fits in total.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig("board size must be positive"));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig("board is too large"));
        }
        if self.fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
        }
        if self.fleet.iter().any(|&s| s == 0) {
            return Err(GameError::InvalidConfig("ship sizes must be positive"));
        }
        if self.fleet.iter().any(|&s| s > self.board_size) {
            return Err(GameError::InvalidConfig("ship is longer than the board"));
        }
        let area = self
            .board_size
            .checked_mul(self.board_size)
            .ok_or(GameError::InvalidConfig("board is too large"))?;
        if self.total_ship_cells() > area {
            return Err(GameError::InvalidConfig("fleet does not fit on the board"));
        }
        Ok(())
    }

    /// Number of ship segments in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
