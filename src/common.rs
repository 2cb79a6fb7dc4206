//! Common types for Broadside: attack results and board/game errors.

use core::fmt;

/// Outcome of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The attacked cell held no ship.
    Miss,
    /// A ship was hit and still floats.
    Hit,
    /// A ship was sunk and the defender still has ships left.
    Sunk,
    /// The defender's last ship was sunk.
    Won,
}

impl AttackResult {
    /// `true` when the attack sank a ship (including the final one).
    pub fn is_sinking(self) -> bool {
        matches!(self, AttackResult::Sunk | AttackResult::Won)
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackResult::Miss => write!(f, "Miss"),
            AttackResult::Hit => write!(f, "Hit"),
            AttackResult::Sunk => write!(f, "Sunk"),
            AttackResult::Won => write!(f, "Won"),
        }
    }
}

/// Errors returned by Ship, Position and Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The cell at `index` was already attacked.
    AlreadyAttacked { index: usize },
    /// A hit was applied to a ship that is already sunk.
    InvalidState,
    /// `index` lies outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// The cell at `index` already holds a ship, or appears twice in one placement.
    PlacementConflict { index: usize },
    /// Number of cells handed to a placement does not match the ship size.
    ShipSizeMismatch { expected: usize, actual: usize },
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Random placement gave up after too many attempts.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::AlreadyAttacked { index } => {
                write!(f, "Position {} has already been attacked", index)
            }
            BoardError::InvalidState => write!(f, "Cannot hit a ship that is already sunk"),
            BoardError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range (board has {} cells)", index, len)
            }
            BoardError::PlacementConflict { index } => {
                write!(f, "Position {} already holds a ship", index)
            }
            BoardError::ShipSizeMismatch { expected, actual } => write!(
                f,
                "Ship of size {} cannot occupy {} positions",
                expected, actual
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the turn engine and the game driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A board operation violated its contract.
    Board(BoardError),
    /// Attacks were issued before both fleets were placed and the game started.
    NotStarted,
    /// The game already has a winner.
    Finished,
    /// Ships can no longer be placed once attacks have begun.
    AlreadyStarted,
    /// The player's fleet is already on the board.
    FleetAlreadyPlaced { owner: alloc::string::String },
    /// A player has not placed the full fleet.
    FleetIncomplete { owner: alloc::string::String },
    /// The coordinate source stopped producing coordinates mid-turn.
    SourceExhausted,
    /// The game configuration is unusable.
    InvalidConfig(&'static str),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::NotStarted => write!(f, "Game has not started yet"),
            GameError::Finished => write!(f, "Game is already finished"),
            GameError::AlreadyStarted => write!(f, "Game has already started"),
            GameError::FleetAlreadyPlaced { owner } => {
                write!(f, "{} has already placed a fleet", owner)
            }
            GameError::FleetIncomplete { owner } => {
                write!(f, "{} has not placed all ships", owner)
            }
            GameError::SourceExhausted => write!(f, "Coordinate source ran out of targets"),
            GameError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}
