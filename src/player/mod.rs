//! Collaborator traits the game drives and their implementations.
//!
//! - [`CoordinateSource`]: supplies attack targets, one per request
//! - [`PlacementPlanner`]: decides where each ship of a fleet goes
//!
//! Implementations:
//! - RandomPlayer: seeded random placement and a shuffled target deck
//! - ScriptedPlayer: replays fixed placements and targets
//! - CliPlayer: prompts a human on stdin

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{AttackResult, BoardError};

/// Supplies attack coordinates as flat board indices.
///
/// Indices handed out must lie in `[0, board_size²)`. They may repeat an
/// already attacked cell; the game rejects those and asks again.
pub trait CoordinateSource {
    /// Next target, or `None` if the source has nothing left to offer.
    fn next_target(&mut self, board_size: usize) -> Option<usize>;

    /// The last target was refused and another will be requested.
    fn rejected(&mut self, _index: usize, _err: &BoardError) {}

    /// The last target was resolved with `result`.
    fn accepted(&mut self, _index: usize, _result: AttackResult) {}
}

/// Chooses the cells for each ship during setup.
///
/// A plan must contain exactly `ship_size` in-range indices forming a straight
/// line in one of the four axis directions, none of them occupied.
pub trait PlacementPlanner {
    fn plan_ship(&mut self, ship_size: usize, board: &Board) -> Result<Vec<usize>, BoardError>;

    /// The board refused the last plan; a new one will be requested.
    fn placement_rejected(&mut self, _err: &BoardError) {}
}

pub mod random;
pub use random::RandomPlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
