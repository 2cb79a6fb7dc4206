//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, BoardError, CoordinateSource, Game, GameConfig, GameError, GameMode,
    PlacementPlanner, Presenter, RandomPlayer, ScriptedPlayer, Seat, TurnReport,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, TerminalPresenter};
