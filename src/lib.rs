#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
mod position;
pub mod prelude;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use player::{CoordinateSource, PlacementPlanner, RandomPlayer, ScriptedPlayer};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use position::*;
pub use ship::*;
pub use ui::{Presenter, SilentPresenter};
#[cfg(feature = "std")]
pub use ui::TerminalPresenter;
