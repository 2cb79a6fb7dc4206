#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::{
    board::Board,
    common::BoardError,
    ship::Direction,
    ui::format_cells,
};

use super::{CoordinateSource, PlacementPlanner};

/// Source of input lines for the interactive player.
pub trait InputReader {
    /// Next line without its terminator, or `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from the process's standard input.
///
/// Every call takes the stdin lock only for one line, so several players can
/// share the terminal.
pub struct StdinReader;

impl InputReader for StdinReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Canned input, one entry per line.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputReader for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Parse a number in `0..limit`, ignoring surrounding whitespace.
pub fn parse_bounded(input: &str, limit: usize) -> Result<usize, String> {
    let value: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if value >= limit {
        return Err(format!("{} is out of range 0-{}", value, limit.saturating_sub(1)));
    }
    Ok(value)
}

/// What the player answered when asked for a ship's direction.
enum OrientationChoice {
    Grow(Direction),
    PickNewOrigin,
}

/// Human player answering prompts on a terminal.
pub struct CliPlayer<I: InputReader = StdinReader, W: Write = Stdout> {
    input: I,
    out: W,
}

impl CliPlayer<StdinReader, Stdout> {
    pub fn new() -> Self {
        Self::with_io(StdinReader, io::stdout())
    }
}

impl Default for CliPlayer<StdinReader, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InputReader, W: Write> CliPlayer<I, W> {
    pub fn with_io(input: I, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    /// Keep asking until a number in `0..limit` arrives. `None` once input ends.
    fn read_bounded(&mut self, prompt: &str, limit: usize) -> Option<usize> {
        self.say(prompt);
        loop {
            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    log::error!("failed to read input: {}", e);
                    return None;
                }
            };
            match parse_bounded(&line, limit) {
                Ok(value) => return Some(value),
                Err(e) => {
                    log::debug!("rejected input: {}", e);
                    self.say("Incorrect input, please retry: ");
                }
            }
        }
    }

    fn read_coordinates(&mut self, board_size: usize) -> Option<(usize, usize)> {
        let x = self.read_bounded("\nX: ", board_size)?;
        let y = self.read_bounded("Y: ", board_size)?;
        Some((x, y))
    }

    fn read_orientation(&mut self) -> Option<OrientationChoice> {
        self.say(
            "\nWhich way should this ship be placed from the given starting position \
             (0: up, 1: down, 2: left, 3: right)?\
             \nEnter '4' if you want to choose another initial position\
             \nOrientation: ",
        );
        let n = self.read_bounded("", Direction::ALL.len() + 1)?;
        Some(match Direction::from_index(n) {
            Some(direction) => OrientationChoice::Grow(direction),
            None => OrientationChoice::PickNewOrigin,
        })
    }
}

impl<I: InputReader, W: Write> CoordinateSource for CliPlayer<I, W> {
    fn next_target(&mut self, board_size: usize) -> Option<usize> {
        self.say("\nWhich coordinates would you like to attack?");
        let (x, y) = self.read_coordinates(board_size)?;
        Some(x + y * board_size)
    }

    fn rejected(&mut self, _index: usize, err: &BoardError) {
        if let BoardError::AlreadyAttacked { .. } = err {
            self.say("You have already attacked this position! Please give another position to attack.\n");
        } else {
            self.say(&format!("{}\n", err));
        }
    }
}

impl<I: InputReader, W: Write> PlacementPlanner for CliPlayer<I, W> {
    fn plan_ship(&mut self, ship_size: usize, board: &Board) -> Result<Vec<usize>, BoardError> {
        let size = board.size();
        let grid = format_cells(&board.cell_views(true), size);
        self.say(&format!("\n{}, please position your ships now:\n\n{}", board.owner(), grid));

        loop {
            self.say(&format!(
                "\nOn which starting coordinates would you like to place a ship of size {}?",
                ship_size
            ));
            let (x, y) = self
                .read_coordinates(size)
                .ok_or(BoardError::UnableToPlaceShip)?;
            let occupied = board
                .index_of(x, y)
                .and_then(|i| board.position(i))
                .is_some_and(|p| p.has_ship());
            if occupied {
                self.say("This position already has a ship! Please place the ship in an empty position...");
                continue;
            }

            loop {
                let direction = match self.read_orientation().ok_or(BoardError::UnableToPlaceShip)? {
                    OrientationChoice::Grow(direction) => direction,
                    OrientationChoice::PickNewOrigin => {
                        self.say("Resetting initial position...");
                        break;
                    }
                };
                match board.ship_indices(x, y, direction, ship_size) {
                    Ok(indices) => return Ok(indices),
                    Err(BoardError::ShipOutOfBounds) => {
                        self.say("Illegal ship positioning, please try another orientation... ");
                    }
                    Err(BoardError::PlacementConflict { .. }) => {
                        self.say(
                            "There is already a ship in at least one of the positions that a new \
                             ship is attempting to be placed.\nPlease retry placing this ship...",
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    fn placement_rejected(&mut self, err: &BoardError) {
        self.say(&format!("Placement refused: {}\n", err));
    }
}
