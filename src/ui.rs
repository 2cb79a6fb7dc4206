//! Presentation side of the game: what gets shown between and after turns.

use crate::{board::Board, game::TurnReport};

/// Receives everything the game wants displayed.
///
/// All methods default to doing nothing so headless callers only implement
/// what they need.
pub trait Presenter {
    /// Called before every turn with the attacker's view: the enemy board
    /// (ships hidden) and the attacker's own board (ships shown).
    fn show_boards(&mut self, _enemy: &mut Board, _own: &mut Board) {}

    /// Called before every turn with the number of attacks about to be made.
    fn turn_start(&mut self, _attacker: &Board, _defender: &Board, _attacks: usize) {}

    /// Called after every turn with its results.
    fn turn_results(&mut self, _report: &TurnReport) {}

    /// Called when play passes to `next`, before anything of theirs is shown.
    fn hand_over(&mut self, _next: &str) {}

    fn announce_winner(&mut self, _winner: &str) {}
}

/// [`Presenter`] that shows nothing.
pub struct SilentPresenter;

impl Presenter for SilentPresenter {}

#[cfg(feature = "std")]
pub use terminal::{format_board, format_cells, TerminalPresenter};

#[cfg(feature = "std")]
mod terminal {
    use std::io::{self, Stdout, Write};
    use std::string::String;

    use crate::{
        board::Board,
        common::AttackResult,
        game::{GameMode, TurnReport},
        player::cli::{InputReader, StdinReader},
        position::CellView,
    };

    use super::Presenter;

    /// Draw a grid of cells with axis labels.
    ///
    /// Ships show as `{ }`, hits as `X`, misses as `O`. An attack that is
    /// still marked recent shows as `#` (hit) or `@` (miss). Rows are split by
    /// dashed rules.
    pub fn format_cells(cells: &[CellView], size: usize) -> String {
        let mut out = String::new();
        out.push_str("  X");
        for x in 0..size {
            out.push_str(&format!("  {:<4}", x));
        }
        out.push('\n');
        out.push_str("Y ");
        out.push_str(&"------".repeat(size));
        out.push_str("-\n");
        let separator = format!("  |{}|\n", "- - - ".repeat(size).trim_end());
        for (y, row) in cells.chunks(size.max(1)).enumerate() {
            if y > 0 {
                out.push_str(&separator);
            }
            out.push_str(&format!("{:<2}", y));
            for cell in row {
                out.push_str(&format_cell(cell));
            }
            out.push_str("|\n");
        }
        out.push_str("  ");
        out.push_str(&"------".repeat(size));
        out.push_str("-\n");
        out
    }

    fn format_cell(cell: &CellView) -> String {
        let mark = match (cell.attacked, cell.hit, cell.recent) {
            (false, _, _) => ' ',
            (true, true, true) => '#',
            (true, true, false) => 'X',
            (true, false, true) => '@',
            (true, false, false) => 'O',
        };
        if cell.ship {
            format!("| {{{}}} ", mark)
        } else {
            format!("|  {}  ", mark)
        }
    }

    /// Render `board` (applying the render side effect) and draw it.
    pub fn format_board(board: &mut Board, show_ships: bool) -> String {
        let size = board.size();
        let cells = board.render(show_ships);
        format_cells(&cells, size)
    }

    fn result_line(result: AttackResult) -> &'static str {
        match result {
            AttackResult::Miss => "Miss!",
            AttackResult::Hit => "Hit!",
            AttackResult::Sunk => "Sunk!",
            AttackResult::Won => "Won!",
        }
    }

    const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

    /// Text presenter for a terminal or any other writer.
    ///
    /// In hot-seat mode the screen is cleared between players and every
    /// hand-over waits for a line on `input`.
    pub struct TerminalPresenter<W: Write = Stdout, R: InputReader = StdinReader> {
        out: W,
        input: R,
        mode: GameMode,
        hot_seat: bool,
    }

    impl TerminalPresenter<Stdout, StdinReader> {
        pub fn new(mode: GameMode) -> Self {
            Self::with_writer(io::stdout(), mode)
        }
    }

    impl<W: Write> TerminalPresenter<W, StdinReader> {
        pub fn with_writer(out: W, mode: GameMode) -> Self {
            Self::with_io(out, StdinReader, mode)
        }
    }

    impl<W: Write, R: InputReader> TerminalPresenter<W, R> {
        pub fn with_io(out: W, input: R, mode: GameMode) -> Self {
            Self {
                out,
                input,
                mode,
                hot_seat: false,
            }
        }

        /// Clear the screen and pause between players so those sharing a
        /// terminal do not see each other's fleet.
        pub fn hot_seat(mut self, enabled: bool) -> Self {
            self.hot_seat = enabled;
            self
        }

        /// Wipe the screen. Does nothing outside hot-seat mode.
        pub fn clear(&mut self) {
            if self.hot_seat {
                let _ = write!(self.out, "{}", CLEAR_SCREEN);
                let _ = self.out.flush();
            }
        }

        pub fn into_inner(self) -> W {
            self.out
        }
    }

    impl<W: Write, R: InputReader> Presenter for TerminalPresenter<W, R> {
        fn show_boards(&mut self, enemy: &mut Board, own: &mut Board) {
            self.clear();
            let _ = writeln!(self.out, "{}'s board:", enemy.owner());
            let _ = write!(self.out, "{}", format_board(enemy, false));
            let _ = writeln!(self.out, "\n{}'s board:", own.owner());
            let _ = write!(self.out, "{}", format_board(own, true));
        }

        fn turn_start(&mut self, attacker: &Board, defender: &Board, attacks: usize) {
            let _ = writeln!(
                self.out,
                "{}, your turn to attack {}!",
                attacker.owner(),
                defender.owner()
            );
            if self.mode == GameMode::Salvo {
                let _ = writeln!(
                    self.out,
                    "You have {} ships left so you can attack {} coordinates.",
                    attacker.ships_remaining(),
                    attacks
                );
            }
        }

        fn turn_results(&mut self, report: &TurnReport) {
            self.clear();
            let _ = writeln!(self.out, "{}'s turn result(s):", report.attacker);
            for &result in &report.results {
                let _ = writeln!(self.out, "  {}", result_line(result));
            }
            if !report.finished {
                let _ = writeln!(self.out, "{} is up next.", report.defender);
            }
            let _ = self.out.flush();
        }

        fn hand_over(&mut self, next: &str) {
            if !self.hot_seat {
                return;
            }
            let _ = write!(
                self.out,
                "Pass the terminal to {} and press Enter to continue...",
                next
            );
            let _ = self.out.flush();
            match self.input.read_line() {
                Ok(_) => {}
                Err(e) => log::error!("failed to read input: {}", e),
            }
            self.clear();
        }

        fn announce_winner(&mut self, winner: &str) {
            let _ = writeln!(self.out, "Congratulations {}, you won!", winner);
            let _ = self.out.flush();
        }
    }
}
