use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, GameError},
    config::GameConfig,
    player::{CoordinateSource, PlacementPlanner},
    ui::Presenter,
};

/// Placement plans a planner may have refused before fleet setup gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Rule variant deciding how many attacks a player gets per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum GameMode {
    /// One attack per turn.
    #[default]
    Classic,
    /// One attack per surviving ship of the attacker, counted at turn start.
    Salvo,
}

impl GameMode {
    pub fn attacks_per_turn(self, attacker: &Board) -> usize {
        match self {
            GameMode::Classic => 1,
            GameMode::Salvo => attacker.ships_remaining(),
        }
    }
}

/// Lifecycle of a game. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    SettingUp,
    InProgress,
    Finished,
}

/// Turn-mode state machine: resolves the attacks of one turn against a
/// defending board and records their results.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    mode: GameMode,
    board_size: usize,
    turn_log: Vec<AttackResult>,
    phase: GamePhase,
}

impl TurnEngine {
    pub fn new(mode: GameMode, board_size: usize) -> Self {
        Self {
            mode,
            board_size,
            turn_log: Vec::new(),
            phase: GamePhase::SettingUp,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Results logged so far this turn.
    pub fn turn_log(&self) -> &[AttackResult] {
        &self.turn_log
    }

    /// Leave the setup phase. Calling it again while in progress is a no-op.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::SettingUp => {
                log::info!(
                    "{:?} game started on a {}x{} board",
                    self.mode,
                    self.board_size,
                    self.board_size
                );
                self.phase = GamePhase::InProgress;
                Ok(())
            }
            GamePhase::InProgress => Ok(()),
            GamePhase::Finished => Err(GameError::Finished),
        }
    }

    /// Play one turn of `attacker` against `defender`.
    ///
    /// The number of attacks is fixed when the turn starts. The turn ends early
    /// once the defender's last ship sinks. Returns the number of attacks made.
    pub fn take_turn<S: CoordinateSource + ?Sized>(
        &mut self,
        attacker: &Board,
        defender: &mut Board,
        source: &mut S,
    ) -> Result<usize, GameError> {
        match self.phase {
            GamePhase::SettingUp => return Err(GameError::NotStarted),
            GamePhase::Finished => return Err(GameError::Finished),
            GamePhase::InProgress => {}
        }
        let attacks = self.mode.attacks_per_turn(attacker);
        log::debug!(
            "{} attacks {} with {} shot(s)",
            attacker.owner(),
            defender.owner(),
            attacks
        );
        let mut made = 0;
        while made < attacks {
            let result = self.resolve_attack(defender, source)?;
            made += 1;
            if result == AttackResult::Won {
                break;
            }
        }
        Ok(made)
    }

    /// Resolve a single attack slot, re-requesting coordinates until one hits
    /// a cell that was not attacked before.
    pub fn resolve_attack<S: CoordinateSource + ?Sized>(
        &mut self,
        defender: &mut Board,
        source: &mut S,
    ) -> Result<AttackResult, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(if self.is_finished() {
                GameError::Finished
            } else {
                GameError::NotStarted
            });
        }
        loop {
            let index = source
                .next_target(self.board_size)
                .ok_or(GameError::SourceExhausted)?;
            match defender.attack(index) {
                Ok(result) => {
                    self.turn_log.push(result);
                    source.accepted(index, result);
                    if result == AttackResult::Won {
                        log::info!("{} has lost all ships", defender.owner());
                        self.phase = GamePhase::Finished;
                    }
                    return Ok(result);
                }
                Err(err @ BoardError::AlreadyAttacked { .. }) => {
                    log::warn!("{}", err);
                    source.rejected(index, &err);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Hand over this turn's results and start a fresh log.
    pub fn drain_turn_log(&mut self) -> Vec<AttackResult> {
        core::mem::take(&mut self.turn_log)
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Everything that happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: usize,
    pub attacker: String,
    pub defender: String,
    pub results: Vec<AttackResult>,
    pub finished: bool,
}

/// A two-player game: both boards, the fleet to place, and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    engine: TurnEngine,
    boards: [Board; 2],
    fleet: Vec<usize>,
    attacker: Seat,
    turns: usize,
    last_report: Option<TurnReport>,
}

impl Game {
    /// Create a game in its setup phase with two empty boards.
    pub fn new(config: &GameConfig, first: &str, second: &str) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            engine: TurnEngine::new(config.mode, config.board_size),
            boards: [
                Board::new(first, config.board_size),
                Board::new(second, config.board_size),
            ],
            fleet: config.fleet.clone(),
            attacker: Seat::First,
            turns: 0,
            last_report: None,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.engine.mode()
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn board_size(&self) -> usize {
        self.engine.board_size()
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Turns completed so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Seat whose turn is next (or who won, once finished).
    pub fn attacker(&self) -> Seat {
        self.attacker
    }

    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat.index()]
    }

    /// Mutable board access, e.g. for manual placement or rendering.
    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.boards[seat.index()]
    }

    /// Place the whole fleet for `seat`, one ship at a time, asking `planner`
    /// for the cells. Refused plans are reported back and re-requested.
    pub fn place_fleet<P: PlacementPlanner + ?Sized>(
        &mut self,
        seat: Seat,
        planner: &mut P,
    ) -> Result<(), GameError> {
        if self.engine.phase() != GamePhase::SettingUp {
            return Err(GameError::AlreadyStarted);
        }
        let board = &mut self.boards[seat.index()];
        if !board.ships().is_empty() {
            return Err(GameError::FleetAlreadyPlaced {
                owner: board.owner().to_string(),
            });
        }
        for &ship_size in &self.fleet {
            let mut attempts = 0;
            loop {
                attempts += 1;
                let indices = planner.plan_ship(ship_size, board)?;
                match board.place_ship(&indices, ship_size) {
                    Ok(_) => break,
                    Err(err) if attempts < MAX_PLACEMENT_ATTEMPTS => {
                        log::warn!("{}: placement refused: {}", board.owner(), err);
                        planner.placement_rejected(&err);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
        Ok(())
    }

    /// Begin play. Both boards must carry exactly the configured fleet.
    pub fn start(&mut self) -> Result<(), GameError> {
        let mut expected = self.fleet.clone();
        expected.sort_unstable();
        for board in &self.boards {
            let mut placed: Vec<usize> = board.ships().iter().map(|s| s.size()).collect();
            placed.sort_unstable();
            if placed != expected {
                return Err(GameError::FleetIncomplete {
                    owner: board.owner().to_string(),
                });
            }
        }
        self.engine.start()
    }

    /// Play the current attacker's turn and pass the turn on.
    ///
    /// If the source fails after some attacks already landed, the turn is
    /// still counted and passed on before the error is returned; its partial
    /// results are kept in [`Game::last_report`].
    pub fn play_turn<S: CoordinateSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<TurnReport, GameError> {
        let (first, second) = self.boards.split_at_mut(1);
        let (attacker, defender) = match self.attacker {
            Seat::First => (&first[0], &mut second[0]),
            Seat::Second => (&second[0], &mut first[0]),
        };
        let outcome = self.engine.take_turn(attacker, defender, source);
        let results = self.engine.drain_turn_log();
        let outcome = match outcome {
            Err(err) if results.is_empty() => return Err(err),
            other => other,
        };

        // A turn cut short after landing attacks still counts as played.
        self.turns += 1;
        let report = TurnReport {
            turn: self.turns,
            attacker: attacker.owner().to_string(),
            defender: defender.owner().to_string(),
            results,
            finished: self.engine.is_finished(),
        };
        if !report.finished {
            self.attacker = self.attacker.other();
        }
        self.last_report = Some(report.clone());
        outcome.map(|_| report)
    }

    /// The most recently played turn, including one cut short by an error.
    pub fn last_report(&self) -> Option<&TurnReport> {
        self.last_report.as_ref()
    }

    /// Name of the winner once the game is finished.
    pub fn winner(&self) -> Option<&str> {
        if !self.is_finished() {
            return None;
        }
        self.boards
            .iter()
            .find(|b| b.ships_remaining() > 0)
            .map(|b| b.owner())
    }

    /// Play until someone wins. `sources` supply the targets of the first and
    /// second player; `presenter` is shown the boards before every turn, the
    /// results after it, and every hand-over between players. Returns the
    /// winner's name.
    pub fn run<P: Presenter + ?Sized>(
        &mut self,
        mut sources: [&mut dyn CoordinateSource; 2],
        presenter: &mut P,
    ) -> Result<String, GameError> {
        self.start()?;
        while !self.is_finished() {
            let seat = self.attacker;
            {
                let (first, second) = self.boards.split_at_mut(1);
                let (own, enemy) = match seat {
                    Seat::First => (&mut first[0], &mut second[0]),
                    Seat::Second => (&mut second[0], &mut first[0]),
                };
                presenter.show_boards(enemy, own);
                let attacks = self.engine.mode().attacks_per_turn(own);
                presenter.turn_start(own, enemy, attacks);
            }
            let report = self.play_turn(&mut *sources[seat.index()])?;
            presenter.turn_results(&report);
            if !report.finished {
                presenter.hand_over(&report.defender);
            }
        }
        let winner = self.winner().unwrap_or_default().to_string();
        presenter.announce_winner(&winner);
        Ok(winner)
    }
}
