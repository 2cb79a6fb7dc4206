use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{AttackResult, BoardError};

use super::{CoordinateSource, PlacementPlanner};

/// Replays a fixed list of targets and ship placements.
///
/// Useful for tests and replays. Once the targets run out `next_target`
/// returns `None`, so a script can never stall a turn.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPlayer {
    targets: VecDeque<usize>,
    placements: VecDeque<Vec<usize>>,
    rejected: Vec<usize>,
    accepted: Vec<(usize, AttackResult)>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player that fires at `targets` in order.
    pub fn with_targets(targets: impl IntoIterator<Item = usize>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue the cells for the next ship to be placed.
    pub fn push_placement(&mut self, indices: impl IntoIterator<Item = usize>) -> &mut Self {
        self.placements.push_back(indices.into_iter().collect());
        self
    }

    pub fn push_target(&mut self, index: usize) -> &mut Self {
        self.targets.push_back(index);
        self
    }

    /// Targets not yet handed out.
    pub fn remaining_targets(&self) -> usize {
        self.targets.len()
    }

    /// Targets the game refused, in order.
    pub fn rejected_targets(&self) -> &[usize] {
        &self.rejected
    }

    /// Targets the game resolved, with their results.
    pub fn resolved(&self) -> &[(usize, AttackResult)] {
        &self.accepted
    }
}

impl CoordinateSource for ScriptedPlayer {
    fn next_target(&mut self, _board_size: usize) -> Option<usize> {
        self.targets.pop_front()
    }

    fn rejected(&mut self, index: usize, _err: &BoardError) {
        self.rejected.push(index);
    }

    fn accepted(&mut self, index: usize, result: AttackResult) {
        self.accepted.push((index, result));
    }
}

impl PlacementPlanner for ScriptedPlayer {
    fn plan_ship(&mut self, ship_size: usize, _board: &Board) -> Result<Vec<usize>, BoardError> {
        let indices = self
            .placements
            .pop_front()
            .ok_or(BoardError::UnableToPlaceShip)?;
        if indices.len() != ship_size {
            return Err(BoardError::ShipSizeMismatch {
                expected: ship_size,
                actual: indices.len(),
            });
        }
        Ok(indices)
    }
}
