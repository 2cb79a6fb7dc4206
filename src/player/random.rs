use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::BoardError;

use super::{CoordinateSource, PlacementPlanner};

/// Player that places ships at random and fires at every cell exactly once,
/// in a shuffled order.
pub struct RandomPlayer {
    rng: SmallRng,
    deck: Vec<usize>,
    deck_size: usize,
}

impl RandomPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            deck: Vec::new(),
            deck_size: 0,
        }
    }

    /// Player with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    fn shuffle_deck(&mut self, board_size: usize) {
        self.deck = (0..board_size * board_size).collect();
        self.deck.shuffle(&mut self.rng);
        self.deck_size = board_size;
    }
}

impl CoordinateSource for RandomPlayer {
    fn next_target(&mut self, board_size: usize) -> Option<usize> {
        if self.deck_size != board_size {
            self.shuffle_deck(board_size);
        }
        self.deck.pop()
    }
}

impl PlacementPlanner for RandomPlayer {
    fn plan_ship(&mut self, ship_size: usize, board: &Board) -> Result<Vec<usize>, BoardError> {
        board.random_placement(&mut self.rng, ship_size)
    }
}
