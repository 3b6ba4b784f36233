use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

use crate::env::Move;
use crate::game::Board;

/// Opponent that picks a uniformly random free cell.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: SmallRng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomAgent {
    pub fn seeded(seed: u64) -> RandomAgent {
        RandomAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns `None` if the board is full.
    pub fn step(&mut self, board: &Board) -> Option<Move> {
        board.empty_cells().choose(&mut self.rng)
    }
}
