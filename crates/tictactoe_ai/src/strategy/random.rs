//! Random opponent.

use super::{Strategy, StrategyKind};
use crate::board::Board;
use crate::mark::Mark;
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random open cell. Easiest opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy {
    mark: Mark,
}

impl RandomStrategy {
    /// Creates a random strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    fn select_move(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        let choice = board.open_spaces().choose(rng).copied();
        debug!(?choice, "Random pick");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_only_open_cells_are_chosen() {
        let board = Board::from_spaces([Some(Mark::X), Some(Mark::O), None, Some(Mark::X)]);
        let strategy = RandomStrategy::new(Mark::O);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let index = strategy.select_move(&board, &mut rng).unwrap();
            assert!(board.is_open(index));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::from_spaces([Some(Mark::X); 9]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(RandomStrategy::new(Mark::O).select_move(&board, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let strategy = RandomStrategy::new(Mark::X);
        let a = strategy.select_move(&board, &mut ChaCha8Rng::seed_from_u64(99));
        let b = strategy.select_move(&board, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
