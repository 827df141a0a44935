//! Goal-based opponent.

use super::tactics::win_or_block;
use super::{Strategy, StrategyKind};
use crate::board::Board;
use crate::mark::Mark;
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Wins if it can, blocks an immediate threat, otherwise plays randomly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalStrategy {
    mark: Mark,
}

impl GoalStrategy {
    /// Creates a goal-based strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Strategy for GoalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Goal
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    fn select_move(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize> {
        if let Some(index) = win_or_block(board, self.mark) {
            debug!(index, "Goal move");
            return Some(index);
        }
        let choice = board.open_spaces().choose(rng).copied();
        debug!(?choice, "No goal in reach, random pick");
        choice
    }
}
