//! Utility-function opponent.

use super::tactics::win_or_block;
use super::{Strategy, StrategyKind};
use crate::board::{Board, WINNING_LINES};
use crate::mark::Mark;
use rand::RngCore;
use tracing::{debug, instrument, trace};

/// Scores one winning line from `mark`'s point of view.
///
/// A line still open to `mark` is worth +1 with one mark and +3 with two;
/// a line still open to the opponent costs -1 and -3 the same way. Lines
/// both sides have entered are worth nothing.
pub fn line_utility(board: &Board, line: &[usize; 3], mark: Mark) -> i32 {
    let own = line.iter().filter(|&&i| board.cells()[i].is(mark)).count();
    let opp = line
        .iter()
        .filter(|&&i| board.cells()[i].is(mark.opponent()))
        .count();

    let mut utility = 0;
    if opp == 0 {
        utility += match own {
            2 => 3,
            1 => 1,
            _ => 0,
        };
    }
    if own == 0 {
        utility -= match opp {
            2 => 3,
            1 => 1,
            _ => 0,
        };
    }
    utility
}

/// Sums [`line_utility`] over all eight winning lines.
pub fn board_utility(board: &Board, mark: Mark) -> i32 {
    WINNING_LINES
        .iter()
        .map(|line| line_utility(board, line, mark))
        .sum()
}

/// Wins or blocks when it can, otherwise maximizes [`board_utility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityStrategy {
    mark: Mark,
}

impl UtilityStrategy {
    /// Creates a utility strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Strategy for UtilityStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Utility
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    #[instrument(skip(self, board, _rng), fields(mark = %self.mark))]
    fn select_move(&self, board: &Board, _rng: &mut dyn RngCore) -> Option<usize> {
        if let Some(index) = win_or_block(board, self.mark) {
            debug!(index, "Goal move");
            return Some(index);
        }

        // Strict comparison keeps the earliest index among equal scores.
        let mut best: Option<(usize, i32)> = None;
        for index in board.open_spaces() {
            let utility = board_utility(&board.with_mark(index, self.mark), self.mark);
            trace!(index, utility, "Scored candidate");
            if best.is_none_or(|(_, best_utility)| utility > best_utility) {
                best = Some((index, utility));
            }
        }

        debug!(?best, "Utility pick");
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_board_scores_by_line_count() {
        let board = Board::new();
        let score = |i| board_utility(&board.with_mark(i, Mark::X), Mark::X);
        assert_eq!(score(4), 4); // center: 4 lines
        for corner in [0, 2, 6, 8] {
            assert_eq!(score(corner), 3);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(score(edge), 2);
        }
    }

    #[test]
    fn test_line_utility_mixed_line_is_neutral() {
        let board = Board::from_spaces([Some(Mark::X), Some(Mark::O), None]);
        assert_eq!(line_utility(&board, &[0, 1, 2], Mark::X), 0);
    }

    #[test]
    fn test_line_utility_opponent_pair() {
        let board = Board::from_spaces([Some(Mark::O), Some(Mark::O), None]);
        assert_eq!(line_utility(&board, &[0, 1, 2], Mark::X), -3);
        assert_eq!(line_utility(&board, &[0, 1, 2], Mark::O), 3);
    }

    #[test]
    fn test_opens_in_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let strategy = UtilityStrategy::new(Mark::X);
        assert_eq!(strategy.select_move(&Board::new(), &mut rng), Some(4));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // X in the center: every corner scores the same for O, so the
        // first corner wins.
        let board = Board::from_spaces([None, None, None, None, Some(Mark::X)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(UtilityStrategy::new(Mark::O).select_move(&board, &mut rng), Some(0));
    }
}
