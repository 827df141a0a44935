//! One-move-ahead tactics shared by the heuristic strategies.
//!
//! Only immediate threats are seen: forks (two simultaneous threats) are
//! not detected.

use crate::board::Board;
use crate::mark::Mark;

/// First open cell (ascending) that completes a line for `mark`.
pub(crate) fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .open_spaces()
        .into_iter()
        .find(|&index| board.with_mark(index, mark).has_win(mark))
}

/// Win if possible, otherwise block the opponent's first winning cell.
pub(crate) fn win_or_block(board: &Board, mark: Mark) -> Option<usize> {
    winning_move(board, mark).or_else(|| winning_move(board, mark.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        Board::from_spaces(cells.chars().map(|c| c.to_string().parse::<Mark>().ok()))
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X X .
        // O O .
        // . . .
        let b = board("XX.OO....");
        assert_eq!(win_or_block(&b, Mark::X), Some(2));
        assert_eq!(win_or_block(&b, Mark::O), Some(5));
    }

    #[test]
    fn test_block_takes_lowest_index() {
        // O . O
        // . . .
        // O . X
        let b = board("O.O.X.O.X");
        assert_eq!(winning_move(&b, Mark::X), None);
        assert_eq!(win_or_block(&b, Mark::X), Some(1));
    }

    #[test]
    fn test_quiet_board_has_no_tactic() {
        assert_eq!(win_or_block(&Board::new(), Mark::X), None);
    }
}
