//! Exhaustive minimax opponent.

use super::{SearchResult, Strategy, StrategyKind, terminal_utility};
use crate::board::Board;
use crate::mark::Mark;
use rand::RngCore;
use tracing::{debug, instrument};

/// Searches the whole game tree below the current board. Plays perfectly.
///
/// The searching side always moves first in the simulated tree, so the
/// strategy must only be asked for a move on its own turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    mark: Mark,
}

impl MinimaxStrategy {
    /// Creates a minimax strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Runs the full search and reports value, move and node count.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut nodes = 0;
        let (value, best_move) = max_value(board, self.mark, &mut nodes);
        debug!(value, ?best_move, nodes, "Minimax search complete");
        SearchResult {
            value,
            best_move,
            nodes,
        }
    }
}

impl Strategy for MinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&self, board: &Board, _rng: &mut dyn RngCore) -> Option<usize> {
        self.search(board).best_move
    }
}

/// Best value for `mark` to move; first move reaching a new maximum wins ties.
fn max_value(state: &Board, mark: Mark, nodes: &mut u64) -> (i32, Option<usize>) {
    *nodes += 1;
    if state.is_terminal() {
        return (terminal_utility(state, mark), None);
    }

    let mut best_value = i32::MIN;
    let mut best_move = None;
    for index in state.open_spaces() {
        let (value, _) = min_value(&state.with_mark(index, mark), mark, nodes);
        if value > best_value {
            best_value = value;
            best_move = Some(index);
        }
    }
    (best_value, best_move)
}

/// Opponent's reply: least value for `mark`, first minimum wins ties.
fn min_value(state: &Board, mark: Mark, nodes: &mut u64) -> (i32, Option<usize>) {
    *nodes += 1;
    if state.is_terminal() {
        return (terminal_utility(state, mark), None);
    }

    let mut best_value = i32::MAX;
    let mut best_move = None;
    for index in state.open_spaces() {
        let (value, _) = max_value(&state.with_mark(index, mark.opponent()), mark, nodes);
        if value < best_value {
            best_value = value;
            best_move = Some(index);
        }
    }
    (best_value, best_move)
}
