//! Minimax with alpha-beta pruning.

use super::{SearchResult, Strategy, StrategyKind, terminal_utility};
use crate::board::Board;
use crate::mark::Mark;
use rand::RngCore;
use tracing::{debug, instrument};

/// Minimax search that skips branches which cannot change the decision.
///
/// Chooses the same move as [`MinimaxStrategy`](super::MinimaxStrategy) on
/// every board, visiting fewer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaStrategy {
    mark: Mark,
}

impl AlphaBetaStrategy {
    /// Creates an alpha-beta strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Runs the pruned search and reports value, move and node count.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut nodes = 0;
        let (value, best_move) = max_value(board, self.mark, i32::MIN, i32::MAX, &mut nodes);
        debug!(value, ?best_move, nodes, "Alpha-beta search complete");
        SearchResult {
            value,
            best_move,
            nodes,
        }
    }
}

impl Strategy for AlphaBetaStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AlphaBeta
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&self, board: &Board, _rng: &mut dyn RngCore) -> Option<usize> {
        self.search(board).best_move
    }
}

/// `alpha` is the value the maximizer is already assured of, `beta` the
/// minimizer's. Returns as soon as `best >= beta`.
fn max_value(
    state: &Board,
    mark: Mark,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> (i32, Option<usize>) {
    *nodes += 1;
    if state.is_terminal() {
        return (terminal_utility(state, mark), None);
    }

    let mut best_value = i32::MIN;
    let mut best_move = None;
    for index in state.open_spaces() {
        let (value, _) = min_value(&state.with_mark(index, mark), mark, alpha, beta, nodes);
        if value > best_value {
            best_value = value;
            best_move = Some(index);
            alpha = alpha.max(best_value);
        }
        if best_value >= beta {
            return (best_value, best_move);
        }
    }
    (best_value, best_move)
}

/// Mirror of [`max_value`]; returns as soon as `best <= alpha`.
fn min_value(
    state: &Board,
    mark: Mark,
    alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<usize>) {
    *nodes += 1;
    if state.is_terminal() {
        return (terminal_utility(state, mark), None);
    }

    let mut best_value = i32::MAX;
    let mut best_move = None;
    for index in state.open_spaces() {
        let (value, _) = max_value(
            &state.with_mark(index, mark.opponent()),
            mark,
            alpha,
            beta,
            nodes,
        );
        if value < best_value {
            best_value = value;
            best_move = Some(index);
            beta = beta.min(best_value);
        }
        if best_value <= alpha {
            return (best_value, best_move);
        }
    }
    (best_value, best_move)
}
