//! Move-selection strategies for computer opponents.
//!
//! Every strategy is bound to one [`Mark`] at construction and picks a cell
//! for that mark given a board. Calls are pure functions of the board:
//! strategies clone it to explore hypothetical futures and never mutate the
//! caller's copy. Randomness, where a strategy needs it, is passed in per
//! call so tests can substitute a seeded generator.
//!
//! | id          | name          | difficulty |
//! |-------------|---------------|------------|
//! | `random`    | Random        | 1          |
//! | `goal`      | Goal-Based    | 2          |
//! | `utility`   | Utility-Based | 3          |
//! | `minimax`   | Minimax       | 4          |
//! | `alphabeta` | Alpha-Beta    | 5          |

mod alpha_beta;
mod goal;
mod minimax;
mod random;
mod tactics;
mod utility;

pub use alpha_beta::AlphaBetaStrategy;
pub use goal::GoalStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;
pub use utility::{UtilityStrategy, board_utility, line_utility};

use crate::board::Board;
use crate::mark::Mark;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A computer opponent.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Which member of the family this is.
    fn kind(&self) -> StrategyKind;

    /// The mark this strategy plays.
    fn mark(&self) -> Mark;

    /// Chooses a cell index for this strategy's mark.
    ///
    /// Returns `None` only when the board has no open space; callers are
    /// expected to stop the game before that point.
    fn select_move(&self, board: &Board, rng: &mut dyn RngCore) -> Option<usize>;
}

/// Identifies a strategy in the registry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// Uniformly random open cell.
    Random,
    /// Win now, else block, else random.
    Goal,
    /// Win now, else block, else best line utility.
    Utility,
    /// Exhaustive minimax search.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl StrategyKind {
    /// Stable identifier used in requests and config files.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Human-readable name for menus.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Goal => "Goal-Based",
            StrategyKind::Utility => "Utility-Based",
            StrategyKind::Minimax => "Minimax",
            StrategyKind::AlphaBeta => "Alpha-Beta",
        }
    }

    /// Difficulty rank, 1 (easiest) to 5.
    pub fn difficulty(self) -> u8 {
        match self {
            StrategyKind::Random => 1,
            StrategyKind::Goal => 2,
            StrategyKind::Utility => 3,
            StrategyKind::Minimax => 4,
            StrategyKind::AlphaBeta => 5,
        }
    }

    /// Listing entry for this strategy.
    pub fn info(self) -> StrategyInfo {
        StrategyInfo {
            id: self.id().to_string(),
            name: self.display_name().to_string(),
            difficulty: self.difficulty(),
        }
    }

    /// Builds a strategy of this kind playing `mark`.
    pub fn build(self, mark: Mark) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(mark)),
            StrategyKind::Goal => Box::new(GoalStrategy::new(mark)),
            StrategyKind::Utility => Box::new(UtilityStrategy::new(mark)),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new(mark)),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy::new(mark)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Menu entry describing one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StrategyInfo {
    /// Registry identifier.
    id: String,
    /// Display name.
    name: String,
    /// Difficulty rank.
    difficulty: u8,
}

/// Outcome of a full game-tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Game value from the searching side's view: 1 win, 0 draw, -1 loss.
    pub value: i32,
    /// Chosen cell, `None` on a terminal board.
    pub best_move: Option<usize>,
    /// Number of positions visited.
    pub nodes: u64,
}

/// Utility of a finished game from `mark`'s point of view.
pub(crate) fn terminal_utility(board: &Board, mark: Mark) -> i32 {
    if board.has_win(mark) {
        1
    } else if board.has_win(mark.opponent()) {
        -1
    } else {
        0
    }
}
