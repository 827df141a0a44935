//! Tic-tac-toe board model and computer opponents.
//!
//! # Architecture
//!
//! - **Board**: 3x3 value type with win/draw detection
//! - **Strategies**: five opponents from random play to alpha-beta search
//! - **Registry**: lookup by identifier and a difficulty-sorted listing
//! - **Session**: drives one human-versus-computer game
//! - **Arena**: plays strategies against each other
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_ai::{Board, Mark, Strategy, create_strategy};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut board = Board::new();
//! board.mark(4, Mark::X);
//!
//! let opponent = create_strategy("alphabeta", Mark::O).unwrap();
//! let reply = opponent.select_move(&board, &mut rng).unwrap();
//! assert!(board.mark(reply, Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod board;
mod error;
mod mark;
mod position;
mod registry;
mod session;
mod strategy;

// Crate-level exports - Board
pub use board::{Board, CELL_COUNT, TooManySpaces, WINNING_LINES};
pub use mark::{Cell, Mark};
pub use position::Position;

// Crate-level exports - Errors
pub use error::{MoveError, SessionError, StrategyError, StrategyErrorKind};

// Crate-level exports - Strategies
pub use registry::{create_strategy, list_strategies, lookup};
pub use strategy::{
    AlphaBetaStrategy, GoalStrategy, MinimaxStrategy, RandomStrategy, SearchResult, Strategy,
    StrategyInfo, StrategyKind, UtilityStrategy, board_utility, line_utility,
};

// Crate-level exports - Game flow
pub use arena::{GameRecord, Outcome, SeriesSummary, play_game, run_series};
pub use session::{GameSession, TurnReport, Winner};
