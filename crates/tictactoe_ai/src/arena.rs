//! Computer-versus-computer games.

use crate::board::Board;
use crate::error::SessionError;
use crate::mark::Mark;
use crate::strategy::{Strategy, StrategyKind};
use derive_getters::Getters;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Won(Mark),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameRecord {
    /// Cells in the order they were played, X first.
    moves: Vec<usize>,
    /// Final board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Tally of a series of games between the same two strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SeriesSummary {
    /// Games won by the X strategy.
    x_wins: u32,
    /// Games won by the O strategy.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SeriesSummary {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Plays one game from an empty board, `x` moving first.
///
/// Each strategy places its own mark, so `x` should be built for X and
/// `o` for O.
///
/// # Errors
///
/// Returns [`SessionError`] if a strategy fails to produce a legal move.
#[instrument(skip_all, fields(x = %x.kind(), o = %o.kind()))]
pub fn play_game(
    x: &dyn Strategy,
    o: &dyn Strategy,
    rng: &mut dyn RngCore,
) -> Result<GameRecord, SessionError> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);

    while !board.is_terminal() {
        let player = if moves.len() % 2 == 0 { x } else { o };
        let index = player
            .select_move(&board, rng)
            .ok_or(SessionError::NoMoveAvailable)?;
        board.try_mark(index, player.mark())?;
        debug!(index, mark = %player.mark(), "Arena move");
        moves.push(index);
    }

    let outcome = board.winner().map_or(Outcome::Draw, Outcome::Won);
    debug!(%outcome, ?moves, "Arena game finished");
    Ok(GameRecord {
        moves,
        board,
        outcome,
    })
}

/// Plays `games` games of `x_kind` (as X) against `o_kind` (as O).
///
/// # Errors
///
/// Propagates the first [`play_game`] failure.
#[instrument(skip(rng))]
pub fn run_series(
    x_kind: StrategyKind,
    o_kind: StrategyKind,
    games: u32,
    rng: &mut dyn RngCore,
) -> Result<SeriesSummary, SessionError> {
    let x = x_kind.build(Mark::X);
    let o = o_kind.build(Mark::O);

    let mut summary = SeriesSummary::default();
    for _ in 0..games {
        let record = play_game(x.as_ref(), o.as_ref(), rng)?;
        summary.record(*record.outcome());
    }

    info!(
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "Series complete"
    );
    Ok(summary)
}
