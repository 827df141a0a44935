//! Error types for board moves, strategy lookup, and game sessions.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Reason a mark could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The cell already holds a mark.
    #[display("Space {} is already taken", _0)]
    OccupiedCell(usize),
}

impl std::error::Error for MoveError {}

/// Specific strategy error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StrategyErrorKind {
    /// No strategy is registered under the identifier.
    #[display("Unknown strategy: {}", _0)]
    UnknownStrategy(String),
}

/// Strategy registry error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Strategy error: {} at {}:{}", kind, file, line)]
pub struct StrategyError {
    /// What went wrong.
    pub kind: StrategyErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StrategyError {
    /// Creates a new strategy error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: StrategyErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &StrategyErrorKind {
        &self.kind
    }
}

/// Error raised while driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// The human move was rejected by the board.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// The computer opponent had no open space to play.
    #[display("No move available for the computer opponent")]
    NoMoveAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_error_records_location() {
        let err = StrategyError::new(StrategyErrorKind::UnknownStrategy("chess".into()));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("Unknown strategy: chess"));
    }

    #[test]
    fn test_session_error_wraps_move_error() {
        let err: SessionError = MoveError::OccupiedCell(4).into();
        assert_eq!(err.to_string(), "Space 4 is already taken");
    }
}
