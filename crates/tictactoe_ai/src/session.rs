//! A single human-versus-computer game.
//!
//! The session is the game-flow driver a front end talks to: it owns one
//! board and one strategy, validates the human's move, lets the computer
//! reply, and reports the result in the shape front ends serialize.

use crate::board::Board;
use crate::error::SessionError;
use crate::mark::Mark;
use crate::strategy::{Strategy, StrategyKind};
use derive_getters::Getters;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Final result of a session, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The human completed a line.
    Human,
    /// The computer completed a line.
    Ai,
    /// Board filled with no line.
    Draw,
}

/// State after a request, serialized in camelCase for clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    /// Board after all moves of this turn.
    board: Board,
    /// Human's mark.
    human_mark: Mark,
    /// Computer's mark.
    ai_mark: Mark,
    /// Mark due to play next.
    current_turn: Mark,
    /// Cell the human played this turn.
    human_move: Option<usize>,
    /// Cell the computer played this turn.
    ai_move: Option<usize>,
    /// Whether the game has ended.
    game_over: bool,
    /// Result once the game has ended.
    winner: Option<Winner>,
}

/// One game between a human and a computer strategy.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    strategy: Box<dyn Strategy>,
    human_mark: Mark,
    winner: Option<Winner>,
}

impl GameSession {
    /// Starts a new game against `kind`.
    ///
    /// The human plays X when `human_first`, otherwise O and the computer
    /// opens immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoMoveAvailable`] if the computer cannot
    /// open, which only happens with a misbehaving strategy.
    #[instrument(skip(rng))]
    pub fn new(
        kind: StrategyKind,
        human_first: bool,
        rng: &mut dyn RngCore,
    ) -> Result<(Self, TurnReport), SessionError> {
        let human_mark = if human_first { Mark::X } else { Mark::O };
        let mut session = Self {
            board: Board::new(),
            strategy: kind.build(human_mark.opponent()),
            human_mark,
            winner: None,
        };
        info!(%kind, %human_mark, "New game");

        let ai_move = if human_first {
            None
        } else {
            Some(session.computer_turn(rng)?)
        };
        let report = session.report(None, ai_move);
        Ok((session, report))
    }

    /// Plays the human's move at `position` and the computer's reply.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the game has ended.
    /// - [`SessionError::Move`] for an off-board or taken cell; the board
    ///   is left unchanged.
    #[instrument(skip(self, rng), fields(human = %self.human_mark))]
    pub fn play(
        &mut self,
        position: usize,
        rng: &mut dyn RngCore,
    ) -> Result<TurnReport, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        self.board.try_mark(position, self.human_mark)?;
        debug!(position, "Human moved");

        if self.board.has_win(self.human_mark) {
            self.finish(Winner::Human);
            return Ok(self.report(Some(position), None));
        }
        if self.board.is_full() {
            self.finish(Winner::Draw);
            return Ok(self.report(Some(position), None));
        }

        let ai_move = self.computer_turn(rng)?;
        Ok(self.report(Some(position), Some(ai_move)))
    }

    /// Lets the computer move and records any result.
    fn computer_turn(&mut self, rng: &mut dyn RngCore) -> Result<usize, SessionError> {
        let ai_mark = self.ai_mark();
        let index = self
            .strategy
            .select_move(&self.board, rng)
            .ok_or(SessionError::NoMoveAvailable)?;
        self.board.try_mark(index, ai_mark)?;
        debug!(index, strategy = %self.strategy.kind(), "Computer moved");

        if self.board.has_win(ai_mark) {
            self.finish(Winner::Ai);
        } else if self.board.is_full() {
            self.finish(Winner::Draw);
        }
        Ok(index)
    }

    fn finish(&mut self, winner: Winner) {
        info!(?winner, "Game over");
        self.winner = Some(winner);
    }

    fn report(&self, human_move: Option<usize>, ai_move: Option<usize>) -> TurnReport {
        // X always opens, so equal counts mean X is due.
        let current_turn = if self.board.count(Mark::X) > self.board.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        TurnReport {
            board: self.board,
            human_mark: self.human_mark,
            ai_mark: self.ai_mark(),
            current_turn,
            human_move,
            ai_move,
            game_over: self.is_over(),
            winner: self.winner,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Human's mark.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Computer's mark.
    pub fn ai_mark(&self) -> Mark {
        self.strategy.mark()
    }

    /// Which strategy the computer plays.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Result once the game has ended.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
}
