//! Interactive terminal game.

use anyhow::Result;
use rand::RngCore;
use std::io::{BufRead, Write};
use tictactoe_ai::{GameSession, MoveError, Position, SessionError, TurnReport, Winner};
use tracing::{debug, instrument, warn};

/// Plays `session` to the end, reading moves from `input`.
///
/// Returns the result, or `None` if the player quit or input ran out.
#[instrument(skip_all, fields(strategy = %session.strategy_kind()))]
pub fn run_game<R, W>(
    session: &mut GameSession,
    opening: &TurnReport,
    mut input: R,
    mut output: W,
    rng: &mut dyn RngCore,
) -> Result<Option<Winner>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "You are {} against {}. Enter 1-9 or a position name (q to quit).",
        session.human_mark(),
        session.strategy_kind()
    )?;
    if let Some(index) = opening.ai_move() {
        announce_computer_move(&mut output, *index)?;
    }

    let mut line = String::new();
    while !session.is_over() {
        writeln!(output, "\n{}\n", session.board())?;
        write!(output, "Your move: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let Some(position) = Position::parse_input(text) else {
            writeln!(output, "Unrecognized position: {text}")?;
            continue;
        };

        match session.play(position.to_index(), rng) {
            Ok(report) => {
                if let Some(index) = report.ai_move() {
                    announce_computer_move(&mut output, *index)?;
                }
            }
            Err(SessionError::Move(e)) => {
                writeln!(output, "{}", describe_move_error(&e))?;
            }
            Err(e) => {
                warn!(error = %e, "Session refused move");
                return Err(e.into());
            }
        }
    }

    writeln!(output, "\n{}\n", session.board())?;
    let winner = session.winner();
    let message = match winner {
        Some(Winner::Human) => "You win!",
        Some(Winner::Ai) => "The computer wins.",
        Some(Winner::Draw) | None => "It's a draw.",
    };
    writeln!(output, "Game over. {message}")?;
    Ok(winner)
}

fn announce_computer_move(output: &mut impl Write, index: usize) -> Result<()> {
    let label = Position::from_index(index).map_or("?", |p| p.label());
    writeln!(output, "Computer plays {} ({}).", index + 1, label)?;
    Ok(())
}

/// Renders a refused move in the same 1-based numbering the prompt uses.
fn describe_move_error(error: &MoveError) -> String {
    match error {
        MoveError::OccupiedCell(index) => {
            let label = Position::from_index(*index).map_or("?", |p| p.label());
            format!("Space {} ({}) is already taken.", index + 1, label)
        }
        MoveError::InvalidPosition(index) => {
            format!("Space {} is not on the board.", index + 1)
        }
    }
}
