//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against computer opponents of increasing difficulty
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a selectable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $TICTACTOE_CONFIG, then ./tictactoe.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available opponents, easiest first
    Players {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a game on the terminal
    Play {
        /// Opponent identifier (see `players`); overrides the config file
        #[arg(short, long)]
        strategy: Option<String>,

        /// Let the computer move first
        #[arg(long)]
        second: bool,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two opponents against each other
    Versus {
        /// Strategy playing X
        #[arg(short, long)]
        x: String,

        /// Strategy playing O
        #[arg(short, long)]
        o: String,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["tictactoe", "play"]);
        match cli.command {
            Command::Play { strategy, second, seed } => {
                assert_eq!(strategy, None);
                assert!(!second);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_versus() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "custom.toml",
            "versus",
            "-x",
            "goal",
            "-o",
            "minimax",
            "-g",
            "5",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Command::Versus { x, o, games, .. } => {
                assert_eq!(x, "goal");
                assert_eq!(o, "minimax");
                assert_eq!(games, 5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
