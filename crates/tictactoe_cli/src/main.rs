//! Tic-tac-toe terminal front end.
//!
//! Lists opponents, plays interactive games, and runs computer-versus-computer
//! series.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_ai::{GameSession, list_strategies, lookup, run_series};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Players { json } => show_players(json),
        Command::Play {
            strategy,
            second,
            seed,
        } => run_play(&config, strategy, second, seed),
        Command::Versus {
            x,
            o,
            games,
            seed,
            json,
        } => run_versus(&config, &x, &o, games, seed, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the random source from a flag, the config, or entropy.
fn make_rng(flag: Option<u64>, config: &GameConfig) -> ChaCha8Rng {
    let seed = flag.or(*config.seed()).unwrap_or_else(rand::random);
    info!(seed, "Random source seeded");
    ChaCha8Rng::seed_from_u64(seed)
}

#[instrument]
fn show_players(json: bool) -> Result<()> {
    let players = list_strategies();
    if json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    println!("{:<10} {:<14} {}", "ID", "NAME", "DIFFICULTY");
    for player in &players {
        println!("{:<10} {:<14} {}", player.id(), player.name(), player.difficulty());
    }
    Ok(())
}

#[instrument(skip(config))]
fn run_play(
    config: &GameConfig,
    strategy: Option<String>,
    second: bool,
    seed: Option<u64>,
) -> Result<()> {
    let id = strategy.unwrap_or_else(|| config.default_strategy().clone());
    let kind = lookup(&id)?;
    let human_first = *config.human_first() && !second;
    let mut rng = make_rng(seed, config);

    let (mut session, opening) = GameSession::new(kind, human_first, &mut rng)?;
    let stdin = std::io::stdin();
    let winner = play::run_game(&mut session, &opening, stdin.lock(), std::io::stdout(), &mut rng)?;
    info!(?winner, "Session finished");
    Ok(())
}

#[instrument(skip(config))]
fn run_versus(
    config: &GameConfig,
    x: &str,
    o: &str,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let x_kind = lookup(x)?;
    let o_kind = lookup(o)?;
    let mut rng = make_rng(seed, config);

    let summary = run_series(x_kind, o_kind, games, &mut rng)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} (X) vs {} (O), {} games", x_kind, o_kind, summary.games());
        println!("  X wins: {}", summary.x_wins());
        println!("  O wins: {}", summary.o_wins());
        println!("  Draws:  {}", summary.draws());
    }
    Ok(())
}
