//! Strictly Arena - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_arena::{Arena, ArenaConfig, parse_moves, render, replay};
use strictly_tictactoe::Difficulty;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_tictactoe=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            config,
            games,
            x_difficulty,
            o_difficulty,
            o_first,
            seed,
        } => run_simulation(config, games, x_difficulty, o_difficulty, o_first, seed),
        Command::Replay {
            moves,
            o_first,
            json,
        } => run_replay(&moves, o_first, json),
    }
}

/// Play a batch of games and print the scoreboard
#[instrument]
fn run_simulation(
    config: Option<std::path::PathBuf>,
    games: Option<u32>,
    x_difficulty: Option<Difficulty>,
    o_difficulty: Option<Difficulty>,
    o_first: bool,
    seed: Option<u64>,
) -> Result<()> {
    let base = match config {
        Some(path) => ArenaConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    let x_first = *base.x_first() && !o_first;
    let config = base
        .with_games(games)?
        .with_difficulties(x_difficulty, o_difficulty)
        .with_x_first(x_first)
        .with_seed(seed);

    info!(games = config.games(), "Starting arena");
    let scores = Arena::new(config).run()?;
    print!("{}", scores);
    Ok(())
}

/// Rebuild a recorded game and print it
#[instrument]
fn run_replay(moves: &[String], o_first: bool, json: bool) -> Result<()> {
    let cells = parse_moves(&moves.join(" "))?;
    let state = replay(&cells, !o_first)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render(&state));
    }
    Ok(())
}
