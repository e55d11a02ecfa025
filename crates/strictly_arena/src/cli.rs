//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Difficulty;

/// Strictly Arena - tic-tac-toe computer opponents head to head
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Simulate and replay tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of computer-vs-computer games and print the scoreboard
    Simulate {
        /// Path to arena config (TOML). Flags below override its values.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// Difficulty of the X player (easy, intermediate, hard)
        #[arg(short = 'x', long = "x")]
        x_difficulty: Option<Difficulty>,

        /// Difficulty of the O player (easy, intermediate, hard)
        #[arg(short = 'o', long = "o")]
        o_difficulty: Option<Difficulty>,

        /// O opens the first game
        #[arg(long)]
        o_first: bool,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Rebuild a game from recorded cells and print it
    Replay {
        /// Cells in play order: "row,col" (1-3) or a cell number (1-9)
        #[arg(required = true)]
        moves: Vec<String>,

        /// O made the first move
        #[arg(long)]
        o_first: bool,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
}
