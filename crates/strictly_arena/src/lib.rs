//! Strictly Arena - computer-vs-computer tic-tac-toe runs and game replays.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for a batch of games
//! - **Arena**: plays the batch, alternating the opener
//! - **Scoreboard**: per-player wins, losses and draws
//! - **Replay**: rebuilds a game from recorded cells

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;
mod replay;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{ArenaConfig, ConfigError};

// Crate-level exports - Simulation
pub use arena::Arena;
pub use scoreboard::{GameResult, PlayerStats, Scoreboard};

// Crate-level exports - Replay
pub use replay::{ReplayError, parse_moves, render, replay};
