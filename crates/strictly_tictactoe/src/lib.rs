//! Tic-tac-toe engine with a tiered computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells, with row, column and diagonal views
//! - **Rules**: line predicates and win/draw detection
//! - **Strategy**: Easy, Intermediate and Hard move selection
//! - **Engine**: turn order, per-game context and outcome tracking
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{ComputerPlayer, Difficulty, GameEngine, Phase};
//!
//! let x = ComputerPlayer::seeded("X", Difficulty::Hard, 1);
//! let o = ComputerPlayer::seeded("O", Difficulty::Hard, 2);
//! let mut engine = GameEngine::new(Box::new(x), Box::new(o), true);
//! engine.play_game().unwrap();
//! assert!(matches!(engine.phase(), Phase::Won | Phase::Drawn));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod context;
mod coord;
mod engine;
pub mod invariants;
pub mod rules;
pub mod strategy;
mod types;

// Crate-level exports - Board and cells
pub use board::{Board, Line};
pub use coord::{Coord, ParseCoordError, Zone};
pub use types::{Cell, Mark};

// Crate-level exports - Moves and context
pub use action::{Move, MoveError};
pub use context::GameContext;

// Crate-level exports - Rules
pub use rules::{LineId, LineKind, Outcome, WinLine, detect, winning_line};

// Crate-level exports - Strategy
pub use strategy::{
    ComputerPlayer, Decision, Difficulty, Reason, Tactic, choose_move, decide, win_or_block,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameState, MoveSource, Phase, ScriptedMoves};
