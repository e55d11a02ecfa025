//! Moves and the errors that can arise when applying them.
//!
//! A move is a domain event: the mark that played and where. The engine
//! records every move in order so strategies can recover the shape of the
//! game without re-deriving it from the board.

use super::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// One ply: a mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was played.
    pub mark: Mark,
    /// Where it was played.
    pub coord: Coord,
}

impl Move {
    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell of this move.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Error that can occur when requesting or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Position {:?} is off the board", _0)]
    OutOfBounds(Coord),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Coord),

    /// A replayed move carried the wrong mark for its turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// A move was requested on a full board.
    #[display("No legal move available")]
    NoLegalMove,

    /// A move source had nothing left to play.
    #[display("Move source for {} has no more moves", _0)]
    SourceExhausted(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for the caller contract violations: off-board or occupied target.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfBounds(_) | MoveError::SquareOccupied(_))
    }
}

impl std::error::Error for MoveError {}
