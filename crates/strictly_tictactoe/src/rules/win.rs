//! Win and draw detection.

use super::super::{Board, Mark};
use super::line::{LineId, LineKind, check_win};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// Which line was completed.
    pub line: LineId,
    /// Who completed it.
    pub mark: Mark,
}

impl WinLine {
    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.line.kind()
    }

    /// Row or column number; `None` for diagonals.
    pub fn index(&self) -> Option<usize> {
        self.line.index()
    }
}

/// State of a game as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one free cell.
    InProgress,
    /// A line has been completed.
    Win(WinLine),
    /// Board full, no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(win) => Some(win.mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(win) => write!(f, "{} wins in {}", win.mark, win.line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Finds the first completed line in priority order.
///
/// Rows are scanned first, then columns, then the main and anti diagonals,
/// so a move completing two lines reports the higher-priority one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    LineId::ALL.into_iter().find_map(|line| {
        check_win(&board.line(line)).map(|mark| WinLine { line, mark })
    })
}

/// Evaluates the board.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Outcome {
    if let Some(win) = winning_line(board) {
        return Outcome::Win(win);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
