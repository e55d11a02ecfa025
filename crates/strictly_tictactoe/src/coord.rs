//! Board coordinates and the geometry the strategy reasons about.

use super::board::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) position on the board, zero-based.
///
/// Coordinates built with [`Coord::new`] are not range checked; the board
/// rejects off-board coordinates when a mark is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Where a cell sits relative to the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Zone {
    /// The middle cell.
    Center,
    /// One of the four corners.
    Corner,
    /// One of the four cells between corners.
    Edge,
}

impl Coord {
    /// The middle cell.
    pub const CENTER: Coord = Coord::new(1, 1);

    /// Corners in fixed scan order.
    pub const CORNERS: [Coord; 4] = [
        Coord::new(0, 0),
        Coord::new(0, 2),
        Coord::new(2, 0),
        Coord::new(2, 2),
    ];

    /// Edges in fixed scan order.
    pub const EDGES: [Coord; 4] = [
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(1, 2),
        Coord::new(2, 1),
    ];

    /// All 9 cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Creates a coordinate without range checking.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, returning `None` when it falls off the board.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        let coord = Self::new(row, col);
        coord.is_on_board().then_some(coord)
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Checks that both indices are in 0..3.
    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Classifies the cell as centre, corner or edge.
    pub fn zone(self) -> Zone {
        match (self.row == 1, self.col == 1) {
            (true, true) => Zone::Center,
            (false, false) => Zone::Corner,
            _ => Zone::Edge,
        }
    }

    /// Reflection across the middle row: same column, opposite row.
    pub fn mirror_row(self) -> Self {
        Self::new(2usize.saturating_sub(self.row), self.col)
    }

    /// Reflection across the middle column: same row, opposite column.
    pub fn mirror_col(self) -> Self {
        Self::new(self.row, 2usize.saturating_sub(self.col))
    }

    /// Point reflection through the centre.
    pub fn opposite(self) -> Self {
        self.mirror_row().mirror_col()
    }

    /// Human-facing label, one-based.
    #[instrument]
    pub fn label(self) -> String {
        format!("row {}, column {}", self.row + 1, self.col + 1)
    }

    /// Unoccupied cells in row-major order.
    #[instrument(skip(board))]
    pub fn free_cells(board: &Board) -> Vec<Coord> {
        Self::ALL
            .iter()
            .copied()
            .filter(|coord| !board.is_occupied(*coord))
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// Error parsing a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid coordinate '{}': expected 'row,col' with values 1-3 or a cell number 1-9", _0)]
pub struct ParseCoordError(pub String);

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses one-based `row,col` or a cell number 1-9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let trimmed = s.trim();

        if let Some((row, col)) = trimmed.split_once(',') {
            let row: usize = row.trim().parse().map_err(|_| err())?;
            let col: usize = col.trim().parse().map_err(|_| err())?;
            return match (row.checked_sub(1), col.checked_sub(1)) {
                (Some(r), Some(c)) => Coord::try_new(r, c).ok_or_else(err),
                _ => Err(err()),
            };
        }

        let number: usize = trimmed.parse().map_err(|_| err())?;
        number
            .checked_sub(1)
            .and_then(Coord::from_index)
            .ok_or_else(err)
    }
}
