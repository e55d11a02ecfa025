//! The 3x3 board.

use super::action::MoveError;
use super::rules::LineId;
use super::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A run of three cells along a row, column or diagonal.
pub type Line = [Cell; 3];

/// 3x3 tic-tac-toe board.
///
/// Rows, columns and diagonals are views computed on demand; the grid is the
/// only stored state. A cell is written once per game and only cleared by
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `coord`, or `Empty` for off-board coordinates.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells
            .get(coord.row())
            .and_then(|row| row.get(coord.col()))
            .copied()
            .unwrap_or_default()
    }

    /// Checks if a cell holds a mark.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.get(coord).is_empty()
    }

    /// Places `mark` at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside the grid and
    /// [`MoveError::SquareOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), MoveError> {
        if !coord.is_on_board() {
            return Err(MoveError::OutOfBounds(coord));
        }
        if self.is_occupied(coord) {
            return Err(MoveError::SquareOccupied(coord));
        }
        self.cells[coord.row()][coord.col()] = Cell::Occupied(mark);
        Ok(())
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [Line; 3] {
        self.cells
    }

    /// The three columns, left to right.
    pub fn columns(&self) -> [Line; 3] {
        std::array::from_fn(|c| std::array::from_fn(|r| self.cells[r][c]))
    }

    /// (0,0), (1,1), (2,2).
    pub fn main_diagonal(&self) -> Line {
        std::array::from_fn(|i| self.cells[i][i])
    }

    /// (0,2), (1,1), (2,0).
    pub fn anti_diagonal(&self) -> Line {
        std::array::from_fn(|i| self.cells[i][2 - i])
    }

    /// The cells along any line.
    pub fn line(&self, id: LineId) -> Line {
        id.cells().map(|coord| self.get(coord))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }
}

impl std::fmt::Display for Board {
    /// Rows separated by `-+-+-`; empty cells show their cell number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", r * 3 + c + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
