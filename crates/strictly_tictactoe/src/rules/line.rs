//! Lines and the pure predicates evaluated over them.

use super::super::board::Line;
use super::super::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};

/// The shape of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// One of the 8 winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    /// Row 0-2.
    Row(usize),
    /// Column 0-2.
    Column(usize),
    /// (0,0), (1,1), (2,2).
    MainDiagonal,
    /// (0,2), (1,1), (2,0).
    AntiDiagonal,
}

impl LineId {
    /// All lines in scan order: rows, columns, main diagonal, anti diagonal.
    pub const ALL: [LineId; 8] = [
        LineId::Row(0),
        LineId::Row(1),
        LineId::Row(2),
        LineId::Column(0),
        LineId::Column(1),
        LineId::Column(2),
        LineId::MainDiagonal,
        LineId::AntiDiagonal,
    ];

    /// Kind of line.
    pub fn kind(self) -> LineKind {
        match self {
            LineId::Row(_) => LineKind::Row,
            LineId::Column(_) => LineKind::Column,
            LineId::MainDiagonal => LineKind::MainDiagonal,
            LineId::AntiDiagonal => LineKind::AntiDiagonal,
        }
    }

    /// Row or column number; `None` for diagonals.
    pub fn index(self) -> Option<usize> {
        match self {
            LineId::Row(i) | LineId::Column(i) => Some(i),
            LineId::MainDiagonal | LineId::AntiDiagonal => None,
        }
    }

    /// The coordinates along the line, in order.
    pub fn cells(self) -> [Coord; 3] {
        match self {
            LineId::Row(r) => std::array::from_fn(|c| Coord::new(r, c)),
            LineId::Column(c) => std::array::from_fn(|r| Coord::new(r, c)),
            LineId::MainDiagonal => std::array::from_fn(|i| Coord::new(i, i)),
            LineId::AntiDiagonal => std::array::from_fn(|i| Coord::new(i, 2 - i)),
        }
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineId::Row(i) => write!(f, "row {}", i + 1),
            LineId::Column(i) => write!(f, "column {}", i + 1),
            LineId::MainDiagonal => write!(f, "the main diagonal"),
            LineId::AntiDiagonal => write!(f, "the anti diagonal"),
        }
    }
}

/// How many of each cell state a line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    /// Empty cells.
    pub empty: usize,
    /// Cells holding X.
    pub x: usize,
    /// Cells holding O.
    pub o: usize,
}

impl LineCounts {
    /// Count for one mark.
    pub fn of(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Tallies the cells of a line.
pub fn count_by(line: &Line) -> LineCounts {
    line.iter().fold(LineCounts::default(), |mut counts, cell| {
        match cell {
            Cell::Empty => counts.empty += 1,
            Cell::Occupied(Mark::X) => counts.x += 1,
            Cell::Occupied(Mark::O) => counts.o += 1,
        }
        counts
    })
}

/// Returns the mark filling all three cells, if any.
pub fn check_win(line: &Line) -> Option<Mark> {
    match line {
        [Cell::Occupied(a), Cell::Occupied(b), Cell::Occupied(c)] if a == b && b == c => Some(*a),
        _ => None,
    }
}

/// Exactly one `mark` and two blanks.
pub fn has_two_blanks_one_mark(line: &Line, mark: Mark) -> bool {
    let counts = count_by(line);
    counts.empty == 2 && counts.of(mark) == 1
}

/// A line that could become one prong of a fork for `mark`.
///
/// Same predicate as [`has_two_blanks_one_mark`]; the difference is in how
/// callers combine it across two intersecting lines.
pub fn fork_branch(line: &Line, mark: Mark) -> bool {
    has_two_blanks_one_mark(line, mark)
}

/// Two of `mark` and one blank: the blank completes the line.
pub fn has_two_marks_one_blank(line: &Line, mark: Mark) -> bool {
    let counts = count_by(line);
    counts.empty == 1 && counts.of(mark) == 2
}
