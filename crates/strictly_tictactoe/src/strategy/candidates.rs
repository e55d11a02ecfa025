//! Candidate collection for move selection.
//!
//! Everything here is deterministic except [`pick`], the single place a
//! random choice between equally good cells is made.

use super::super::rules::{LineId, fork_branch, has_two_blanks_one_mark, has_two_marks_one_blank};
use super::super::{Board, Coord, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Uniformly picks one candidate.
pub fn pick<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Option<Coord> {
    candidates.choose(rng).copied()
}

/// Cells that complete a line for `mark`, in scan order, without duplicates.
#[instrument(skip(board))]
pub fn winning_cells(board: &Board, mark: Mark) -> Vec<Coord> {
    let mut cells = Vec::new();
    for line in LineId::ALL {
        if !has_two_marks_one_blank(&board.line(line), mark) {
            continue;
        }
        if let Some(blank) = first_free(board, line)
            && !cells.contains(&blank)
        {
            cells.push(blank);
        }
    }
    cells
}

/// Intersections of two fork branches for `mark` that are still free.
///
/// At most one branch is taken per family: the first qualifying row, the
/// first qualifying column, and each diagonal on its own.
#[instrument(skip(board))]
pub fn fork_cells(board: &Board, mark: Mark) -> Vec<Coord> {
    let branch = |line: LineId| fork_branch(&board.line(line), mark);

    let row = (0..3).find(|&r| branch(LineId::Row(r)));
    let col = (0..3).find(|&c| branch(LineId::Column(c)));
    let main = branch(LineId::MainDiagonal);
    let anti = branch(LineId::AntiDiagonal);

    let mut intersections = Vec::new();
    if let Some(r) = row {
        if let Some(c) = col {
            intersections.push(Coord::new(r, c));
        }
        if main {
            intersections.push(Coord::new(r, r));
        }
        if anti {
            intersections.push(Coord::new(r, 2 - r));
        }
    }
    if let Some(c) = col {
        if main {
            intersections.push(Coord::new(c, c));
        }
        if anti {
            intersections.push(Coord::new(2 - c, c));
        }
    }
    if main && anti {
        intersections.push(Coord::CENTER);
    }

    let mut cells: Vec<Coord> = Vec::with_capacity(intersections.len());
    for coord in intersections {
        if !board.is_occupied(coord) && !cells.contains(&coord) {
            cells.push(coord);
        }
    }
    cells
}

/// First free cell of the first line holding one `mark` and two blanks.
///
/// Lines are scanned rows, then columns, then diagonals.
#[instrument(skip(board))]
pub fn extend_cell(board: &Board, mark: Mark) -> Option<Coord> {
    LineId::ALL
        .into_iter()
        .find(|&line| has_two_blanks_one_mark(&board.line(line), mark))
        .and_then(|line| first_free(board, line))
}

fn first_free(board: &Board, line: LineId) -> Option<Coord> {
    line.cells()
        .into_iter()
        .find(|&coord| !board.is_occupied(coord))
}
