//! Entries of the scripted decision tables.

use super::candidates::{extend_cell, fork_cells, pick};
use super::super::{Board, Coord, Mark};
use rand::Rng;

/// Why a cell was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Reason {
    /// Completes one of our lines.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Opens two threats at once.
    Fork,
    /// Adds a second mark to a line holding one of ours and two blanks.
    Extend,
    /// A fixed entry of the opening tables.
    Scripted,
    /// Any free cell.
    Random,
}

/// A chosen cell with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Decision {
    /// Target cell, always free.
    pub coord: Coord,
    /// Rule that chose it.
    pub reason: Reason,
}

/// One step of a scripted plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tactic {
    /// Play a fork intersection if one exists.
    Fork,
    /// Play into a line with one of our marks and two blanks.
    Extend,
    /// Any free cell of the list, chosen uniformly.
    AnyOf(Vec<Coord>),
    /// The first free cell of the list.
    FirstOf(Vec<Coord>),
}

impl Tactic {
    /// Single fixed target.
    pub fn cell(coord: Coord) -> Self {
        Tactic::FirstOf(vec![coord])
    }

    /// Applies the tactic; `None` when it has nothing playable.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Option<Decision> {
        let playable = |coord: &Coord| coord.is_on_board() && !board.is_occupied(*coord);
        match self {
            Tactic::Fork => {
                pick(&fork_cells(board, mark), rng).map(|c| Decision::new(c, Reason::Fork))
            }
            Tactic::Extend => extend_cell(board, mark).map(|c| Decision::new(c, Reason::Extend)),
            Tactic::AnyOf(cells) => {
                let free: Vec<Coord> = cells.iter().copied().filter(playable).collect();
                pick(&free, rng).map(|c| Decision::new(c, Reason::Scripted))
            }
            Tactic::FirstOf(cells) => cells
                .iter()
                .copied()
                .find(playable)
                .map(|c| Decision::new(c, Reason::Scripted)),
        }
    }
}

/// Resolves tactics in order, returning the first that yields a cell.
pub fn first_playable<R: Rng + ?Sized>(
    tactics: &[Tactic],
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Option<Decision> {
    tactics
        .iter()
        .find_map(|tactic| tactic.resolve(board, mark, rng))
}
