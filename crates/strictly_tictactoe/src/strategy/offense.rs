//! Hard-mode table for games the computer opened.
//!
//! Keyed on the round and on the zones of the first two moves. The
//! computer's own moves fall on the odd rounds.

use super::super::{Board, Coord, GameContext, Mark, Zone};
use super::tactic::Tactic;
use tracing::instrument;

/// Cells from which the opener can always force at least a draw.
pub const OPENING_CELLS: [Coord; 5] = [
    Coord::new(0, 0),
    Coord::new(0, 2),
    Coord::new(2, 0),
    Coord::new(2, 2),
    Coord::CENTER,
];

/// Scripted tactics for the current round, in priority order.
///
/// An empty list means the table has no entry; the caller falls back to the
/// generic rules.
#[instrument(skip(_board, ctx), fields(round = ctx.round()))]
pub fn tactics(_board: &Board, ctx: &GameContext, mark: Mark) -> Vec<Tactic> {
    let own_first = ctx.nth_move_of(mark, 0).map(|m| m.coord);
    let their_first = ctx.nth_move_of(mark.opponent(), 0).map(|m| m.coord);

    match ctx.round() {
        1 => vec![Tactic::AnyOf(OPENING_CELLS.to_vec())],
        3 => match (own_first, their_first) {
            (Some(own), Some(theirs)) => round_three(own, theirs),
            _ => Vec::new(),
        },
        5 => {
            let mut plan = vec![Tactic::Fork];
            if their_first.is_some_and(|c| c.zone() == Zone::Corner) {
                plan.push(Tactic::FirstOf(Coord::CORNERS.to_vec()));
            }
            plan
        }
        _ => Vec::new(),
    }
}

/// Second move, given our opening and the reply.
fn round_three(own: Coord, theirs: Coord) -> Vec<Tactic> {
    let tactic = match (own.zone(), theirs.zone()) {
        (Zone::Center, Zone::Corner) => Tactic::cell(theirs.opposite()),
        (Zone::Center, _) => Tactic::AnyOf(Coord::CORNERS.to_vec()),
        (Zone::Corner, Zone::Center) => Tactic::cell(own.mirror_row()),
        (Zone::Corner, Zone::Corner) => Tactic::AnyOf(Coord::CORNERS.to_vec()),
        (Zone::Corner, Zone::Edge) => {
            // Take the corner on whichever of our lines the reply left open.
            if theirs == Coord::new(1, own.col()) {
                Tactic::cell(own.mirror_col())
            } else {
                Tactic::cell(own.mirror_row())
            }
        }
        (Zone::Edge, _) => return Vec::new(),
    };
    vec![tactic]
}
