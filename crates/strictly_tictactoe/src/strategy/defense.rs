//! Hard-mode table for games the opponent opened.
//!
//! Keyed on the zone of the opponent's opening and on the round; the
//! computer's own moves fall on the even rounds.

use super::super::rules::count_by;
use super::super::{Board, Coord, GameContext, Mark, Zone};
use super::tactic::Tactic;
use tracing::instrument;

/// Scripted tactics for the current round, in priority order.
///
/// An empty list means the table has no entry; the caller falls back to the
/// generic rules.
#[instrument(skip(board, ctx), fields(round = ctx.round()))]
pub fn tactics(board: &Board, ctx: &GameContext, mark: Mark) -> Vec<Tactic> {
    let opponent = mark.opponent();
    let Some(opening) = ctx.nth_move_of(opponent, 0).map(|m| m.coord) else {
        return Vec::new();
    };
    let their = |n| ctx.nth_move_of(opponent, n).map(|m| m.coord);

    match (ctx.round(), opening.zone()) {
        (2, Zone::Center) => vec![Tactic::AnyOf(Coord::CORNERS.to_vec())],
        (2, _) => vec![Tactic::cell(Coord::CENTER)],

        (4, Zone::Center) => vec![Tactic::AnyOf(Coord::CORNERS.to_vec())],
        (4, Zone::Corner) => vec![
            Tactic::cell(opening.opposite()),
            Tactic::AnyOf(Coord::EDGES.to_vec()),
        ],
        (4, Zone::Edge) => match their(1) {
            Some(second) => edge_opening_reply(opening, second),
            None => Vec::new(),
        },

        (6, Zone::Center) => match their(2) {
            Some(third) => mirror_third_move(board, third),
            None => Vec::new(),
        },
        (6, Zone::Corner) => vec![Tactic::Extend, Tactic::AnyOf(Coord::CORNERS.to_vec())],
        (6, Zone::Edge) => vec![Tactic::Extend],

        _ => Vec::new(),
    }
}

/// Round 4 after an edge opening; we hold the centre.
fn edge_opening_reply(opening: Coord, second: Coord) -> Vec<Tactic> {
    let (r, c) = (opening.row(), opening.col());
    let tactic = match second.zone() {
        Zone::Edge if r == 1 => Tactic::AnyOf(vec![Coord::new(0, c), Coord::new(2, c)]),
        Zone::Edge => Tactic::AnyOf(vec![Coord::new(r, 0), Coord::new(r, 2)]),
        _ if r == 1 => Tactic::cell(Coord::new(second.row(), c)),
        _ => Tactic::cell(Coord::new(r, second.col())),
    };
    vec![tactic]
}

/// Round 6 after a centre opening: reflect the opponent's third move along
/// whichever of its lines has a single blank left.
fn mirror_third_move(board: &Board, third: Coord) -> Vec<Tactic> {
    let row = board.rows()[third.row()];
    let col = board.columns()[third.col()];
    if count_by(&row).empty == 1 {
        vec![Tactic::cell(third.mirror_col())]
    } else if count_by(&col).empty == 1 {
        vec![Tactic::cell(third.mirror_row())]
    } else {
        Vec::new()
    }
}
