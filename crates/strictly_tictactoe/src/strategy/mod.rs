//! Computer move selection.
//!
//! Three tiers share one pipeline:
//!
//! - **Easy** plays any free cell.
//! - **Intermediate** wins or blocks when it can, and after round 3 looks for
//!   forks and lines to extend.
//! - **Hard** wins or blocks, then follows the opening tables in
//!   [`offense`] or [`defense`] depending on who moved first, then falls back
//!   to extending a line.
//!
//! Every path ends in a uniformly random free cell, so a move is always found
//! while the board has room.

pub mod candidates;
pub mod defense;
pub mod offense;
mod player;
pub mod tactic;

pub use player::ComputerPlayer;
pub use tactic::{Decision, Reason, Tactic};

use super::action::MoveError;
use super::{Board, Coord, GameContext, Mark};
use candidates::{extend_cell, fork_cells, pick, winning_cells};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Computer difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random free cell.
    Easy,
    /// Reactive: win, block, fork, extend.
    Intermediate,
    /// Reactive plus scripted openings.
    #[default]
    Hard,
}

/// Picks a cell for `mark` and reports the rule that chose it.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] if the board is full.
#[instrument(skip(board, ctx, rng), fields(round = ctx.round()))]
pub fn decide<R: Rng + ?Sized>(
    difficulty: Difficulty,
    mark: Mark,
    board: &Board,
    ctx: &GameContext,
    rng: &mut R,
) -> Result<Decision, MoveError> {
    let free = Coord::free_cells(board);
    if free.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    let planned = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Intermediate => intermediate(board, ctx, mark, rng),
        Difficulty::Hard => hard(board, ctx, mark, rng),
    };

    let decision = match planned {
        Some(decision) => decision,
        None => pick(&free, rng)
            .map(|coord| Decision::new(coord, Reason::Random))
            .ok_or(MoveError::NoLegalMove)?,
    };

    debug_assert!(!board.is_occupied(decision.coord));
    debug!(%difficulty, %mark, coord = %decision.coord, reason = %decision.reason, "Computer chose move");
    Ok(decision)
}

/// Picks a free cell for `mark`.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] if the board is full.
pub fn choose_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    mark: Mark,
    board: &Board,
    ctx: &GameContext,
    rng: &mut R,
) -> Result<Coord, MoveError> {
    decide(difficulty, mark, board, ctx, rng).map(|decision| decision.coord)
}

/// Completes our own line if possible, else blocks one of theirs.
///
/// Wins take the first cell in scan order; among several blocks one is
/// chosen at random.
pub fn win_or_block<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Decision> {
    if let Some(&coord) = winning_cells(board, mark).first() {
        return Some(Decision::new(coord, Reason::Win));
    }
    pick(&winning_cells(board, mark.opponent()), rng).map(|coord| Decision::new(coord, Reason::Block))
}

fn intermediate<R: Rng + ?Sized>(
    board: &Board,
    ctx: &GameContext,
    mark: Mark,
    rng: &mut R,
) -> Option<Decision> {
    if let Some(decision) = win_or_block(board, mark, rng) {
        return Some(decision);
    }
    if ctx.round() <= 3 {
        return None;
    }
    pick(&fork_cells(board, mark), rng)
        .map(|coord| Decision::new(coord, Reason::Fork))
        .or_else(|| extend_cell(board, mark).map(|coord| Decision::new(coord, Reason::Extend)))
}

fn hard<R: Rng + ?Sized>(
    board: &Board,
    ctx: &GameContext,
    mark: Mark,
    rng: &mut R,
) -> Option<Decision> {
    if let Some(decision) = win_or_block(board, mark, rng) {
        return Some(decision);
    }

    let plan = if ctx.moved_first(mark) {
        offense::tactics(board, ctx, mark)
    } else {
        defense::tactics(board, ctx, mark)
    };

    tactic::first_playable(&plan, board, mark, rng)
        .or_else(|| Tactic::Extend.resolve(board, mark, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    fn position(goes_first: bool, cells: &[Coord]) -> (Board, GameContext) {
        let mut board = Board::new();
        let mut ctx = GameContext::new(goes_first);
        for &coord in cells {
            let mark = ctx.to_move();
            board.place(coord, mark).unwrap();
            ctx.record(Move::new(mark, coord));
        }
        (board, ctx)
    }

    #[test]
    fn test_full_board_has_no_move() {
        let (board, ctx) = position(
            true,
            &[
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ],
        );
        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                choose_move(difficulty, Mark::O, &board, &ctx, &mut rng),
                Err(MoveError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_easy_is_random() {
        let (board, ctx) = position(true, &[Coord::new(0, 0), Coord::new(1, 1)]);
        let mut rng = StdRng::seed_from_u64(11);
        let decision = decide(Difficulty::Easy, Mark::X, &board, &ctx, &mut rng).unwrap();
        assert_eq!(decision.reason, Reason::Random);
        assert!(!board.is_occupied(decision.coord));
    }

    #[test]
    fn test_win_beats_block() {
        // X: (0,0) (0,1); O: (1,0) (1,1). O to move and both can finish.
        let (board, ctx) = position(
            true,
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)],
        );
        let mut rng = StdRng::seed_from_u64(2);
        for difficulty in [Difficulty::Intermediate, Difficulty::Hard] {
            let decision = decide(difficulty, Mark::O, &board, &ctx, &mut rng).unwrap();
            assert_eq!(decision, Decision::new(Coord::new(1, 2), Reason::Win));
        }
    }

    #[test]
    fn test_intermediate_early_rounds_skip_fork() {
        let (board, ctx) = position(true, &[Coord::new(0, 0)]);
        let mut rng = StdRng::seed_from_u64(4);
        let decision = decide(Difficulty::Intermediate, Mark::O, &board, &ctx, &mut rng).unwrap();
        assert_eq!(decision.reason, Reason::Random);
    }

    #[test]
    fn test_intermediate_takes_fork_after_round_three() {
        // X: (0,0) (2,0); O: (0,1) (1,0). Nothing to win or block; row 2 and
        // both diagonals are X branches.
        let (board, ctx) = position(
            true,
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(2, 0), Coord::new(1, 0)],
        );
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision =
                decide(Difficulty::Intermediate, Mark::X, &board, &ctx, &mut rng).unwrap();
            assert_eq!(decision.reason, Reason::Fork);
            assert!([Coord::new(2, 2), Coord::CENTER].contains(&decision.coord));
        }
    }

    #[test]
    fn test_hard_offense_opening() {
        let (board, ctx) = position(true, &[]);
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let coord = choose_move(Difficulty::Hard, Mark::X, &board, &ctx, &mut rng).unwrap();
            assert!(offense::OPENING_CELLS.contains(&coord));
        }
    }

    #[test]
    fn test_hard_defense_takes_centre() {
        let (board, ctx) = position(true, &[Coord::new(0, 0)]);
        let mut rng = StdRng::seed_from_u64(9);
        let decision = decide(Difficulty::Hard, Mark::O, &board, &ctx, &mut rng).unwrap();
        assert_eq!(decision, Decision::new(Coord::CENTER, Reason::Scripted));
    }

    #[test]
    fn test_hard_defense_centre_opening_round_four() {
        // X opened centre, O took (0,0), X took (2,2).
        let (board, ctx) = position(true, &[Coord::CENTER, Coord::new(0, 0), Coord::new(2, 2)]);
        let mut rng = StdRng::seed_from_u64(10);
        let decision = decide(Difficulty::Hard, Mark::O, &board, &ctx, &mut rng).unwrap();
        assert_eq!(decision.reason, Reason::Scripted);
        assert!([Coord::new(0, 2), Coord::new(2, 0)].contains(&decision.coord));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("intermediate".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
