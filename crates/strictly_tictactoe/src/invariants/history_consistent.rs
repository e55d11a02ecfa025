//! History consistency: replaying the move list reproduces the board.

use super::super::Board;
use super::super::engine::GameState;
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty grid.
///
/// Every recorded move owns one occupied cell and no cell is filled without
/// a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for action in state.context().history() {
            if replayed.place(action.coord, action.mark).is_err() {
                return false;
            }
        }
        &replayed == state.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
