//! Per-game context shared between the engine and move strategies.

use super::action::Move;
use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Move history, round counter and first-mover flag for one game.
///
/// Owned by the engine and handed to strategies by reference. A new game
/// gets a freshly constructed context; nothing is carried over except the
/// toggled first-mover flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    history: Vec<Move>,
    round: u8,
    goes_first: bool,
}

impl GameContext {
    /// Starts a context. `goes_first` means X plays the odd plies.
    #[instrument]
    pub fn new(goes_first: bool) -> Self {
        Self {
            history: Vec::with_capacity(9),
            round: 1,
            goes_first,
        }
    }

    /// Context for the following game: empty history, round 1, other mover first.
    #[instrument(skip(self))]
    pub fn next_game(&self) -> Self {
        Self::new(!self.goes_first)
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The ply about to be played, starting at 1.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// True if X moves first this game.
    pub fn goes_first(&self) -> bool {
        self.goes_first
    }

    /// Mark that plays the odd plies.
    pub fn first_mover(&self) -> Mark {
        if self.goes_first { Mark::X } else { Mark::O }
    }

    /// Mark due to play the current round.
    pub fn to_move(&self) -> Mark {
        if self.round % 2 == 1 {
            self.first_mover()
        } else {
            self.first_mover().opponent()
        }
    }

    /// Checks if `mark` opened this game.
    pub fn moved_first(&self, mark: Mark) -> bool {
        self.first_mover() == mark
    }

    /// The `n`-th move played by `mark` (0-based), if it has happened.
    pub fn nth_move_of(&self, mark: Mark, n: usize) -> Option<Move> {
        self.history
            .iter()
            .filter(|m| m.mark == mark)
            .nth(n)
            .copied()
    }

    /// Appends a move and advances the round.
    pub(crate) fn record(&mut self, action: Move) {
        self.history.push(action);
        self.round = self.round.saturating_add(1);
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_new_context() {
        let ctx = GameContext::new(false);
        assert_eq!(ctx.round(), 1);
        assert!(ctx.history().is_empty());
        assert_eq!(ctx.first_mover(), Mark::O);
        assert_eq!(ctx.to_move(), Mark::O);
    }

    #[test]
    fn test_record_advances() {
        let mut ctx = GameContext::new(true);
        ctx.record(Move::new(Mark::X, Coord::CENTER));
        ctx.record(Move::new(Mark::O, Coord::new(0, 0)));
        assert_eq!(ctx.round(), 3);
        assert_eq!(ctx.to_move(), Mark::X);
        assert_eq!(ctx.nth_move_of(Mark::O, 0).map(|m| m.coord), Some(Coord::new(0, 0)));
        assert_eq!(ctx.nth_move_of(Mark::O, 1), None);
    }

    #[test]
    fn test_next_game_toggles_and_clears() {
        let mut ctx = GameContext::new(true);
        ctx.record(Move::new(Mark::X, Coord::CENTER));
        let next = ctx.next_game();
        assert_eq!(next.round(), 1);
        assert!(next.history().is_empty());
        assert!(!next.goes_first());
    }
}
