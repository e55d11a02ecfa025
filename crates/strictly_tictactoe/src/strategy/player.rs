//! Computer player backed by the move strategy.

use super::{Decision, Difficulty, decide};
use crate::action::MoveError;
use crate::engine::MoveSource;
use crate::{Board, Coord, GameContext, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// A computer opponent at a fixed difficulty.
///
/// Owns its random generator so a seeded player replays the same choices.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a player seeded from the operating system.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a player with a reproducible generator.
    #[instrument(skip(name))]
    pub fn seeded(name: impl Into<String>, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: name.into(),
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a move and the rule behind it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] if the board is full.
    pub fn decide(
        &mut self,
        board: &Board,
        ctx: &GameContext,
        mark: Mark,
    ) -> Result<Decision, MoveError> {
        decide(self.difficulty, mark, board, ctx, &mut self.rng)
    }
}

impl MoveSource for ComputerPlayer {
    #[instrument(skip(self, board, ctx), fields(player = %self.name, difficulty = %self.difficulty))]
    fn next_move(
        &mut self,
        board: &Board,
        ctx: &GameContext,
        mark: Mark,
    ) -> Result<Coord, MoveError> {
        let decision = self.decide(board, ctx, mark)?;
        debug!(coord = %decision.coord, reason = %decision.reason, "Computer move");
        Ok(decision.coord)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
