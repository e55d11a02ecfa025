//! Batch of computer-vs-computer games.

use super::config::ArenaConfig;
use super::scoreboard::{PlayerStats, Scoreboard};
use strictly_tictactoe::{ComputerPlayer, Difficulty, GameEngine, MoveError};
use tracing::{debug, info, instrument};

/// Plays a configured number of games between two computer players.
#[derive(Debug, Clone, derive_new::new)]
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    /// Returns the configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Plays every game and returns the tallies.
    ///
    /// The opener alternates between games.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if a game cannot be completed.
    #[instrument(skip(self), fields(games = self.config.games()))]
    pub fn run(&self) -> Result<Scoreboard, MoveError> {
        let x_difficulty = *self.config.x_difficulty();
        let o_difficulty = *self.config.o_difficulty();
        let x_name = format!("X ({})", x_difficulty);
        let o_name = format!("O ({})", o_difficulty);

        let mut scores = Scoreboard::new(
            PlayerStats::new(x_name.clone(), x_difficulty),
            PlayerStats::new(o_name.clone(), o_difficulty),
        );
        let mut engine = GameEngine::new(
            Box::new(self.player(x_name, x_difficulty, 0)),
            Box::new(self.player(o_name, o_difficulty, 1)),
            *self.config.x_first(),
        );

        for game in 1..=*self.config.games() {
            let opener = engine.context().first_mover();
            let outcome = engine.play_game()?;
            debug!(game, %opener, %outcome, "Game finished");
            scores.record(outcome);
            engine.reset_for_next_game();
        }

        info!(
            x_wins = scores.x().wins(),
            o_wins = scores.o().wins(),
            draws = scores.x().draws(),
            "Arena finished"
        );
        Ok(scores)
    }

    fn player(&self, name: String, difficulty: Difficulty, offset: u64) -> ComputerPlayer {
        match self.config.seed() {
            Some(seed) => ComputerPlayer::seeded(name, difficulty, seed.wrapping_add(offset)),
            None => ComputerPlayer::new(name, difficulty),
        }
    }
}
