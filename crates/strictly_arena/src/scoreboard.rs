//! Per-player results over a batch of games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Difficulty, Mark, Outcome};
use tracing::instrument;

/// Result of one game from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameResult {
    /// Completed a line.
    Win,
    /// Opponent completed a line.
    Loss,
    /// Board filled with no line.
    Draw,
}

impl GameResult {
    /// Reads the result for `mark` off a finished game.
    pub fn for_mark(outcome: Outcome, mark: Mark) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(Self::Draw),
            Outcome::Win(win) if win.mark == mark => Some(Self::Win),
            Outcome::Win(_) => Some(Self::Loss),
        }
    }
}

/// Win and loss tallies for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerStats {
    /// Display name.
    name: String,
    /// Difficulty the player ran at.
    difficulty: Difficulty,
    /// Games won.
    #[new(default)]
    wins: u32,
    /// Games lost.
    #[new(default)]
    losses: u32,
    /// Games finished.
    #[new(default)]
    played: u32,
}

impl PlayerStats {
    /// Games neither won nor lost.
    pub fn draws(&self) -> u32 {
        self.played.saturating_sub(self.wins + self.losses)
    }

    /// Adds one finished game.
    pub fn record(&mut self, result: GameResult) {
        self.played += 1;
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => {}
        }
    }
}

/// Tallies for both seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Scoreboard {
    /// The player holding X.
    x: PlayerStats,
    /// The player holding O.
    o: PlayerStats,
}

impl Scoreboard {
    /// Stats for the player holding `mark`.
    pub fn player(&self, mark: Mark) -> &PlayerStats {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Records a finished game for both players. Unfinished games are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        if let Some(result) = GameResult::for_mark(outcome, Mark::X) {
            self.x.record(result);
        }
        if let Some(result) = GameResult::for_mark(outcome, Mark::O) {
            self.o.record(result);
        }
    }

    /// Games recorded.
    pub fn games(&self) -> u32 {
        self.x.played
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<16} {:<13} {:>6} {:>6} {:>6} {:>6}",
            "Player", "Difficulty", "Played", "Won", "Lost", "Drawn"
        )?;
        for stats in [&self.x, &self.o] {
            writeln!(
                f,
                "{:<16} {:<13} {:>6} {:>6} {:>6} {:>6}",
                stats.name,
                stats.difficulty.to_string(),
                stats.played,
                stats.wins,
                stats.losses,
                stats.draws()
            )?;
        }
        Ok(())
    }
}
