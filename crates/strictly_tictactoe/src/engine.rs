//! Game engine: turn order, move application and outcome tracking.
//!
//! [`GameState`] is the pure record of one game (board, context, outcome).
//! [`GameEngine`] drives a state by asking the [`MoveSource`] for the mark
//! to move, one ply per [`GameEngine::play_round`].

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet, describe};
use super::rules::{self, Outcome};
use super::{Board, Coord, GameContext, Mark};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// No line can be complete before this many plies.
const FIRST_DECISIVE_PLY: usize = 5;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No move played yet.
    NotStarted,
    /// At least one move played, no result.
    InProgress,
    /// A line was completed.
    Won,
    /// Board filled without a completed line.
    Drawn,
}

/// Supplies moves for one mark.
///
/// The human side of a game implements this in the outer input layer, which
/// is expected to hand over only free, on-board cells. Moves that break that
/// contract are rejected by the engine as invalid.
pub trait MoveSource: Send {
    /// Returns the cell to play for `mark`.
    fn next_move(
        &mut self,
        board: &Board,
        ctx: &GameContext,
        mark: Mark,
    ) -> Result<Coord, MoveError>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Plays a fixed list of moves in order.
///
/// Stands in for moves collected elsewhere: validated human input or a
/// recorded game.
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    name: String,
    moves: VecDeque<Coord>,
}

impl ScriptedMoves {
    /// Creates a source that plays `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(
        &mut self,
        _board: &Board,
        _ctx: &GameContext,
        mark: Mark,
    ) -> Result<Coord, MoveError> {
        self.moves
            .pop_front()
            .ok_or(MoveError::SourceExhausted(mark))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Complete record of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) context: GameContext,
    outcome: Outcome,
}

impl GameState {
    /// Empty board, round 1. `goes_first` means X opens.
    #[instrument]
    pub fn new(goes_first: bool) -> Self {
        Self {
            board: Board::new(),
            context: GameContext::new(goes_first),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the history, round counter and first-mover flag.
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Outcome as of the last ply.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Mark due to move.
    pub fn to_move(&self) -> Mark {
        self.context.to_move()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Outcome::Win(_) => Phase::Won,
            Outcome::Draw => Phase::Drawn,
            Outcome::InProgress if self.context.history().is_empty() => Phase::NotStarted,
            Outcome::InProgress => Phase::InProgress,
        }
    }

    /// Plays `coord` for the mark due to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has a result, and
    /// [`MoveError::OutOfBounds`] or [`MoveError::SquareOccupied`] for an
    /// invalid target. The state is unchanged on error.
    #[instrument(skip(self), fields(round = self.context.round()))]
    pub fn apply(&mut self, coord: Coord) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move();
        self.board.place(coord, mark)?;
        self.context.record(Move::new(mark, coord));

        if self.context.history().len() >= FIRST_DECISIVE_PLY {
            self.outcome = rules::detect(&self.board);
        }

        if cfg!(debug_assertions) {
            GameInvariants::check_all(self).map_err(|violations| {
                let message = describe(&violations);
                warn!(%message, "Postcondition failed");
                MoveError::InvariantViolation(message)
            })?;
        }

        debug!(%mark, %coord, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Rebuilds a game from recorded moves.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] if a move's mark is out of turn,
    /// plus any error [`GameState::apply`] reports.
    #[instrument(skip(moves), fields(plies = moves.len()))]
    pub fn replay(moves: &[Move], goes_first: bool) -> Result<Self, MoveError> {
        let mut state = Self::new(goes_first);
        for action in moves {
            if action.mark != state.to_move() {
                return Err(MoveError::WrongPlayer(action.mark));
            }
            state.apply(action.coord)?;
        }
        Ok(state)
    }

    /// Rebuilds a game from cells alone, marks alternating from the opener.
    ///
    /// # Errors
    ///
    /// Returns any error [`GameState::apply`] reports.
    #[instrument(skip(cells), fields(plies = cells.len()))]
    pub fn replay_cells(cells: &[Coord], goes_first: bool) -> Result<Self, MoveError> {
        let mut state = Self::new(goes_first);
        for &coord in cells {
            state.apply(coord)?;
        }
        Ok(state)
    }

    /// Fresh state for the next game with the other mark opening.
    pub fn next_game(&self) -> Self {
        Self::new(!self.context.goes_first())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Runs one game at a time between two move sources.
pub struct GameEngine {
    state: GameState,
    x: Box<dyn MoveSource>,
    o: Box<dyn MoveSource>,
}

impl GameEngine {
    /// Creates an engine. `goes_first` means X opens the first game.
    #[instrument(skip(x, o), fields(x_player = x.name(), o_player = o.name()))]
    pub fn new(x: Box<dyn MoveSource>, o: Box<dyn MoveSource>, goes_first: bool) -> Self {
        Self {
            state: GameState::new(goes_first),
            x,
            o,
        }
    }

    /// Returns the current game record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game context.
    pub fn context(&self) -> &GameContext {
        self.state.context()
    }

    /// Outcome as of the last ply.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Name of the source playing `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.x.name(),
            Mark::O => self.o.name(),
        }
    }

    /// Plays one ply for the mark due to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has a result, the move
    /// source's error if it cannot produce a move, and the board's error if
    /// the produced move is invalid.
    #[instrument(skip(self), fields(round = self.state.context.round()))]
    pub fn play_round(&mut self) -> Result<Outcome, MoveError> {
        if self.state.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.state.to_move();
        let source = match mark {
            Mark::X => self.x.as_mut(),
            Mark::O => self.o.as_mut(),
        };
        let coord = source.next_move(&self.state.board, &self.state.context, mark)?;

        let outcome = self.state.apply(coord).inspect_err(|e| {
            if e.is_invalid_move() {
                warn!(player = source.name(), %mark, %coord, error = %e, "Move source broke contract");
            }
        })?;

        match outcome {
            Outcome::Win(win) => {
                info!(winner = source.name(), %mark, line = %win.line, "Game won");
            }
            Outcome::Draw => info!("Game drawn"),
            Outcome::InProgress => {}
        }
        Ok(outcome)
    }

    /// Plays rounds until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`GameEngine::play_round`].
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Outcome, MoveError> {
        while !self.state.outcome.is_terminal() {
            self.play_round()?;
        }
        Ok(self.state.outcome)
    }

    /// Clears the board, history and round counter and swaps the opener.
    #[instrument(skip(self))]
    pub fn reset_for_next_game(&mut self) {
        self.state = self.state.next_game();
        info!(first = %self.state.context.first_mover(), "Board reset for next game");
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("x", &self.x.name())
            .field("o", &self.o.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(x: &[Coord], o: &[Coord], goes_first: bool) -> GameEngine {
        GameEngine::new(
            Box::new(ScriptedMoves::new("x", x.iter().copied())),
            Box::new(ScriptedMoves::new("o", o.iter().copied())),
            goes_first,
        )
    }

    #[test]
    fn test_phases() {
        let mut engine = scripted(
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
            &[Coord::new(1, 0), Coord::new(1, 1)],
            true,
        );
        assert_eq!(engine.phase(), Phase::NotStarted);
        engine.play_round().unwrap();
        assert_eq!(engine.phase(), Phase::InProgress);
        assert_eq!(engine.play_game().unwrap().winner(), Some(Mark::X));
        assert_eq!(engine.phase(), Phase::Won);
        assert_eq!(engine.play_round(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_occupied_move_rejected_without_change() {
        let mut engine = scripted(&[Coord::CENTER], &[Coord::CENTER], true);
        engine.play_round().unwrap();
        let before = engine.state().clone();
        assert_eq!(
            engine.play_round(),
            Err(MoveError::SquareOccupied(Coord::CENTER))
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_exhausted_source() {
        let mut engine = scripted(&[], &[], false);
        assert_eq!(engine.play_round(), Err(MoveError::SourceExhausted(Mark::O)));
    }

    #[test]
    fn test_o_opens_when_not_goes_first() {
        let mut engine = scripted(&[Coord::new(2, 2)], &[Coord::CENTER], false);
        engine.play_round().unwrap();
        assert_eq!(engine.board().get(Coord::CENTER), crate::Cell::Occupied(Mark::O));
        assert_eq!(engine.context().to_move(), Mark::X);
    }

    #[test]
    fn test_reset_toggles_first_mover() {
        let mut engine = scripted(&[Coord::CENTER], &[], true);
        engine.play_round().unwrap();
        engine.reset_for_next_game();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.context().round(), 1);
        assert!(engine.context().history().is_empty());
        assert_eq!(engine.context().first_mover(), Mark::O);
    }

    #[test]
    fn test_replay_rejects_wrong_mark() {
        let moves = [Move::new(Mark::O, Coord::CENTER)];
        assert_eq!(
            GameState::replay(&moves, true),
            Err(MoveError::WrongPlayer(Mark::O))
        );
    }

    #[test]
    fn test_apply_after_end_is_game_over() {
        let mut state = GameState::replay_cells(
            &[
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(0, 2),
            ],
            true,
        )
        .unwrap();
        assert_eq!(state.phase(), Phase::Won);
        assert_eq!(state.apply(Coord::new(2, 2)), Err(MoveError::GameOver));
    }
}
