//! Rebuilds a game from a recorded list of cells.

use derive_more::{Display, From};
use strictly_tictactoe::{Coord, GameState, MoveError, Outcome, ParseCoordError};
use tracing::instrument;

/// Error replaying a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ReplayError {
    /// A cell could not be parsed.
    #[display("{}", _0)]
    Parse(ParseCoordError),
    /// A cell could not be played.
    #[display("Move {} rejected: {}", ply, error)]
    #[from(ignore)]
    Move {
        /// One-based ply that failed.
        ply: usize,
        /// Why the engine rejected it.
        error: MoveError,
    },
}

impl std::error::Error for ReplayError {}

/// Splits whitespace- or semicolon-separated cells.
///
/// Each cell is one-based `row,col` or a cell number 1-9.
pub fn parse_moves(input: &str) -> Result<Vec<Coord>, ReplayError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Coord>().map_err(ReplayError::from))
        .collect()
}

/// Plays `cells` in order, marks alternating from the opener.
///
/// Moves after the game has ended are rejected.
#[instrument(skip(cells), fields(plies = cells.len()))]
pub fn replay(cells: &[Coord], x_first: bool) -> Result<GameState, ReplayError> {
    let mut state = GameState::new(x_first);
    for (i, &coord) in cells.iter().enumerate() {
        state
            .apply(coord)
            .map_err(|error| ReplayError::Move { ply: i + 1, error })?;
    }
    Ok(state)
}

/// Board followed by a one-line status.
pub fn render(state: &GameState) -> String {
    let status = match state.outcome() {
        Outcome::InProgress => format!(
            "Round {}, {} to move",
            state.context().round(),
            state.to_move()
        ),
        outcome => outcome.to_string(),
    };
    format!("{}\n\n{}", state.board(), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Mark;

    #[test]
    fn test_parse_mixed_forms() {
        let cells = parse_moves("1,1 5;3,3\n 9").unwrap();
        assert_eq!(
            cells,
            vec![Coord::new(0, 0), Coord::CENTER, Coord::new(2, 2), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_parse_rejects_off_board() {
        assert!(matches!(parse_moves("1,1 4,1"), Err(ReplayError::Parse(_))));
    }

    #[test]
    fn test_replay_reports_failing_ply() {
        let cells = parse_moves("1,1 1,1").unwrap();
        assert_eq!(
            replay(&cells, true),
            Err(ReplayError::Move {
                ply: 2,
                error: MoveError::SquareOccupied(Coord::new(0, 0)),
            })
        );
    }

    #[test]
    fn test_render_in_progress() {
        let state = replay(&parse_moves("5").unwrap(), false).unwrap();
        let text = render(&state);
        assert!(text.starts_with("1|2|3\n-+-+-\n4|O|6"));
        assert!(text.ends_with("Round 2, X to move"));
        assert_eq!(state.board().get(Coord::CENTER).mark(), Some(Mark::O));
    }
}
