//! Tests for win and draw detection through the public game state.

use strictly_tictactoe::{
    Board, Coord, GameState, LineId, LineKind, Mark, Outcome, Phase, detect, winning_line,
};

fn play(cells: &[Coord], goes_first: bool) -> GameState {
    GameState::replay_cells(cells, goes_first).expect("legal sequence")
}

#[test]
fn test_every_line_is_detected() {
    for line in LineId::ALL {
        let mut board = Board::new();
        for coord in line.cells() {
            board.place(coord, Mark::O).unwrap();
        }
        let win = winning_line(&board).expect("line should win");
        assert_eq!(win.line, line);
        assert_eq!(win.mark, Mark::O);
    }
}

#[test]
fn test_column_win_reports_index() {
    // X fills column 2 while O wanders.
    let state = play(
        &[
            Coord::new(0, 2),
            Coord::new(0, 0),
            Coord::new(1, 2),
            Coord::new(1, 0),
            Coord::new(2, 2),
        ],
        true,
    );
    let Outcome::Win(win) = state.outcome() else {
        panic!("X should have won, got {}", state.outcome());
    };
    assert_eq!(win.kind(), LineKind::Column);
    assert_eq!(win.index(), Some(2));
    assert_eq!(win.mark, Mark::X);
}

#[test]
fn test_anti_diagonal_win_for_o() {
    let state = play(
        &[
            Coord::new(0, 2),
            Coord::new(0, 0),
            Coord::CENTER,
            Coord::new(0, 1),
            Coord::new(2, 0),
        ],
        false,
    );
    assert_eq!(state.outcome().winner(), Some(Mark::O));
    assert_eq!(
        winning_line(state.board()).map(|w| w.line),
        Some(LineId::AntiDiagonal)
    );
}

#[test]
fn test_nine_plies_without_line_is_draw() {
    let state = play(
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
        true,
    );
    assert_eq!(state.outcome(), Outcome::Draw);
    assert_eq!(state.phase(), Phase::Drawn);
    assert!(state.board().is_full());
}

#[test]
fn test_short_game_stays_in_progress() {
    let state = play(&[Coord::new(0, 0), Coord::new(1, 1), Coord::new(0, 1)], true);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(detect(state.board()), Outcome::InProgress);
}

#[test]
fn test_outcome_serializes() {
    let state = play(
        &[
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(0, 2),
        ],
        true,
    );
    let json = serde_json::to_string(&state.outcome()).unwrap();
    let back: Outcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state.outcome());
}
