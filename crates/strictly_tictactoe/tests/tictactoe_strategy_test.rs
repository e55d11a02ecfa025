//! Tests for computer move selection across difficulty tiers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::strategy::candidates::fork_cells;
use strictly_tictactoe::{
    Board, Coord, Difficulty, GameState, Mark, Reason, choose_move, decide,
};
use strum::IntoEnumIterator;

fn position(cells: &[Coord], goes_first: bool) -> GameState {
    GameState::replay_cells(cells, goes_first).expect("legal sequence")
}

#[test]
fn test_never_picks_occupied_cell() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(seed % 2 == 0);
        while !state.outcome().is_terminal() {
            let mark = state.to_move();
            for difficulty in Difficulty::iter() {
                let coord =
                    choose_move(difficulty, mark, state.board(), state.context(), &mut rng)
                        .unwrap();
                assert!(
                    !state.board().is_occupied(coord),
                    "{difficulty} chose occupied {coord} in round {}",
                    state.context().round()
                );
            }
            let coord =
                choose_move(Difficulty::Easy, mark, state.board(), state.context(), &mut rng)
                    .unwrap();
            state.apply(coord).unwrap();
        }
    }
}

#[test]
fn test_completes_own_row() {
    // O: (0,0) (0,1); X: (2,2) (1,0). O to move.
    let state = position(
        &[Coord::new(0, 0), Coord::new(2, 2), Coord::new(0, 1), Coord::new(1, 0)],
        false,
    );
    assert_eq!(state.to_move(), Mark::O);
    let mut rng = StdRng::seed_from_u64(3);
    for difficulty in [Difficulty::Intermediate, Difficulty::Hard] {
        let decision = decide(difficulty, Mark::O, state.board(), state.context(), &mut rng).unwrap();
        assert_eq!(decision.coord, Coord::new(0, 2));
        assert_eq!(decision.reason, Reason::Win);
    }
}

#[test]
fn test_blocks_opponent_row() {
    // X: (0,0) (0,1); O: (2,2). O to move.
    let state = position(&[Coord::new(0, 0), Coord::new(2, 2), Coord::new(0, 1)], true);
    let mut rng = StdRng::seed_from_u64(5);
    for difficulty in [Difficulty::Intermediate, Difficulty::Hard] {
        let decision = decide(difficulty, Mark::O, state.board(), state.context(), &mut rng).unwrap();
        assert_eq!(decision.coord, Coord::new(0, 2));
        assert_eq!(decision.reason, Reason::Block);
    }
}

#[test]
fn test_hard_answers_edge_opening_with_centre() {
    let state = position(&[Coord::new(0, 1)], true);
    let mut rng = StdRng::seed_from_u64(8);
    let coord = choose_move(Difficulty::Hard, Mark::O, state.board(), state.context(), &mut rng)
        .unwrap();
    assert_eq!(coord, Coord::CENTER);
}

#[test]
fn test_fork_is_row_column_intersection() {
    let mut board = Board::new();
    board.place(Coord::new(0, 1), Mark::X).unwrap();
    board.place(Coord::new(1, 0), Mark::X).unwrap();
    board.place(Coord::new(2, 2), Mark::O).unwrap();
    assert_eq!(fork_cells(&board, Mark::X), vec![Coord::new(0, 0)]);
}
