//! Tests for the game engine driving move sources.

use strictly_tictactoe::{
    ComputerPlayer, Coord, Difficulty, GameEngine, GameState, Mark, MoveError, Outcome, Phase,
    ScriptedMoves,
};

fn computers(seed: u64, x: Difficulty, o: Difficulty, goes_first: bool) -> GameEngine {
    GameEngine::new(
        Box::new(ComputerPlayer::seeded("x", x, seed)),
        Box::new(ComputerPlayer::seeded("o", o, seed.wrapping_add(1))),
        goes_first,
    )
}

#[test]
fn test_scripted_draw() {
    let x = ScriptedMoves::new(
        "x",
        [
            Coord::new(0, 0),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ],
    );
    let o = ScriptedMoves::new(
        "o",
        [Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 0)],
    );
    let mut engine = GameEngine::new(Box::new(x), Box::new(o), true);
    assert_eq!(engine.play_game(), Ok(Outcome::Draw));
    assert_eq!(engine.phase(), Phase::Drawn);
    assert_eq!(engine.context().round(), 10);
}

#[test]
fn test_computer_games_finish() {
    for seed in 0..40 {
        for x in [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard] {
            let mut engine = computers(seed, x, Difficulty::Hard, seed % 2 == 0);
            let outcome = engine.play_game().unwrap();
            assert!(outcome.is_terminal());
            assert!(engine.context().history().len() >= 5);
        }
    }
}

#[test]
fn test_reset_then_replay_matches() {
    let mut engine = computers(7, Difficulty::Hard, Difficulty::Intermediate, true);
    engine.play_game().unwrap();
    let finished = engine.state().clone();

    let replayed = GameState::replay(finished.context().history(), true).unwrap();
    assert_eq!(replayed, finished);

    engine.reset_for_next_game();
    assert_eq!(engine.phase(), Phase::NotStarted);
    assert_eq!(engine.context().first_mover(), Mark::O);
    assert_eq!(engine.context().round(), 1);

    engine.play_game().unwrap();
    assert_eq!(engine.context().history()[0].mark, Mark::O);
}

#[test]
fn test_play_after_game_over() {
    let mut engine = computers(3, Difficulty::Easy, Difficulty::Easy, true);
    engine.play_game().unwrap();
    assert_eq!(engine.play_round(), Err(MoveError::GameOver));
}

#[test]
fn test_state_serializes() {
    let mut engine = computers(11, Difficulty::Hard, Difficulty::Hard, false);
    engine.play_round().unwrap();
    engine.play_round().unwrap();
    let json = serde_json::to_string(engine.state()).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, engine.state());
}
