//! Alternating turns: marks alternate starting with the first mover.

use super::super::engine::GameState;
use super::Invariant;

/// Invariant: the history alternates marks, opening with the first mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let ctx = state.context();
        let history = ctx.history();

        if history.first().is_some_and(|m| m.mark != ctx.first_mover()) {
            return false;
        }

        history.windows(2).all(|pair| pair[0].mark != pair[1].mark)
    }

    fn description() -> &'static str {
        "Marks alternate, starting with the first mover"
    }
}
