//! Round counter: one round per recorded ply.

use super::super::engine::GameState;
use super::Invariant;

/// Invariant: the round counter is the number of recorded plies plus one.
pub struct RoundCounterInvariant;

impl Invariant<GameState> for RoundCounterInvariant {
    fn holds(state: &GameState) -> bool {
        let ctx = state.context();
        usize::from(ctx.round()) == ctx.history().len() + 1
    }

    fn description() -> &'static str {
        "Round counter equals plies played plus one"
    }
}
