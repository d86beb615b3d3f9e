use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    config::EXPLORATION,
    error::{Result, SearchError},
    game::GameState,
    rollout::normalize,
    table::{Edge, Round, Table},
    ucb::best_child,
};

/// Descend from `root` through fully expanded states and expand the first
/// untried action found. Returns the expanded state, or the terminal state
/// the descent ran into.
pub fn tree_policy<S: GameState, R: Rng + ?Sized>(
    root: &S,
    table: &mut Table<S>,
    round: Round,
    rng: &mut R,
) -> Result<S> {
    let mut state = root.clone();
    let mut depth = 0;

    while !state.terminal_test() {
        let actions = state.actions();
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let tried = table.find_tried(&state);
        let untried: Vec<_> = actions
            .into_iter()
            .filter(|action| !tried.contains(action))
            .collect();

        if let Some(&action) = untried.choose(rng) {
            trace!("round {round}: expanding {action:?} at depth {depth}");
            return Ok(expand(state, action, table, round));
        }

        // Fully expanded, charge the visit now and keep descending.
        let action = best_child(&state, table, EXPLORATION, rng)?;
        table.touch(&state, action, round)?;
        state = state.result(action);
        depth += 1;
    }

    trace!("round {round}: reached a terminal state at depth {depth}");
    Ok(state)
}

/// Add the edge for `action` with a single visit and return the resulting state.
///
/// The edge starts with the outcome for the side that played `action` if that
/// ended the game, and with zero otherwise.
pub fn expand<S: GameState>(state: S, action: S::Action, table: &mut Table<S>, round: Round) -> S {
    let side = state.side_to_move();
    let next = state.result(action);
    let utility = if next.terminal_test() {
        normalize(next.utility(side))
    } else {
        0
    };
    table.insert(state, action, Edge::new(utility, round));
    next
}
