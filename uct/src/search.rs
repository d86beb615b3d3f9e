use rand::Rng;

use crate::{
    backup::backpropagate,
    config::{EXPLOITATION, FIRST_ROUND},
    error::{Result, SearchError},
    expansion::tree_policy,
    game::GameState,
    rollout::simulate,
    table::{Round, Table},
    ucb::best_child,
};

/// Run one round of selection, expansion, simulation and backpropagation
/// and return the action from `root` that currently looks best.
pub fn search_round<S: GameState, R: Rng + ?Sized>(
    root: &S,
    table: &mut Table<S>,
    round: Round,
    rng: &mut R,
) -> Result<S::Action> {
    if round == 0 {
        return Err(SearchError::ZeroRound);
    }
    if root.terminal_test() {
        return Err(SearchError::TerminalRoot);
    }

    let side = root.side_to_move();
    let leaf = tree_policy(root, table, round, rng)?;
    if !leaf.terminal_test() {
        let delta = simulate(leaf, side, rng)?;
        backpropagate(table, delta, side, round);
    }

    best_child(root, table, EXPLOITATION, rng)
}

/// The table together with the number of the next round.
pub struct SearchContext<S: GameState> {
    pub table: Table<S>,
    pub round: Round,
}

impl<S: GameState> Default for SearchContext<S> {
    fn default() -> Self {
        SearchContext {
            table: Table::default(),
            round: FIRST_ROUND,
        }
    }
}

impl<S: GameState> SearchContext<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the next round and advance the round counter.
    pub fn search<R: Rng + ?Sized>(&mut self, root: &S, rng: &mut R) -> Result<S::Action> {
        let action = search_round(root, &mut self.table, self.round, rng)?;
        self.round += 1;
        Ok(action)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
