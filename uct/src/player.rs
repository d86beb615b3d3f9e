use std::time::Instant;

use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use crate::{
    config::DEADLINE_MARGIN,
    error::{Result, SearchError},
    game::GameState,
    search::SearchContext,
};

/// Plays a whole game, reusing the search table from move to move.
pub struct Player<S: GameState, R: Rng> {
    context: SearchContext<S>,
    rng: R,
}

impl<S: GameState, R: Rng> Player<S, R> {
    pub fn new(rng: R) -> Self {
        Player {
            context: SearchContext::new(),
            rng,
        }
    }

    pub fn context(&self) -> &SearchContext<S> {
        &self.context
    }

    /// Total number of rounds run since the last new game.
    pub fn rounds(&self) -> u32 {
        self.context.round - 1
    }

    /// Forget everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.context.clear();
    }

    /// Search until shortly before `deadline` and return the best action found.
    /// A random legal action is returned if there was no time for a single round.
    pub fn think(&mut self, state: &S, deadline: Instant) -> Result<S::Action> {
        info!("move {}", state.ply());
        if state.terminal_test() {
            return Err(SearchError::TerminalRoot);
        }
        let mut best = *state
            .actions()
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalActions)?;

        let start = self.context.round;
        while Instant::now() + DEADLINE_MARGIN < deadline {
            best = self.context.search(state, &mut self.rng)?;
        }

        self.report(state, best, start);
        Ok(best)
    }

    /// Run a fixed number of rounds and return the best action.
    pub fn rollout(&mut self, state: &S, rounds: u32) -> Result<S::Action> {
        if state.terminal_test() {
            return Err(SearchError::TerminalRoot);
        }
        let mut best = *state
            .actions()
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalActions)?;

        let start = self.context.round;
        for _ in 0..rounds {
            best = self.context.search(state, &mut self.rng)?;
        }

        self.report(state, best, start);
        Ok(best)
    }

    fn report(&self, state: &S, best: S::Action, start: u32) {
        debug!(
            "picked {best:?} after {} rounds, table has {} edges\n{}",
            self.context.round - start,
            self.context.table.len(),
            self.context.table.debug(state, Some(5)),
        );
    }
}
