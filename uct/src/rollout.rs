use std::cmp::Ordering;

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Result, SearchError},
    game::{GameState, Side},
};

/// Clamp a utility of any magnitude to -1, 0 or 1.
pub fn normalize(utility: f64) -> i8 {
    match utility.partial_cmp(&0.0) {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        // zero, or nan which carries no winner
        _ => 0,
    }
}

/// Play uniformly random actions until the game ends.
/// Returns the normalized outcome for `side`.
pub fn simulate<S: GameState, R: Rng + ?Sized>(mut state: S, side: Side, rng: &mut R) -> Result<i8> {
    while !state.terminal_test() {
        let action = *state
            .actions()
            .choose(rng)
            .ok_or(SearchError::NoLegalActions)?;
        state = state.result(action);
    }
    Ok(normalize(state.utility(side)))
}
