use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Result, SearchError},
    game::GameState,
    table::{Edge, Table},
};

/// ```latex
/// U(s, a) = \frac{W(s, a)}{N(s, a)} + c \sqrt{\frac{2 \ln r(s, a)}{N(s, a)}}
/// ```
/// where `r(s, a)` is the last round that touched the edge.
pub fn upper_confidence_bound(edge: &Edge, exploration: f64) -> f64 {
    let visits = f64::from(edge.visits);
    edge.mean() + exploration * (2.0 * f64::from(edge.round).ln() / visits).sqrt()
}

/// Pick the action from `state` with the highest bound.
/// Exact ties are broken uniformly at random.
pub fn best_child<S: GameState, R: Rng + ?Sized>(
    state: &S,
    table: &Table<S>,
    exploration: f64,
    rng: &mut R,
) -> Result<S::Action> {
    let node = table.node(state).ok_or(SearchError::Unexplored)?;

    let mut best_score = f64::NEG_INFINITY;
    let mut best = Vec::new();
    for (action, edge) in node.edges() {
        let score = upper_confidence_bound(edge, exploration);
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(*action);
        } else if score == best_score {
            best.push(*action);
        }
    }

    best.choose(rng).copied().ok_or(SearchError::Unexplored)
}
