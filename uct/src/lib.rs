//! Monte Carlo tree search with the UCT selection rule.
//!
//! The search keeps a flat table of `(state, action)` edge statistics that
//! the caller carries from one call to the next, so every call to
//! [`search_round`] refines the same table. Call it repeatedly until your
//! clock runs out and play the last action it returned.

mod backup;
mod debug;
mod error;
mod expansion;
mod game;
mod player;
mod rollout;
mod search;
mod table;
mod ucb;

pub mod config;

pub use backup::backpropagate;
pub use error::*;
pub use expansion::{expand, tree_policy};
pub use game::{GameState, Side};
pub use player::Player;
pub use rollout::{normalize, simulate};
pub use search::{search_round, SearchContext};
pub use table::{Edge, Node, Round, Table};
pub use ucb::{best_child, upper_confidence_bound};
