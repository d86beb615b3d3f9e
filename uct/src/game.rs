use std::{fmt::Debug, hash::Hash};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The side to move after `ply` plies have been played.
    pub fn of_ply(ply: u64) -> Self {
        if ply % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A position in a two-player, alternating, perfect information game.
///
/// Two states that compare equal are treated as the same search node, no
/// matter how they were reached. Include the ply counter in the equality
/// (and the hash) or positions with different sides to move will be merged.
pub trait GameState: Clone + Eq + Hash {
    type Action: Copy + Eq + Hash + Debug;

    /// Legal actions in a stable order. Empty only when the game is over.
    fn actions(&self) -> Vec<Self::Action>;

    /// The state after playing a legal `action`. Leaves `self` untouched.
    #[must_use]
    fn result(&self, action: Self::Action) -> Self;

    fn terminal_test(&self) -> bool;

    /// Signed outcome for `side`, positive when `side` won.
    /// Only meaningful for terminal states.
    fn utility(&self, side: Side) -> f64;

    /// Number of plies played so far.
    fn ply(&self) -> u64;

    fn side_to_move(&self) -> Side {
        Side::of_ply(self.ply())
    }
}
