use std::time::Instant;

use isolation::{GameState, Isolation, Side, Square};
use rand::{rngs::StdRng, seq::SliceRandom};
use uct::{Player, SearchError};

pub trait Agent {
    fn name(&self) -> &'static str;

    fn new_game(&mut self) {}

    fn choose(&mut self, game: &Isolation, deadline: Instant) -> uct::Result<Square>;
}

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(rng: StdRng) -> Self {
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, game: &Isolation, _deadline: Instant) -> uct::Result<Square> {
        game.actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalActions)
    }
}

/// Looks one ply ahead and maximises its own liberties minus the opponent's.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new(rng: StdRng) -> Self {
        GreedyAgent { rng }
    }
}

fn mobility(game: &Isolation, side: Side) -> i32 {
    game.liberties(side).len() as i32 - game.liberties(side.next()).len() as i32
}

impl Agent for GreedyAgent {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, game: &Isolation, _deadline: Instant) -> uct::Result<Square> {
        let side = game.side_to_move();
        let scored: Vec<_> = game
            .actions()
            .into_iter()
            .map(|square| (square, mobility(&game.result(square), side)))
            .collect();
        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .max()
            .ok_or(SearchError::NoLegalActions)?;
        let candidates: Vec<_> = scored
            .into_iter()
            .filter(|(_, score)| *score == best)
            .map(|(square, _)| square)
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalActions)
    }
}

pub struct UctAgent {
    player: Player<Isolation, StdRng>,
}

impl UctAgent {
    pub fn new(rng: StdRng) -> Self {
        UctAgent {
            player: Player::new(rng),
        }
    }
}

impl Agent for UctAgent {
    fn name(&self) -> &'static str {
        "uct"
    }

    fn new_game(&mut self) {
        self.player.new_game();
    }

    fn choose(&mut self, game: &Isolation, deadline: Instant) -> uct::Result<Square> {
        self.player.think(game, deadline)
    }
}
