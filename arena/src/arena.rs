use std::{
    error::Error,
    time::{Duration, Instant},
};

use isolation::{GameState, Isolation, Side};
use log::info;

use crate::agent::Agent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

impl Score {
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(games)
        }
    }
}

/// Play a single game. Returns the side that won and the final position.
pub fn play_game<'a>(
    first: &'a mut dyn Agent,
    second: &'a mut dyn Agent,
    think: Duration,
) -> Result<(Side, Isolation), Box<dyn Error>> {
    first.new_game();
    second.new_game();

    let mut game = Isolation::default();
    while !game.terminal_test() {
        let agent = match game.side_to_move() {
            Side::First => &mut *first,
            Side::Second => &mut *second,
        };
        let square = agent.choose(&game, Instant::now() + think)?;
        game.play(square)?;
    }

    let winner = game.winner().ok_or("finished game without a winner")?;
    Ok((winner, game))
}

/// Play `games` games, alternating who moves first. The score is from `hero`'s view.
pub fn play_match(
    hero: &mut dyn Agent,
    opponent: &mut dyn Agent,
    games: u32,
    think: Duration,
) -> Result<Score, Box<dyn Error>> {
    let mut score = Score::default();
    for index in 0..games {
        let hero_side = if index % 2 == 0 { Side::First } else { Side::Second };
        let (winner, game) = match hero_side {
            Side::First => play_game(hero, opponent, think)?,
            Side::Second => play_game(opponent, hero, think)?,
        };

        if winner == hero_side {
            score.wins += 1;
        } else {
            score.losses += 1;
        }
        info!(
            "game {}: {} ({hero_side:?}) {} against {} after {} plies\n{game}",
            index + 1,
            hero.name(),
            if winner == hero_side { "won" } else { "lost" },
            opponent.name(),
            game.ply(),
        );
    }
    Ok(score)
}
