use std::{error::Error, time::Duration};

use clap::Parser;
use log::info;
use mimalloc::MiMalloc;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    agent::{Agent, GreedyAgent, RandomAgent, UctAgent},
    arena::play_match,
    cli::{Args, Opponent},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod agent;
mod arena;
mod cli;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, args.log_level)?,
        None => simple_logging::log_to_stderr(args.log_level),
    }

    let mut hero = UctAgent::new(StdRng::seed_from_u64(args.seed));
    let opponent_rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut opponent: Box<dyn Agent> = match args.opponent {
        Opponent::Random => Box::new(RandomAgent::new(opponent_rng)),
        Opponent::Greedy => Box::new(GreedyAgent::new(opponent_rng)),
        Opponent::Uct => Box::new(UctAgent::new(opponent_rng)),
    };

    info!(
        "playing {} games against {} with {} ms per move",
        args.games,
        opponent.name(),
        args.think_millis
    );
    let score = play_match(
        &mut hero,
        opponent.as_mut(),
        args.games,
        Duration::from_millis(args.think_millis),
    )?;

    println!(
        "uct won {} of {} games against {} ({:.1}%)",
        score.wins,
        score.wins + score.losses,
        opponent.name(),
        100.0 * score.win_rate()
    );
    Ok(())
}
