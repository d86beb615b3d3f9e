use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

/// Play Knight's Isolation matches between the UCT agent and an opponent
#[derive(Parser)]
pub struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 10)]
    pub games: u32,
    /// Thinking time per move in milliseconds
    #[clap(short, long, default_value_t = 150)]
    pub think_millis: u64,
    /// Opponent to play against (random, greedy or uct)
    #[clap(short, long, default_value = "greedy")]
    pub opponent: Opponent,
    /// Seed for all random sources
    #[clap(short, long, default_value_t = 0)]
    pub seed: u64,
    /// Log level (off, error, warn, info, debug, trace)
    #[clap(short, long, default_value = "info")]
    pub log_level: LevelFilter,
    /// Write the log to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Greedy,
    Uct,
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Opponent::Random),
            "greedy" => Ok(Opponent::Greedy),
            "uct" => Ok(Opponent::Uct),
            _ => Err(format!("unknown opponent {s}")),
        }
    }
}
