#[macro_use]
extern crate lazy_static;

mod error;
mod game;
mod square;

pub use error::PlayError;
pub use game::Isolation;
pub use square::{Square, HEIGHT, WIDTH};
pub use uct::{GameState, Side};
