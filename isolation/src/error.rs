use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    OutOfBounds,
    Occupied,
    NotReachable,
    GameOver,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            PlayError::OutOfBounds => "given square is not on the board",
            PlayError::Occupied => "that square has already been visited",
            PlayError::NotReachable => "a knight cannot jump to that square",
            PlayError::GameOver => "the game is already over",
        })
    }
}

impl Error for PlayError {}
