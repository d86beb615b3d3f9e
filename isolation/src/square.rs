use std::{fmt::Display, str::FromStr};

use arrayvec::ArrayVec;

use crate::PlayError;

pub const WIDTH: u8 = 11;
pub const HEIGHT: u8 = 9;
pub const SQUARES: usize = WIDTH as usize * HEIGHT as usize;

const KNIGHT_JUMPS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

lazy_static! {
    static ref JUMPS: Vec<ArrayVec<Square, 8>> = (0..SQUARES as u8).map(|i| Square(i).generate_jumps()).collect();
}

/// A cell of the board, numbered row by row from the bottom left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < WIDTH && y < HEIGHT {
            Some(Square(y * WIDTH + x))
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.0 % WIDTH
    }

    pub fn y(self) -> u8 {
        self.0 / WIDTH
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn bit(self) -> u128 {
        1 << self.0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARES as u8).map(Square)
    }

    /// Squares a knight can reach from here, ignoring what is on the board.
    pub fn jumps(self) -> &'static [Square] {
        &JUMPS[self.index()]
    }

    fn generate_jumps(self) -> ArrayVec<Square, 8> {
        KNIGHT_JUMPS
            .into_iter()
            .filter_map(|(dx, dy)| {
                let x = u8::try_from(self.x() as i8 + dx).ok()?;
                let y = u8::try_from(self.y() as i8 + dy).ok()?;
                Square::new(x, y)
            })
            .collect()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x()) as char, self.y() + 1)
    }
}

impl FromStr for Square {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars.next().ok_or(PlayError::OutOfBounds)?;
        let row: u8 = chars.as_str().parse().map_err(|_| PlayError::OutOfBounds)?;
        if !column.is_ascii_lowercase() || row == 0 {
            return Err(PlayError::OutOfBounds);
        }
        Square::new(column as u8 - b'a', row - 1).ok_or(PlayError::OutOfBounds)
    }
}
