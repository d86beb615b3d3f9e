use std::fmt::Display;

use uct::{GameState, Side};

use crate::{
    square::{Square, HEIGHT, SQUARES, WIDTH},
    PlayError,
};

const ALL_OPEN: u128 = (1 << SQUARES) - 1;

/// Knight's Isolation.
///
/// Each side owns a knight. On its first turn a side drops its knight on any
/// open square, afterwards it has to make a knight jump onto an open square.
/// Every square a knight lands on stays closed for the rest of the game.
/// The side to move without a legal jump loses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Isolation {
    open: u128,
    locations: [Option<Square>; 2],
    ply: u64,
}

impl Default for Isolation {
    fn default() -> Self {
        Isolation {
            open: ALL_OPEN,
            locations: [None, None],
            ply: 0,
        }
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::First => 0,
        Side::Second => 1,
    }
}

impl Isolation {
    /// Set up a position where only the `open` squares can still be visited.
    /// Squares holding a knight are closed regardless.
    pub fn with_open<I: IntoIterator<Item = Square>>(open: I, locations: [Option<Square>; 2], ply: u64) -> Self {
        let mut mask = open.into_iter().fold(0, |mask, square| mask | square.bit());
        for square in locations.into_iter().flatten() {
            mask &= !square.bit();
        }
        Isolation {
            open: mask,
            locations,
            ply,
        }
    }

    pub fn is_open(&self, square: Square) -> bool {
        self.open & square.bit() != 0
    }

    pub fn open_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|square| self.is_open(*square))
    }

    pub fn location(&self, side: Side) -> Option<Square> {
        self.locations[side_index(side)]
    }

    /// Squares `side` could move to if it were its turn.
    pub fn liberties(&self, side: Side) -> Vec<Square> {
        match self.location(side) {
            Some(from) => from
                .jumps()
                .iter()
                .copied()
                .filter(|square| self.is_open(*square))
                .collect(),
            None => self.open_squares().collect(),
        }
    }

    fn has_liberties(&self, side: Side) -> bool {
        match self.location(side) {
            Some(from) => from.jumps().iter().any(|square| self.is_open(*square)),
            None => self.open != 0,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        if self.terminal_test() {
            Some(self.side_to_move().next())
        } else {
            None
        }
    }

    pub fn play(&mut self, square: Square) -> Result<(), PlayError> {
        if self.terminal_test() {
            return Err(PlayError::GameOver);
        }
        if !self.is_open(square) {
            return Err(PlayError::Occupied);
        }
        if let Some(from) = self.location(self.side_to_move()) {
            if !from.jumps().contains(&square) {
                return Err(PlayError::NotReachable);
            }
        }
        self.execute(square);
        Ok(())
    }

    fn execute(&mut self, square: Square) {
        self.open &= !square.bit();
        self.locations[side_index(self.side_to_move())] = Some(square);
        self.ply += 1;
    }

    /// Play a sequence of moves written like `"c3"`.
    pub fn from_moves(moves: &[&str]) -> Result<Self, PlayError> {
        let mut game = Isolation::default();
        for m in moves {
            game.play(m.parse()?)?;
        }
        Ok(game)
    }
}

impl GameState for Isolation {
    type Action = Square;

    fn actions(&self) -> Vec<Square> {
        self.liberties(self.side_to_move())
    }

    fn result(&self, action: Square) -> Self {
        let mut next = self.clone();
        next.execute(action);
        next
    }

    fn terminal_test(&self) -> bool {
        !self.has_liberties(self.side_to_move())
    }

    fn utility(&self, side: Side) -> f64 {
        match self.winner() {
            Some(winner) if winner == side => f64::INFINITY,
            Some(_) => f64::NEG_INFINITY,
            None => 0.0,
        }
    }

    fn ply(&self) -> u64 {
        self.ply
    }
}

impl Display for Isolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..HEIGHT).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..WIDTH {
                let square = Square::new(x, y).ok_or(std::fmt::Error)?;
                let c = if self.location(Side::First) == Some(square) {
                    '1'
                } else if self.location(Side::Second) == Some(square) {
                    '2'
                } else if self.is_open(square) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..WIDTH {
            write!(f, "{}", (b'a' + x) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_allows_any_square() {
        let game = Isolation::default();
        assert_eq!(game.actions().len(), SQUARES);
        assert!(!game.terminal_test());
        assert_eq!(game.utility(Side::First), 0.0);
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.jumps().len(), 2);
        let centre = Square::new(5, 4).unwrap();
        assert_eq!(centre.jumps().len(), 8);
    }

    #[test]
    fn display_has_a_row_per_rank() {
        let game = Isolation::from_moves(&["a1", "k9"]).unwrap();
        let board = game.to_string();
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines.len(), HEIGHT as usize + 1);
        assert_eq!(lines[0], "9 ..........2");
        assert_eq!(lines[HEIGHT as usize - 1], "1 1..........");
        assert_eq!(lines[HEIGHT as usize], "  abcdefghijk");
    }
}
