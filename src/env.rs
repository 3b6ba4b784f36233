use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::ParseError;

/// Number of rows and columns of the board.
pub const SIZE: usize = 3;

/// Position of a cell, addressed by row and column.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Move { row, col }
    }

    pub fn within(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major index into the cell array.
    pub(crate) fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub(crate) fn from_index(i: usize) -> Move {
        Move::new(i / SIZE, i % SIZE)
    }

    /// All positions in row-major order.
    pub fn iter() -> impl Iterator<Item = Move> {
        (0..SIZE * SIZE).map(Move::from_index)
    }
}

impl From<(usize, usize)> for Move {
    fn from(val: (usize, usize)) -> Self {
        Move::new(val.0, val.1)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<usize>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col)), None) => Ok(Move::new(row, col)),
            _ => Err(ParseError::Move(s.into())),
        }
    }
}
