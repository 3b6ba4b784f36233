use std::fmt;
use std::str::FromStr;

use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

use super::ParseError;

/// Symbol of one of the two players. `X` always moves first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn iter() -> impl Iterator<Item = Mark> {
        [Mark::X, Mark::O].into_iter()
    }

    pub(crate) fn color(self) -> Style {
        match self {
            Mark::X => Style::new().green(),
            Mark::O => Style::new().yellow(),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(ParseError::Mark(other.into())),
        }
    }
}

/// Single square of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Cell {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mark() {
            Some(mark) => write!(f, "{}", self.to_char().style(mark.color())),
            None => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_cell_mark() {
        use super::*;

        println!("sizeof Cell: {}", std::mem::size_of::<Cell>());

        assert_eq!(Cell::from(Mark::X), Cell::X);
        assert_eq!(Cell::from(Mark::O), Cell::O);
        assert_eq!(Cell::X.mark(), Some(Mark::X));
        assert_eq!(Cell::Empty.mark(), None);
        assert!(Cell::default().is_empty());
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parse() {
        use super::*;

        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
        assert!("Z".parse::<Mark>().is_err());
        assert_eq!(Mark::O.to_string(), "O");
    }
}
