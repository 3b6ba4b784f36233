use std::fmt::{self, Debug};
use std::ops::Index;
use std::str::FromStr;

use super::{Cell, Mark, MoveError, Outcome, ParseError};
use crate::env::{Move, SIZE};

/// The three rows, three columns and two diagonals as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 grid of cells.
///
/// This is a small `Copy` value, so the search can branch on independent
/// copies without any heap allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SIZE * SIZE];
    }

    /// Returns if the position is on the board and not yet taken.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        let mv = Move::new(row, col);
        mv.within() && self[mv].is_empty()
    }

    /// Places `mark` at the given position.
    /// Illegal moves leave the board untouched.
    pub fn make_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let mv = Move::new(row, col);
        if !mv.within() {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self[mv].is_empty() {
            return Err(MoveError::Occupied { row, col });
        }
        self.cells[mv.index()] = mark.into();
        Ok(())
    }

    /// Same as `make_move` for an already constructed position.
    pub fn apply(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        self.make_move(mv.row, mv.col, mark)
    }

    /// Copy of the board with `mark` placed on the free position `mv`.
    pub(crate) fn child(&self, mv: Move, mark: Mark) -> Board {
        debug_assert!(self[mv].is_empty());
        let mut board = *self;
        board.cells[mv.index()] = mark.into();
        board
    }

    /// Returns if any row, column or diagonal consists only of `mark`.
    pub fn check_winner(&self, mark: Mark) -> bool {
        let cell = Cell::from(mark);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == cell))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterates over the free positions in row-major order.
    /// The search relies on this order for its tie-breaking.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells::new(self)
    }

    /// Independent copy of the board.
    pub fn copy(&self) -> Board {
        *self
    }

    /// Number of cells occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// The side to move assuming `X` started and turns alternated.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns if the game has ended and how.
    pub fn outcome(&self) -> Outcome {
        if self.check_winner(Mark::X) {
            Outcome::Winner(Mark::X)
        } else if self.check_winner(Mark::O) {
            Outcome::Winner(Mark::O)
        } else if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::None
        }
    }
}

impl Index<Move> for Board {
    type Output = Cell;

    fn index(&self, mv: Move) -> &Cell {
        &self.cells[mv.index()]
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses the textual representation used in tests and on the command line.
    /// Whitespace and `/` are ignored, `.`, `_` and `-` are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut n = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = Cell::from_char(c).ok_or(ParseError::Cell(c))?;
            if n >= SIZE * SIZE {
                return Err(ParseError::Length(n + 1));
            }
            board.cells[n] = cell;
            n += 1;
        }
        if n != SIZE * SIZE {
            return Err(ParseError::Length(n));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIZE).enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(SIZE) {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}

/// Iterator over all free positions of a board.
pub struct EmptyCells<'a> {
    board: &'a Board,
    i: usize,
}

impl<'a> EmptyCells<'a> {
    fn new(board: &'a Board) -> EmptyCells<'a> {
        EmptyCells { board, i: 0 }
    }
}

impl<'a> Iterator for EmptyCells<'a> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < SIZE * SIZE {
            let i = self.i;
            self.i += 1;
            if self.board.cells[i].is_empty() {
                return Some(Move::from_index(i));
            }
        }
        None
    }
}

#[cfg(test)]
mod test {

    #[test]
    fn board_parse() {
        use super::*;
        let board: Board = r#"
            X . O
            . X .
            . . O"#
            .parse()
            .unwrap();

        assert_eq!(board[Move::new(0, 0)], Cell::X);
        assert_eq!(board[Move::new(0, 2)], Cell::O);
        assert_eq!(board[Move::new(1, 1)], Cell::X);
        assert_eq!(board[Move::new(2, 2)], Cell::O);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.to_string(), "X.O/.X./..O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);

        assert_eq!("X.O/.X.".parse::<Board>(), Err(ParseError::Length(6)));
        assert_eq!("XXXXXXXXXX".parse::<Board>(), Err(ParseError::Length(10)));
        assert_eq!("X.O/.Z./...".parse::<Board>(), Err(ParseError::Cell('Z')));

        println!("{:?}", board);
    }

    #[test]
    fn board_moves() {
        use super::*;
        let mut board = Board::new();

        assert!(board.is_valid_move(0, 0));
        assert!(board.is_valid_move(2, 2));
        assert!(!board.is_valid_move(3, 0));
        assert!(!board.is_valid_move(0, 3));

        assert_eq!(board.make_move(1, 1, Mark::X), Ok(()));
        assert_eq!(board[Move::new(1, 1)], Cell::X);
        assert!(!board.is_valid_move(1, 1));

        // occupied cells are immutable
        let before = board;
        assert_eq!(
            board.make_move(1, 1, Mark::O),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(
            board.make_move(0, 5, Mark::O),
            Err(MoveError::OutOfBounds { row: 0, col: 5 })
        );
        assert_eq!(board, before);

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn board_winner() {
        use super::*;

        for line in LINES {
            let mut board = Board::new();
            for i in line {
                let mv = Move::from_index(i);
                board.make_move(mv.row, mv.col, Mark::O).unwrap();
            }
            assert!(board.check_winner(Mark::O), "{:?}", board);
            assert!(!board.check_winner(Mark::X));
            assert_eq!(board.outcome(), Outcome::Winner(Mark::O));
        }

        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(!board.check_winner(Mark::X));
        assert!(!board.check_winner(Mark::O));
        assert_eq!(board.outcome(), Outcome::None);
    }

    #[test]
    fn board_full_tie() {
        use super::*;
        let board: Board = r#"
            X O X
            X O O
            O X X"#
            .parse()
            .unwrap();

        assert!(board.is_full());
        assert!(!board.check_winner(Mark::X));
        assert!(!board.check_winner(Mark::O));
        assert_eq!(board.empty_cells().next(), None);
        assert_eq!(board.outcome(), Outcome::Tie);
    }

    #[test]
    fn board_empty_cells_row_major() {
        use super::*;
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let cells: Vec<Move> = board.empty_cells().collect();
        assert_eq!(
            cells,
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
        assert_eq!(board.next_mark(), Mark::X);
    }

    #[test]
    fn board_next_mark() {
        use super::*;
        assert_eq!(Board::new().next_mark(), Mark::X);
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(board.next_mark(), Mark::O);
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(board.next_mark(), Mark::X);
    }

    #[test]
    fn board_copy_is_independent() {
        use super::*;
        let mut board: Board = "X../.../...".parse().unwrap();
        let mut copy = board.copy();
        assert_eq!(copy, board);

        copy.make_move(2, 2, Mark::O).unwrap();
        assert_eq!(board[Move::new(2, 2)], Cell::Empty);

        board.make_move(0, 1, Mark::O).unwrap();
        assert_eq!(copy[Move::new(0, 1)], Cell::Empty);
    }
}
