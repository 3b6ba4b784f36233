mod board;
pub use board::*;
mod cell;
pub use cell::*;
mod game;
pub use game::*;

use thiserror::Error;

use crate::search::SearchError;

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Tie,
    Winner(Mark),
}

impl Outcome {
    pub fn finished(self) -> bool {
        self != Outcome::None
    }
}

/// Rejected board mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("({row}, {col}) is outside of the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },
}

/// Invalid textual representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid cell {0:?}")]
    Cell(char),
    #[error("expected 9 cells, got {0}")]
    Length(usize),
    #[error("invalid mark {0:?}")]
    Mark(String),
    #[error("invalid move {0:?}, expected \"row col\"")]
    Move(String),
    #[error("unknown agent {0:?}")]
    Agent(String),
}

/// Rejected action of a running game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("it is {0}'s turn")]
    NotYourTurn(Mark),
    #[error("the game is already over")]
    Finished,
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
