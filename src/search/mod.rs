mod minimax;
pub use minimax::*;
mod alphabeta;
pub use alphabeta::*;

use std::fmt::Debug;

use thiserror::Error;

use crate::env::Move;
use crate::game::{Board, Mark};

/// Score of a won game at depth 0. Every ply reduces it by one.
pub const WIN: i32 = 10;
pub const DRAW: i32 = 0;
/// Score of a lost game at depth 0. Every ply increases it by one.
pub const LOSS: i32 = -10;

/// Initial bound, larger than any reachable score.
const INFINITY: i32 = i32::MAX;

/// Invalid search invocation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("there are no free cells left")]
    BoardFull,
    #[error("{0} has already won")]
    GameOver(Mark),
    #[error("the search was aborted")]
    Aborted,
}

/// The chosen move together with its score and the number of evaluated nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub score: i32,
    /// Number of evaluated positions below the root.
    pub nodes: usize,
}

/// Exhaustive tree search selecting moves for `player`.
pub trait Evaluator: Debug + Send + Sync {
    fn player(&self) -> Mark;

    fn opponent(&self) -> Mark {
        self.player().opponent()
    }

    /// Searches the whole game tree below `board`.
    fn search(&self, board: &Board) -> Result<SearchResult, SearchError>;

    /// Scores `board` from the perspective of `player`, where `depth` is the
    /// number of plies from the root and `maximizing` is set if `player` is
    /// to move.
    fn score(&self, board: &Board, depth: usize, maximizing: bool) -> i32;

    fn best_move(&self, board: &Board) -> Result<Move, SearchError> {
        self.search(board).map(|r| r.mv)
    }
}

/// Returns the score of a finished game or `None` if it continues.
///
/// The own win is checked first, then the opponent's, then a full board.
pub fn terminal_score(board: &Board, player: Mark, depth: usize) -> Option<i32> {
    if board.check_winner(player) {
        Some(WIN - depth as i32)
    } else if board.check_winner(player.opponent()) {
        Some(depth as i32 + LOSS)
    } else if board.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

/// Rejects boards without any move left to search.
fn check_searchable(board: &Board) -> Result<(), SearchError> {
    for mark in Mark::iter() {
        if board.check_winner(mark) {
            return Err(SearchError::GameOver(mark));
        }
    }
    if board.is_full() {
        return Err(SearchError::BoardFull);
    }
    Ok(())
}

/// Collects the scores of the root candidates in row-major order.
/// The first strict improvement wins, so ties go to the earliest move.
fn select_best(
    candidates: impl IntoIterator<Item = (Move, i32, usize)>,
) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;
    let mut nodes = 0;
    for (mv, score, n) in candidates {
        nodes += n;
        if best.map_or(true, |b| score > b.score) {
            best = Some(SearchResult { mv, score, nodes: 0 });
        }
    }
    best.map(|b| SearchResult { nodes, ..b })
}
