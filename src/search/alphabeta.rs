use log::debug;

use super::{
    check_searchable, select_best, terminal_score, Evaluator, SearchError, SearchResult, INFINITY,
};
use crate::game::{Board, Mark};

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - `player` is the maximizing side
/// - Children are visited in row-major order, like [super::Minimax], so both
///   select the same move with the same score
#[derive(Debug, Clone, Copy)]
pub struct AlphaBeta {
    player: Mark,
}

impl AlphaBeta {
    pub fn new(player: Mark) -> AlphaBeta {
        AlphaBeta { player }
    }

    fn alphabeta(
        &self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut usize,
    ) -> i32 {
        *nodes += 1;
        if let Some(score) = terminal_score(board, self.player, depth) {
            return score;
        }

        if maximizing {
            let mut value = -INFINITY;
            for mv in board.empty_cells() {
                let child = board.child(mv, self.player);
                let newval = self.alphabeta(&child, depth + 1, false, alpha, beta, nodes);
                value = value.max(newval);
                alpha = alpha.max(value);
                if beta <= alpha {
                    // beta cutoff
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for mv in board.empty_cells() {
                let child = board.child(mv, self.player.opponent());
                let newval = self.alphabeta(&child, depth + 1, true, alpha, beta, nodes);
                value = value.min(newval);
                beta = beta.min(value);
                if beta <= alpha {
                    // alpha cutoff
                    break;
                }
            }
            value
        }
    }
}

impl Evaluator for AlphaBeta {
    fn player(&self) -> Mark {
        self.player
    }

    fn search(&self, board: &Board) -> Result<SearchResult, SearchError> {
        check_searchable(board)?;

        // The root is a maximizing node, alpha carries over between the candidates.
        let mut alpha = -INFINITY;
        let candidates = board.empty_cells().map(|mv| {
            let mut nodes = 0;
            let child = board.child(mv, self.player);
            let score = self.alphabeta(&child, 1, false, alpha, INFINITY, &mut nodes);
            alpha = alpha.max(score);
            (mv, score, nodes)
        });
        let result = select_best(candidates).ok_or(SearchError::BoardFull)?;
        debug!(
            "alphabeta {}: {} score={} nodes={}",
            self.player, result.mv, result.score, result.nodes
        );
        Ok(result)
    }

    fn score(&self, board: &Board, depth: usize, maximizing: bool) -> i32 {
        self.alphabeta(board, depth, maximizing, -INFINITY, INFINITY, &mut 0)
    }
}

/// Alpha-Beta search with one task per root move.
///
/// The tasks cannot share the root bound, so each one starts with the full
/// window. This may visit more nodes than [AlphaBeta::search] but returns the
/// same move and score.
pub async fn async_alphabeta(board: &Board, player: Mark) -> Result<SearchResult, SearchError> {
    check_searchable(board)?;
    let evaluator = AlphaBeta::new(player);

    let futures: Vec<_> = board
        .empty_cells()
        .map(|mv| {
            let child = board.child(mv, player);
            let task = tokio::task::spawn(async move {
                let mut nodes = 0;
                let score =
                    evaluator.alphabeta(&child, 1, false, -INFINITY, INFINITY, &mut nodes);
                (score, nodes)
            });
            (mv, task)
        })
        .collect();

    let mut candidates = Vec::with_capacity(futures.len());
    for (mv, future) in futures {
        let (score, nodes) = future.await.map_err(|_| SearchError::Aborted)?;
        candidates.push((mv, score, nodes));
    }
    select_best(candidates).ok_or(SearchError::BoardFull)
}
