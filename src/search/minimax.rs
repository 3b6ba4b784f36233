use log::debug;

use super::{
    check_searchable, select_best, terminal_score, Evaluator, SearchError, SearchResult, INFINITY,
};
use crate::game::{Board, Mark};

/// Plain minimax over the complete game tree.
///
/// `player` is maximizing and its opponent minimizing. Nothing is pruned, so
/// this visits every possible continuation and serves as reference for the
/// alpha-beta search.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    player: Mark,
}

impl Minimax {
    pub fn new(player: Mark) -> Minimax {
        Minimax { player }
    }

    fn minimax(&self, board: &Board, depth: usize, maximizing: bool, nodes: &mut usize) -> i32 {
        *nodes += 1;
        if let Some(score) = terminal_score(board, self.player, depth) {
            return score;
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in board.empty_cells() {
                let child = board.child(mv, self.player);
                best = best.max(self.minimax(&child, depth + 1, false, nodes));
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in board.empty_cells() {
                let child = board.child(mv, self.player.opponent());
                best = best.min(self.minimax(&child, depth + 1, true, nodes));
            }
            best
        }
    }
}

impl Evaluator for Minimax {
    fn player(&self) -> Mark {
        self.player
    }

    fn search(&self, board: &Board) -> Result<SearchResult, SearchError> {
        check_searchable(board)?;

        let candidates = board.empty_cells().map(|mv| {
            let mut nodes = 0;
            let child = board.child(mv, self.player);
            let score = self.minimax(&child, 1, false, &mut nodes);
            (mv, score, nodes)
        });
        let result = select_best(candidates).ok_or(SearchError::BoardFull)?;
        debug!(
            "minimax {}: {} score={} nodes={}",
            self.player, result.mv, result.score, result.nodes
        );
        Ok(result)
    }

    fn score(&self, board: &Board, depth: usize, maximizing: bool) -> i32 {
        self.minimax(board, depth, maximizing, &mut 0)
    }
}

/// Minimax that evaluates every root move in its own task.
///
/// The results are compared in row-major order afterwards, so this returns
/// exactly what [Minimax::search] returns.
pub async fn async_minimax(board: &Board, player: Mark) -> Result<SearchResult, SearchError> {
    check_searchable(board)?;
    let evaluator = Minimax::new(player);

    let futures: Vec<_> = board
        .empty_cells()
        .map(|mv| {
            let child = board.child(mv, player);
            let task = tokio::task::spawn(async move {
                let mut nodes = 0;
                let score = evaluator.minimax(&child, 1, false, &mut nodes);
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
