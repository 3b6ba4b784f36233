use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::info;

mod random;
pub use random::*;

use crate::env::Move;
use crate::game::{Board, Mark, ParseError};
use crate::search::{
    async_alphabeta, async_minimax, AlphaBeta, Evaluator, Minimax, SearchError, SearchResult,
};

/// The search strategy the engine plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Minimax,
    #[default]
    AlphaBeta,
}

impl Agent {
    pub fn evaluator(self, player: Mark) -> Box<dyn Evaluator> {
        match self {
            Agent::Minimax => Box::new(Minimax::new(player)),
            Agent::AlphaBeta => Box::new(AlphaBeta::new(player)),
        }
    }

    /// Searches the best move for `player` and logs the time it took.
    pub fn search(self, board: &Board, player: Mark) -> Result<SearchResult, SearchError> {
        let timer = Instant::now();
        let result = self.evaluator(player).search(board)?;
        info!(
            "{} move {} took {:?}us ({} nodes)",
            self.name(),
            result.mv,
            timer.elapsed().as_micros(),
            result.nodes
        );
        Ok(result)
    }

    pub fn step(self, board: &Board, player: Mark) -> Result<Move, SearchError> {
        self.search(board, player).map(|r| r.mv)
    }

    /// Same as [Agent::search] with one task per root move.
    pub async fn async_search(
        self,
        board: &Board,
        player: Mark,
    ) -> Result<SearchResult, SearchError> {
        let timer = Instant::now();
        let result = match self {
            Agent::Minimax => async_minimax(board, player).await?,
            Agent::AlphaBeta => async_alphabeta(board, player).await?,
        };
        info!(
            "{} (async) move {} took {:?}us ({} nodes)",
            self.name(),
            result.mv,
            timer.elapsed().as_micros(),
            result.nodes
        );
        Ok(result)
    }

    pub fn toggle(self) -> Agent {
        match self {
            Agent::Minimax => Agent::AlphaBeta,
            Agent::AlphaBeta => Agent::Minimax,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Agent::Minimax => "Regular Minimax",
            Agent::AlphaBeta => "Alpha-Beta Pruning",
        }
    }
}

impl FromStr for Agent {
    type Err = ParseError;

    /// Accepts the json representation (`"minimax"`) and the bare name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .or_else(|_| serde_json::from_value(s.trim().to_lowercase().into()))
            .map_err(|_| ParseError::Agent(s.into()))
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Minimax => write!(f, "minimax"),
            Agent::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}
