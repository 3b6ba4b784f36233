use log::{debug, info};

use super::{Board, Mark, Outcome, PlayError};
use crate::agents::Agent;
use crate::env::Move;

/// A running game between a human and the engine.
///
/// This enforces the turn order (`X` always starts), which the board alone
/// does not, and holds the search strategy used for the engine's moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Mark,
    engine: Mark,
    agent: Agent,
}

impl Game {
    pub fn new(engine: Mark, agent: Agent) -> Game {
        Game {
            board: Board::new(),
            turn: Mark::X,
            engine,
            agent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn engine(&self) -> Mark {
        self.engine
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }

    pub fn is_engine_turn(&self) -> bool {
        self.turn == self.engine && !self.outcome().finished()
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Plays the human's move.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, PlayError> {
        if self.outcome().finished() {
            return Err(PlayError::Finished);
        }
        if self.turn == self.engine {
            return Err(PlayError::NotYourTurn(self.turn));
        }
        self.board.apply(mv, self.turn)?;
        debug!("{} plays {}", self.turn, mv);
        Ok(self.next_turn())
    }

    /// Lets the engine search and play its move.
    pub fn engine_move(&mut self) -> Result<(Move, Outcome), PlayError> {
        if self.outcome().finished() {
            return Err(PlayError::Finished);
        }
        if self.turn != self.engine {
            return Err(PlayError::NotYourTurn(self.turn));
        }
        let mv = self.agent.step(&self.board, self.engine)?;
        self.board.apply(mv, self.engine)?;
        debug!("{} plays {}", self.engine, mv);
        Ok((mv, self.next_turn()))
    }

    fn next_turn(&mut self) -> Outcome {
        self.turn = self.turn.opponent();
        let outcome = self.outcome();
        if outcome.finished() {
            info!("game over: {:?}", outcome);
        }
        outcome
    }

    /// Clears the board, `X` moves first again.
    pub fn restart(&mut self) {
        self.board.reset();
        self.turn = Mark::X;
    }

    /// Switches between minimax and alpha-beta.
    /// A finished game is restarted as well.
    pub fn toggle_agent(&mut self) -> Agent {
        self.agent = self.agent.toggle();
        info!("switched to {}", self.agent.name());
        if self.outcome().finished() {
            self.restart();
        }
        self.agent
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Cell;
    use crate::logging;

    #[test]
    fn game_turns() {
        logging();
        let mut game = Game::new(Mark::O, Agent::AlphaBeta);
        assert_eq!(game.turn(), Mark::X);
        assert!(!game.is_engine_turn());

        assert_eq!(
            game.engine_move(),
            Err(PlayError::NotYourTurn(Mark::X))
        );

        assert_eq!(game.play(Move::new(0, 0)), Ok(Outcome::None));
        assert!(game.is_engine_turn());
        assert_eq!(
            game.play(Move::new(0, 1)),
            Err(PlayError::NotYourTurn(Mark::O))
        );

        let (mv, outcome) = game.engine_move().unwrap();
        assert_eq!(mv, Move::new(1, 1));
        assert_eq!(outcome, Outcome::None);

        // occupied
        let before = *game.board();
        assert!(matches!(
            game.play(Move::new(1, 1)),
            Err(PlayError::Move(_))
        ));
        assert_eq!(*game.board(), before);
        assert_eq!(game.turn(), Mark::X);

        assert_eq!(game.play(Move::new(0, 2)), Ok(Outcome::None));
        let (mv, _) = game.engine_move().unwrap();
        assert_eq!(mv, Move::new(0, 1));
    }

    #[test]
    fn game_engine_wins() {
        logging();
        let mut game = Game::new(Mark::O, Agent::Minimax);
        // X plays badly, O takes the middle column
        game.play(Move::new(0, 0)).unwrap();
        assert_eq!(game.engine_move().unwrap().0, Move::new(1, 1));
        game.play(Move::new(2, 2)).unwrap();
        let (mv, _) = game.engine_move().unwrap();
        // (0, 1) is the first move that keeps the draw or better
        assert_eq!(mv, Move::new(0, 1));
        game.play(Move::new(0, 2)).unwrap();
        let (mv, outcome) = game.engine_move().unwrap();
        assert_eq!(mv, Move::new(2, 1));
        assert_eq!(outcome, Outcome::Winner(Mark::O));

        assert_eq!(game.play(Move::new(1, 0)), Err(PlayError::Finished));
        assert_eq!(game.engine_move(), Err(PlayError::Finished));
        assert!(!game.is_engine_turn());
    }

    #[test]
    fn game_engine_first() {
        let mut game = Game::new(Mark::X, Agent::AlphaBeta);
        assert!(game.is_engine_turn());
        let (mv, outcome) = game.engine_move().unwrap();
        assert_eq!(outcome, Outcome::None);
        assert_eq!(game.board()[mv], Cell::X);
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn game_toggle_and_restart() {
        let mut game = Game::new(Mark::O, Agent::AlphaBeta);
        game.play(Move::new(0, 0)).unwrap();

        // running games keep their board
        assert_eq!(game.toggle_agent(), Agent::Minimax);
        assert_eq!(game.board().count(Mark::X), 1);

        game.restart();
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.turn(), Mark::X);

        // finished games are restarted
        for mv in [(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)] {
            let mv = Move::from(mv);
            if game.turn() == Mark::X {
                game.play(mv).unwrap();
            } else {
                game.board.apply(mv, Mark::O).unwrap();
                game.turn = Mark::X;
            }
        }
        assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
        assert_eq!(game.toggle_agent(), Agent::AlphaBeta);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.outcome(), Outcome::None);
    }
}
