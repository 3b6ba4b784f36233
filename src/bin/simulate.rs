use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use owo_colors::OwoColorize;

use tictac::agents::{Agent, RandomAgent};
use tictac::game::{Game, Mark, Outcome, PlayError};
use tictac::logging;

#[derive(Parser)]
#[command(
    name = "tictac simulate",
    about = "Play the engine against a random opponent."
)]
struct Opts {
    /// Search algorithm of the engine (`minimax` or `alphabeta`).
    #[arg(long, default_value_t)]
    agent: Agent,
    #[arg(short, long, default_value = "100")]
    game_count: usize,
    /// Seed of the random opponent.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    logging();

    let Opts {
        agent,
        game_count,
        seed,
        verbose,
    } = Opts::parse();

    let mut opponent = seed.map(RandomAgent::seeded).unwrap_or_default();
    let start = Instant::now();

    let (mut wins, mut ties, mut losses) = (0, 0, 0);

    for i in 0..game_count {
        // alternate who moves first
        let engine = if i % 2 == 0 { Mark::X } else { Mark::O };
        let outcome = match play_game(agent, engine, &mut opponent, verbose) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("game {i} aborted: {e}");
                continue;
            }
        };
        match outcome {
            Outcome::Winner(mark) if mark == engine => wins += 1,
            Outcome::Winner(_) => {
                warn!("engine lost game {i} as {engine}");
                losses += 1;
            }
            _ => ties += 1,
        }
        println!(
            "{}: {} {:?} {}ms",
            "Finish Game".bright_green(),
            i,
            outcome,
            start.elapsed().as_millis()
        );
    }

    println!(
        "Result: {}/{}/{} (wins/ties/losses)",
        wins, ties, losses
    );
}

fn play_game(
    agent: Agent,
    engine: Mark,
    opponent: &mut RandomAgent,
    verbose: bool,
) -> Result<Outcome, PlayError> {
    let mut game = Game::new(engine, agent);
    loop {
        let outcome = if game.is_engine_turn() {
            game.engine_move()?.1
        } else {
            let mv = opponent.step(game.board()).ok_or(PlayError::Finished)?;
            game.play(mv)?
        };
        if verbose {
            info!("{:?}", game.board());
        }
        if outcome.finished() {
            return Ok(outcome);
        }
    }
}
