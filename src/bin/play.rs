use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use owo_colors::OwoColorize;

use tictac::agents::Agent;
use tictac::env::Move;
use tictac::game::{Game, Mark, Outcome};
use tictac::logging;

#[derive(Debug, Parser)]
#[command(name = "tictac play", about = "Play tic-tac-toe against the engine.")]
struct Opts {
    /// Search algorithm of the engine (`minimax` or `alphabeta`).
    #[arg(long, default_value_t)]
    agent: Agent,
    /// Mark of the engine. `X` moves first.
    #[arg(long, default_value = "O")]
    engine: Mark,
    /// Time in ms the engine waits before moving.
    #[arg(long, default_value = "300")]
    delay: u64,
}

fn main() -> io::Result<()> {
    logging();

    let Opts {
        agent,
        engine,
        delay,
    } = Opts::parse();

    let mut game = Game::new(engine, agent);
    info!("AI: {}, playing {}", agent.name(), engine);
    println!("Enter moves as `row col`, `r` restarts, `t` toggles the AI, `q` quits.");
    println!("{:?}", game.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_engine_turn() {
            thread::sleep(Duration::from_millis(delay));
            match game.engine_move() {
                Ok((mv, outcome)) => {
                    println!("{} plays {}", engine, mv);
                    println!("{:?}", game.board());
                    report(&game, outcome);
                }
                Err(e) => {
                    error!("{e}");
                    break;
                }
            }
            continue;
        }

        print!("{} > ", game.turn());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match line?.trim() {
            "" => {}
            "q" | "quit" => break,
            "r" | "restart" => {
                game.restart();
                println!("{:?}", game.board());
            }
            "t" | "toggle" => {
                let agent = game.toggle_agent();
                println!("AI: {}", agent.name());
                println!("{:?}", game.board());
            }
            input => match input.parse::<Move>() {
                Ok(mv) => match game.play(mv) {
                    Ok(outcome) => {
                        println!("{:?}", game.board());
                        report(&game, outcome);
                    }
                    Err(e) => warn!("{e}"),
                },
                Err(e) => warn!("{e}"),
            },
        }
    }
    Ok(())
}

fn report(game: &Game, outcome: Outcome) {
    let message = match outcome {
        Outcome::None => return,
        Outcome::Tie => "It's a tie!".to_string(),
        Outcome::Winner(mark) if mark == game.engine() => "AI wins!".to_string(),
        Outcome::Winner(_) => "Player wins!".to_string(),
    };
    println!("{}", message.bright_green());
    println!("Press `r` to restart or `t` to toggle the AI algorithm");
}
