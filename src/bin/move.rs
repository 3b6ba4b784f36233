use clap::Parser;
use log::{error, info};

use tictac::agents::Agent;
use tictac::game::{Board, Mark};
use tictac::logging;

#[derive(Parser)]
#[command(name = "tictac move", about = "Compute the best move for a board.")]
struct Opts {
    /// Search algorithm (`minimax` or `alphabeta`).
    #[arg(long, default_value_t)]
    agent: Agent,
    /// Mark to search a move for. Defaults to the side to move.
    #[arg(long)]
    mark: Option<Mark>,
    /// Evaluate the root moves in parallel.
    #[arg(long)]
    parallel: bool,
    /// Board rows like `X.O/.X./...`.
    board: Board,
}

#[tokio::main]
async fn main() {
    logging();

    let Opts {
        agent,
        mark,
        parallel,
        board,
    } = Opts::parse();

    let mark = mark.unwrap_or_else(|| board.next_mark());
    info!("{:?}", board);

    let result = if parallel {
        agent.async_search(&board, mark).await
    } else {
        agent.search(&board, mark)
    };

    match result {
        Ok(result) => {
            info!("Step: {} score={} nodes={}", result.mv, result.score, result.nodes);
            match serde_json::to_string(&result.mv) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("{e}"),
            }
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
