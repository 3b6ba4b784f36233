//! Exhaustive minimax and alpha-beta search for tic-tac-toe.

use env_logger::fmt::Formatter;
use owo_colors::{AnsiColors, OwoColorize};
use std::io::Write;

// Exported for the binaries and benchmarks
pub mod agents;
pub mod env;
pub mod game;
pub mod search;

/// Log filter used when `RUST_LOG` is not set.
/// Info for the library and its binaries, warnings for dependencies.
pub const DEFAULT_FILTER: &str = "warn,tictac=info,play=info,move=info,simulate=info";

/// Initializes the colored logger, `RUST_LOG` overrides [`DEFAULT_FILTER`].
/// Calling it more than once is harmless.
pub fn logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .is_test(cfg!(test))
        .format(logging_format)
        .try_init();
}

fn logging_format(buf: &mut Formatter, record: &log::Record) -> std::io::Result<()> {
    let color = match record.level() {
        log::Level::Error => AnsiColors::BrightRed,
        log::Level::Warn => AnsiColors::BrightYellow,
        log::Level::Info => AnsiColors::BrightBlack,
        log::Level::Debug | log::Level::Trace => AnsiColors::Blue,
    };

    writeln!(
        buf,
        "{}",
        format_args!(
            "[{:5} {}:{}] {}",
            record.level(),
            short_target(record.target()),
            record.line().unwrap_or_default(),
            record.args()
        )
        .color(color)
    )
}

/// Strips the crate prefix from a module path: `tictac::search::minimax` -> `search::minimax`.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(env!("CARGO_CRATE_NAME"))
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

#[cfg(test)]
mod test {
    #[test]
    fn log_target() {
        use super::short_target;
        assert_eq!(short_target("tictac::search::minimax"), "search::minimax");
        assert_eq!(short_target("tictac"), "tictac");
        assert_eq!(short_target("play"), "play");
        assert_eq!(short_target("tokio::runtime"), "tokio::runtime");
    }

    #[test]
    fn logging_twice() {
        super::logging();
        super::logging();
        log::info!("logger initialized");
    }
}
