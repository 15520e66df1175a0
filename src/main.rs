use std::io::{stdout, BufWriter};

use anyhow::{Context, Result};
use tracing::info;

use line_shooter::compute::{run, Game, ThreadClock};
use line_shooter::config::GameConfig;
use line_shooter::dice::RngDice;
use line_shooter::input::TerminalKeyboard;
use line_shooter::terminal::TerminalGuard;

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::from_args(std::env::args())?;
    info!(?config, "starting");

    let dice = RngDice::from_seed(config.seed);
    let mut game = Game::with_initial_objects(config, dice).context("spawning objects")?;

    // Restores the terminal when it goes out of scope, error or not.
    let mut guard =
        TerminalGuard::enter(BufWriter::new(stdout())).context("preparing terminal")?;

    run(&mut game, &mut TerminalKeyboard, &mut ThreadClock, guard.writer())
}

/// Logs go to stderr so they never interleave with the game line.
fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
