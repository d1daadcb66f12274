//! tictactoe - terminal front-end
//!
//! Interactive two-player games and random self-play.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tictactoe_console::{
    ConsoleView, RandomMover, load_config, run_autoplay, run_interactive, write_json_lines,
};
use tictactoe_engine::{EventLog, GameConfig, RandomStarter, TurnController};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            first,
            second,
            seed,
        } => run_play(config, &first, &second, seed),
        Command::Auto { games, seed, json } => run_auto(config, games, seed, json),
    }
}

fn starter(seed: Option<u64>) -> RandomStarter<StdRng> {
    match seed {
        Some(seed) => RandomStarter::seeded(seed),
        None => RandomStarter::from_entropy(),
    }
}

/// Interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig, first: &str, second: &str, seed: Option<u64>) -> Result<()> {
    info!("Starting interactive game");
    let view = ConsoleView::new(io::stdout(), &config);
    let mut game = TurnController::new(config, view, starter(seed));
    game.start_game(first, second);
    run_interactive(&mut game, io::stdin().lock())
}

/// Random self-play, rendered or as a JSON event stream
#[instrument(skip(config))]
fn run_auto(config: GameConfig, games: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let mut mover = RandomMover::new(match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    });
    let names = (config.default_names()[0].clone(), config.default_names()[1].clone());
    let names = (names.0.as_str(), names.1.as_str());

    let summary = if json {
        let mut game = TurnController::new(config, EventLog::new(), starter(seed));
        let mut out = io::stdout().lock();
        run_autoplay(&mut game, &mut mover, names, games, |game, _| {
            write_json_lines(game.view_mut(), &mut out)
        })?
    } else {
        let view = ConsoleView::new(io::stdout(), &config);
        let mut game = TurnController::new(config, view, starter(seed));
        run_autoplay(&mut game, &mut mover, names, games, |_, _| Ok(()))?
    };

    eprintln!("{}", summary);
    Ok(())
}
