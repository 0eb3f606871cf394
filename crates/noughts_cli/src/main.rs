//! Noughts - hot-seat tic-tac-toe binary

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts_cli::logging::{BOOTSTRAP_FILTER, env_filter, subscriber};
use noughts_cli::{Console, Finish, MatchConfig, outcome_message, replay};
use std::io;
use tracing::{info, instrument, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Config decides the log filter, so loading it is logged through a
    // temporary subscriber.
    let bootstrap = subscriber(env_filter(BOOTSTRAP_FILTER), io::stderr);
    let config = tracing::subscriber::with_default(bootstrap, || MatchConfig::load(&cli.config))?;
    let config = config.apply_env().with_overrides(cli.first, cli.second);

    initialize_tracing(config.log_filter())?;
    info!(?config, "Configuration resolved");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

fn initialize_tracing(default_filter: &str) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(env_filter(default_filter), io::stderr))?;
    Ok(())
}

/// Run an interactive match on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &MatchConfig) -> Result<()> {
    let mut game = config.new_game();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match console.run(&mut game)? {
        Finish::Completed(status) => info!(%status, "Match completed"),
        Finish::Abandoned => warn!("Match abandoned"),
    }
    Ok(())
}

/// Replay a scripted move list and print the result
#[instrument(skip(config))]
fn run_replay(config: &MatchConfig, moves: &[usize], json: bool) -> Result<()> {
    let mut game = config.new_game();
    let result = replay(&mut game, moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    for (position, error) in &result.rejected {
        println!("Skipped move {position}: {error}");
    }
    println!("{}", game.board());
    match outcome_message(&game) {
        Some(message) => println!("{message}"),
        None => println!("Next: {}", game.current_player()),
    }
    Ok(())
}
