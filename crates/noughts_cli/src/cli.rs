//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Hot-seat tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the match configuration file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Name of the first player (plays X), overriding config and environment
    #[arg(long, global = true)]
    pub first: Option<String>,

    /// Name of the second player (plays O), overriding config and environment
    #[arg(long, global = true)]
    pub second: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match on this terminal
    Play,

    /// Play a fixed list of moves and print the final board
    Replay {
        /// Comma-separated cell indices (0-8), alternating players
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final match as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
