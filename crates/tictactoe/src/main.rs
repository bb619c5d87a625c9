//! Tic-tac-toe - unified CLI
//!
//! Interactive play against a friend or the computer, and computer duels.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{AppConfig, console, run_duel};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            let config = args.apply(config);
            info!(?config, "Starting interactive game");
            console::run(&config).await
        }
        Command::Duel { x, o, games, seed } => {
            info!(%x, %o, games, "Starting duel");
            let tally = tokio::task::spawn_blocking(move || run_duel(x, o, games, seed)).await??;
            println!("X ({}) vs O ({}): {}", x, o, tally);
            Ok(())
        }
    }
}
