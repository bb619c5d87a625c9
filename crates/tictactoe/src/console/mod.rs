//! Interactive terminal front end.
//!
//! Reads commands from stdin, forwards them to the session actor and renders
//! the session's events on stdout. Help and input errors go to stderr.

mod input;
mod render;

pub use input::{HELP, Input, InputError};
pub use render::{Cue, Renderer};

use crate::{AppConfig, ChannelNotifier, SessionError, SessionHandle, spawn_session};
use anyhow::Result;
use tictactoe_core::GameSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

/// Runs an interactive game on stdin/stdout until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run(config: &AppConfig) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    play(config, stdin, tokio::io::stdout()).await
}

/// Runs a game reading commands from `input` and rendering to `output`.
pub async fn play<R, W>(config: &AppConfig, input: R, output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin + Send + 'static,
{
    let (notifier, events) = ChannelNotifier::channel();
    let session = match config.seed() {
        Some(seed) => GameSession::with_seed(config.game(), notifier, *seed),
        None => GameSession::new(config.game(), notifier),
    };
    let (handle, actor) = spawn_session(session, config.opponent_delay());
    let renderer = tokio::spawn(Renderer::new(*config.output(), *config.sound()).run(events, output));

    info!("Console session started");
    if *config.output() == crate::OutputFormat::Text {
        eprintln!("{}", HELP);
    }
    handle.reset()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Input>() {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => eprintln!("{}", HELP),
            Ok(command) => apply(&handle, command)?,
            Err(e) => {
                warn!(error = %e, "Rejected input");
                eprintln!("{}", e);
            }
        }
    }

    // Let queued commands, and any reply they schedule, land before shutdown.
    handle.snapshot().await?;
    drop(handle);
    actor.await?;
    renderer.await??;
    info!("Console session ended");
    Ok(())
}

/// Forwards a command to the session. Configuration changes reset the game.
pub fn apply(handle: &SessionHandle, input: Input) -> Result<(), SessionError> {
    match input {
        Input::Move(pos) => handle.play(pos),
        Input::Reset => handle.reset(),
        Input::Mode(mode) => {
            handle.set_mode(mode)?;
            handle.reset()
        }
        Input::Difficulty(difficulty) => {
            handle.set_difficulty(difficulty)?;
            handle.reset()
        }
        Input::FirstMover(first_mover) => {
            handle.set_first_mover(first_mover)?;
            handle.reset()
        }
        Input::ToggleFirstMover => {
            handle.toggle_first_mover()?;
            handle.reset()
        }
        Input::Help | Input::Quit => Ok(()),
    }
}
