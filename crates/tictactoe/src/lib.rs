//! Terminal tic-tac-toe built on [`tictactoe_core`].
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Actor**: one task owns the [`GameSession`](tictactoe_core::GameSession)
//!   and schedules the computer's deferred replies
//! - **Console**: stdin commands in, rendered events out
//! - **Duel**: computer-vs-computer series between tiers
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{ChannelNotifier, spawn_session};
//! use tictactoe_core::{GameConfig, GameSession, OPPONENT_DELAY};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (notifier, mut events) = ChannelNotifier::channel();
//! let session = GameSession::new(GameConfig::default(), notifier);
//! let (handle, _task) = spawn_session(session, OPPONENT_DELAY);
//! handle.reset()?;
//! handle.player_move(4)?;
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod actor;
mod config;
pub mod console;
mod duel;
mod error;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, OutputFormat};

// Crate-level exports - Session actor
pub use actor::{ChannelNotifier, SessionHandle, Snapshot, spawn_session};
pub use error::SessionError;

// Crate-level exports - Duels
pub use duel::{DuelTally, play_game, run_duel};
