//! Tic-tac-toe core - board, rules, opponent strategies and game session.
//!
//! This crate has no runtime or I/O dependencies. Presentation layers drive a
//! [`GameSession`] with player moves and configuration changes and receive
//! board and status notifications through a [`Notifier`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Mark`] and the named [`Position`]s
//! - **Rules**: line table and terminal detection ([`rules`])
//! - **Opponent**: three difficulty tiers behind [`choose_move`]
//! - **Session**: the authoritative game state machine
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameConfig, GameSession, Mark, Position, Status, SessionEvent};
//!
//! let mut session = GameSession::new(GameConfig::default(), Vec::<SessionEvent>::new());
//! session.reset();
//! session.player_move(Position::Center);
//! assert_eq!(session.turn(), Mark::O);
//! assert_eq!(
//!     session.notifier().last(),
//!     Some(&SessionEvent::StatusChanged { status: Status::Turn(Mark::O) })
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Board types
pub use error::BoardError;
pub use position::Position;
pub use types::{Board, Cell, Mark};

// Crate-level exports - Terminal detection
pub use outcome::Outcome;

// Crate-level exports - Opponent strategies
pub use opponent::{Difficulty, FORK_TRIPLES, Rule, choose_move};

// Crate-level exports - Session state machine
pub use session::{
    FirstMover, GameConfig, GameSession, Mode, Notifier, OPPONENT_DELAY, PendingTurn, Phase,
    SessionEvent, Status,
};
