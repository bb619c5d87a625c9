//! Outbound notifications from a session to its presentation layer.

use crate::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};

/// Status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "mark", rename_all = "lowercase")]
pub enum Status {
    /// `mark` places next.
    Turn(Mark),
    /// `mark` completed a line.
    Won(Mark),
    /// The board filled without a winner.
    Draw,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(mark) => Status::Won(mark),
            Outcome::Draw => Status::Draw,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(mark) => write!(f, "Current turn: {}", mark),
            Status::Won(mark) => write!(f, "{} wins!", mark),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// A single notification, in the order the session emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Full board snapshot after a change.
    BoardChanged {
        /// The board as it now stands.
        board: Board,
    },
    /// New status line.
    StatusChanged {
        /// The status.
        status: Status,
    },
}

/// Receiver of session notifications.
///
/// These two callbacks are the entire contract between the game core and
/// whatever renders it.
pub trait Notifier {
    /// The board changed; `board` is the complete new snapshot.
    fn board_changed(&mut self, board: &Board);

    /// The status line changed.
    fn status_changed(&mut self, status: Status);
}

/// Silent notifier.
impl Notifier for () {
    fn board_changed(&mut self, _board: &Board) {}

    fn status_changed(&mut self, _status: Status) {}
}

/// Recording notifier.
impl Notifier for Vec<SessionEvent> {
    fn board_changed(&mut self, board: &Board) {
        self.push(SessionEvent::BoardChanged { board: *board });
    }

    fn status_changed(&mut self, status: Status) {
        self.push(SessionEvent::StatusChanged { status });
    }
}
