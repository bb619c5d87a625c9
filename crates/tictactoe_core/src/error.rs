//! Board error types.

use crate::Position;

/// Error that can occur when addressing or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A raw index outside `0..=8`.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell at the position already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// A board string could not be parsed.
    #[display("Invalid board: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}
