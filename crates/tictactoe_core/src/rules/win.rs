//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::{Board, Cell, Mark};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) holding
/// three equal marks, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|[a, b, c]| {
        let cell = board.get(*a);
        match cell {
            Cell::Occupied(mark) if cell == board.get(*b) && cell == board.get(*c) => Some(mark),
            _ => None,
        }
    })
}
