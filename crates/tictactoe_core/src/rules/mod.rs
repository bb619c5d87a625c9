//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The session runs
//! [`outcome`] after every placement; the opponent strategies use the same
//! functions on their working copies.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{LINES, Line};
pub use win::winner;

use crate::{Board, Outcome};

/// Terminal state of the board, if any.
///
/// A completed line wins; otherwise a full board is a draw.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = winner(board) {
        Some(Outcome::Winner(mark))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_outcome_in_progress() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_outcome_prefers_win_on_full_board() {
        // X completes the left column with the last cell
        let board: Board = "XOO XXO XOX".parse().unwrap();
        assert_eq!(outcome(&board), Some(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_outcome_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }
}
