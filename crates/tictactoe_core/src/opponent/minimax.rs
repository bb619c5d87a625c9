//! Exhaustive minimax for the hard tier.
//!
//! The 3x3 tree is small enough to search completely without pruning.
//! Scores are from the mover's point of view and weighted by depth so that
//! faster wins and slower losses rank higher.

use crate::{Board, Mark, Outcome, Position, rules};
use tracing::trace;

const WIN: i32 = 10;

/// Best position for `mover`, or `None` on a full board.
///
/// Candidates are evaluated in increasing index order and only a strictly
/// greater score replaces the current best, so ties keep the lowest index.
pub(super) fn best_move(board: &Board, mover: Mark) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for (pos, next) in board.successors(mover) {
        let score = minimax(&next, mover, 0, false);
        trace!(position = %pos, score, "Scored root move");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Value of `board` for `mover`, `depth` plies below the root move.
fn minimax(board: &Board, mover: Mark, depth: i32, maximizing: bool) -> i32 {
    match rules::outcome(board) {
        Some(Outcome::Winner(mark)) if mark == mover => return WIN - depth,
        Some(Outcome::Winner(_)) => return depth - WIN,
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    let to_play = if maximizing { mover } else { mover.opponent() };
    let scores = board
        .successors(to_play)
        .map(|(_, next)| minimax(&next, mover, depth + 1, !maximizing));

    // A non-terminal board always has a successor.
    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
