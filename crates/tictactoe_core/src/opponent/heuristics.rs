//! Rule-of-thumb moves used by the easy and medium tiers.

use crate::rules::LINES;
use crate::{Board, Cell, Mark, Position};
use rand::Rng;
use tracing::instrument;

/// Corner-corner-center patterns the medium tier watches for.
///
/// If the other mark holds the first two positions and the third is empty,
/// the third is taken. This covers only these four shapes and is not a
/// general fork detector.
pub const FORK_TRIPLES: [[Position; 3]; 4] = [
    [Position::TopLeft, Position::TopRight, Position::Center],
    [Position::TopRight, Position::BottomRight, Position::Center],
    [Position::BottomLeft, Position::BottomRight, Position::Center],
    [Position::TopLeft, Position::BottomLeft, Position::Center],
];

/// First line with two `mark` cells and one empty cell: the empty cell.
#[instrument(level = "trace", skip(board))]
pub(super) fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Cell::Occupied(mark))
            .count();
        if owned != 2 {
            return None;
        }
        line.iter().copied().find(|pos| board.is_empty(*pos))
    })
}

/// Third cell of the first fork triple whose first two cells hold `mark`.
#[instrument(level = "trace", skip(board))]
pub(super) fn fork_block(board: &Board, mark: Mark) -> Option<Position> {
    FORK_TRIPLES.iter().find_map(|[a, b, c]| {
        let held = board.get(*a) == Cell::Occupied(mark) && board.get(*b) == Cell::Occupied(mark);
        (held && board.is_empty(*c)).then_some(*c)
    })
}

/// Uniformly random empty cell.
#[instrument(level = "trace", skip_all)]
pub(super) fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty: Vec<Position> = board.empty_positions().collect();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}
