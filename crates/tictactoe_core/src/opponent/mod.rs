//! Computer opponent: difficulty tiers and move selection.
//!
//! Each tier is an ordered list of [`Rule`]s. A rule either proposes a
//! position or passes; the first proposal wins.

mod heuristics;
mod minimax;

pub use heuristics::FORK_TRIPLES;

use crate::{Board, Mark, Position, rules};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opponent difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Win, block, otherwise random.
    #[default]
    Easy,
    /// Win, block a known fork, block, otherwise random.
    Medium,
    /// Perfect play by exhaustive search.
    Hard,
}

impl Difficulty {
    /// The fallback chain for this tier, highest priority first.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Difficulty::Easy => &[Rule::Win, Rule::Block, Rule::Random],
            Difficulty::Medium => &[Rule::Win, Rule::BlockFork, Rule::Block, Rule::Random],
            Difficulty::Hard => &[Rule::Minimax],
        }
    }
}

/// One step of a tier's fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Rule {
    /// Complete a line for the mover.
    Win,
    /// Take the third cell of a hard-coded fork triple held by the other mark.
    BlockFork,
    /// Complete a line for the other mark, denying its immediate win.
    Block,
    /// Any empty cell, uniformly at random.
    Random,
    /// Best cell by exhaustive minimax.
    Minimax,
}

impl Rule {
    /// Proposes a position for `mover`, or passes with `None`.
    pub fn apply<R: Rng + ?Sized>(self, board: &Board, mover: Mark, rng: &mut R) -> Option<Position> {
        match self {
            Rule::Win => heuristics::completing_move(board, mover),
            Rule::BlockFork => heuristics::fork_block(board, mover.opponent()),
            Rule::Block => heuristics::completing_move(board, mover.opponent()),
            Rule::Random => heuristics::random_move(board, rng),
            Rule::Minimax => minimax::best_move(board, mover),
        }
    }
}

/// Chooses the next move for `mover` at the given difficulty.
///
/// The board is only read. Returns `None` when the board is full.
#[instrument(skip(board, rng), fields(filled = 9 - board.empty_positions().count()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    mover: Mark,
    rng: &mut R,
) -> Option<Position> {
    if rules::is_full(board) {
        debug!("Board full, no move available");
        return None;
    }

    difficulty.rules().iter().find_map(|rule| {
        let choice = rule.apply(board, mover, &mut *rng)?;
        debug!(%rule, position = %choice, "Opponent rule fired");
        Some(choice)
    })
}
