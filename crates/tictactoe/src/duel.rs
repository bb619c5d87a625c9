//! Computer-vs-computer matches between difficulty tiers.

use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_core::{Board, BoardError, Difficulty, Mark, Outcome, choose_move, rules};
use tracing::{debug, info, instrument};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct DuelTally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl DuelTally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for DuelTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game, X opening, each side choosing at its own tier.
pub fn play_game<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, rng: &mut R) -> Result<Outcome, BoardError> {
    let mut board = Board::new();
    let mut mover = Mark::X;
    loop {
        if let Some(outcome) = rules::outcome(&board) {
            return Ok(outcome);
        }
        let tier = match mover {
            Mark::X => x,
            Mark::O => o,
        };
        let Some(pos) = choose_move(&board, tier, mover, rng) else {
            return Ok(Outcome::Draw);
        };
        board.place(pos, mover)?;
        mover = mover.opponent();
    }
}

/// Plays `games` games and tallies the outcomes.
#[instrument]
pub fn run_duel(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>) -> Result<DuelTally, BoardError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut tally = DuelTally::default();
    for game in 0..games {
        let outcome = play_game(x, o, &mut rng)?;
        debug!(game, %outcome, "Duel game finished");
        tally.record(outcome);
    }
    info!(%tally, "Duel finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_vs_hard_always_draws() {
        let tally = run_duel(Difficulty::Hard, Difficulty::Hard, 2, Some(1)).unwrap();
        assert_eq!(*tally.draws(), 2);
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let tally = run_duel(Difficulty::Easy, Difficulty::Hard, 20, Some(5)).unwrap();
        assert_eq!(*tally.x_wins(), 0);
        assert_eq!(tally.games(), 20);
    }

    #[test]
    fn test_tally_display() {
        let mut tally = DuelTally::default();
        tally.record(Outcome::Winner(Mark::X));
        tally.record(Outcome::Draw);
        tally.record(Outcome::Winner(Mark::O));
        tally.record(Outcome::Winner(Mark::O));
        assert_eq!((*tally.x_wins(), *tally.o_wins(), *tally.draws()), (1, 2, 1));
        assert_eq!(tally.to_string(), "4 games: X won 1, O won 2, 1 drawn");
    }
}
