//! Authoritative game session: board, turn order, phase and configuration.
//!
//! The session is synchronous. Whenever it becomes the computer's turn an
//! operation hands back a [`PendingTurn`] instead of moving inline; the
//! caller redeems it with [`GameSession::opponent_turn`] after a short delay
//! so the human's move can render first. A ticket from before the latest
//! reset is inert.

mod config;
mod notify;

pub use config::{FirstMover, GameConfig, Mode};
pub use notify::{Notifier, SessionEvent, Status};

use crate::{Board, Mark, Outcome, Position, choose_move, rules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Delay between a placement and the computer's reply.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(320);

/// The human's mark in a game against the computer.
const HUMAN: Mark = Mark::X;

/// The computer's mark.
const OPPONENT: Mark = Mark::O;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but never reset; no moves are accepted.
    Idle,
    /// Moves are accepted.
    Active,
    /// Won or drawn; only a reset leaves this phase.
    Terminal(Outcome),
}

/// Ticket for a deferred computer turn.
///
/// Carries the reset epoch it was issued in, so a ticket that outlives a
/// reset can never place a mark in the new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a pending turn does nothing until redeemed with GameSession::opponent_turn"]
pub struct PendingTurn {
    epoch: u64,
}

/// A single game session, reset in place between games.
#[derive(Debug)]
pub struct GameSession<N> {
    board: Board,
    turn: Mark,
    phase: Phase,
    config: GameConfig,
    epoch: u64,
    rng: StdRng,
    notifier: N,
}

impl<N: Notifier> GameSession<N> {
    /// Creates an idle session with an entropy-seeded random source.
    #[instrument(skip(notifier))]
    pub fn new(config: GameConfig, notifier: N) -> Self {
        Self::with_rng(config, notifier, StdRng::from_os_rng())
    }

    /// Creates an idle session with a fixed seed, for reproducible games.
    #[instrument(skip(notifier))]
    pub fn with_seed(config: GameConfig, notifier: N, seed: u64) -> Self {
        Self::with_rng(config, notifier, StdRng::seed_from_u64(seed))
    }

    /// Creates an idle session with the given random source.
    pub fn with_rng(config: GameConfig, notifier: N, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            turn: HUMAN,
            phase: Phase::Idle,
            config,
            epoch: 0,
            rng,
            notifier,
        }
    }

    /// Starts a fresh game with the current configuration.
    ///
    /// Returns a ticket when the computer opens; schedule it rather than
    /// redeeming it immediately.
    #[instrument(skip(self), fields(epoch = self.epoch + 1))]
    pub fn reset(&mut self) -> Option<PendingTurn> {
        self.board = Board::new();
        self.phase = Phase::Active;
        self.epoch += 1;
        self.turn = if self.config.opponent_opens() { OPPONENT } else { HUMAN };

        info!(config = ?self.config, turn = %self.turn, "Game reset");
        self.notifier.status_changed(Status::Turn(self.turn));
        self.notifier.board_changed(&self.board);

        self.pending_turn()
    }

    /// Places the current player's mark for a human.
    ///
    /// Silently ignored when no game is active, the cell is taken, or the
    /// computer is to move. Returns a ticket when the computer moves next.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn player_move(&mut self, pos: Position) -> Option<PendingTurn> {
        if !self.is_active() {
            debug!(phase = ?self.phase, "Ignoring move: game not active");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring move: square occupied");
            return None;
        }
        if self.is_opponent_to_move() {
            debug!("Ignoring move: opponent's turn");
            return None;
        }

        self.apply_move(pos);
        self.pending_turn()
    }

    /// Redeems a deferred computer turn.
    ///
    /// Inert unless the ticket belongs to the current game and the computer
    /// is still to move. Returns the position played.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn opponent_turn(&mut self, ticket: PendingTurn) -> Option<Position> {
        if ticket.epoch != self.epoch {
            debug!(ticket = ticket.epoch, "Discarding stale opponent turn");
            return None;
        }
        if !self.is_active() || !self.is_opponent_to_move() {
            debug!(phase = ?self.phase, turn = %self.turn, "Discarding opponent turn");
            return None;
        }

        let difficulty = *self.config.difficulty();
        let Some(pos) = choose_move(&self.board, difficulty, OPPONENT, &mut self.rng) else {
            warn!("Opponent found no move on an active board");
            return None;
        };
        info!(%difficulty, position = %pos, "Opponent moved");
        self.apply_move(pos);
        Some(pos)
    }

    /// Sets the mode; takes effect on the next reset.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.set_mode(mode);
    }

    /// Sets the difficulty; takes effect on the next reset.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: crate::Difficulty) {
        self.config.set_difficulty(difficulty);
    }

    /// Sets who opens; takes effect on the next reset.
    #[instrument(skip(self))]
    pub fn set_first_mover(&mut self, first_mover: FirstMover) {
        self.config.set_first_mover(first_mover);
    }

    /// Swaps who opens; takes effect on the next reset.
    #[instrument(skip(self))]
    pub fn toggle_first_mover(&mut self) {
        let first_mover = self.config.first_mover().toggle();
        self.config.set_first_mover(first_mover);
    }

    /// Places `turn`'s mark, then either ends the game or passes the turn.
    fn apply_move(&mut self, pos: Position) {
        let mark = self.turn;
        if let Err(e) = self.board.place(pos, mark) {
            warn!(error = %e, "Move rejected by board");
            return;
        }
        debug!(%mark, position = %pos, "Mark placed");
        self.notifier.board_changed(&self.board);

        if let Some(outcome) = rules::outcome(&self.board) {
            info!(%outcome, "Game over");
            self.phase = Phase::Terminal(outcome);
            self.notifier.status_changed(outcome.into());
            return;
        }

        self.turn = mark.opponent();
        self.notifier.status_changed(Status::Turn(self.turn));
    }

    fn is_opponent_to_move(&self) -> bool {
        *self.config.mode() == Mode::VsOpponent && self.turn == OPPONENT
    }

    fn pending_turn(&self) -> Option<PendingTurn> {
        (self.is_active() && self.is_opponent_to_move()).then_some(PendingTurn { epoch: self.epoch })
    }
}

impl<N> GameSession<N> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that places next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
