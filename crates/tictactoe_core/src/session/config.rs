//! Session configuration.

use crate::Difficulty;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays against whom.
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
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "pvp")]
    Pvp,
    /// A human plays X against the computer playing O.
    #[strum(to_string = "vs-opponent", serialize = "vs", serialize = "ai")]
    VsOpponent,
}

/// Which side opens a game against the computer.
///
/// Defaults to [`FirstMover::Human`]. Ignored in [`Mode::Pvp`], where X
/// always opens.
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
pub enum FirstMover {
    /// The human opens as X.
    #[default]
    Human,
    /// The computer opens as O.
    Opponent,
}

impl FirstMover {
    /// Toggles between `Human` and `Opponent`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Opponent,
            Self::Opponent => Self::Human,
        }
    }
}

/// Game configuration. Changes apply from the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human-vs-human or human-vs-computer.
    #[serde(default)]
    mode: Mode,
    /// Computer difficulty tier.
    #[serde(default)]
    difficulty: Difficulty,
    /// Who opens against the computer.
    #[serde(default)]
    first_mover: FirstMover,
}

impl GameConfig {
    /// Creates a configuration from its parts.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Difficulty, first_mover: FirstMover) -> Self {
        Self {
            mode,
            difficulty,
            first_mover,
        }
    }

    /// Sets the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Sets the difficulty tier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Sets who opens against the computer.
    pub fn set_first_mover(&mut self, first_mover: FirstMover) {
        self.first_mover = first_mover;
    }

    /// True when the computer opens the game.
    pub fn opponent_opens(&self) -> bool {
        self.mode == Mode::VsOpponent && self.first_mover == FirstMover::Opponent
    }
}
