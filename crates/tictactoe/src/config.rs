//! Application configuration loaded from TOML and overridden by the CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{Difficulty, FirstMover, GameConfig, Mode, OPPONENT_DELAY};
use tracing::{debug, info, instrument};

/// How session events are written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Board grid and status line.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration for a play session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Human-vs-human or human-vs-computer.
    mode: Mode,

    /// Computer difficulty tier.
    difficulty: Difficulty,

    /// Who opens against the computer.
    first_mover: FirstMover,

    /// Pause before the computer answers, in milliseconds.
    opponent_delay_ms: u64,

    /// Seed for the computer's random choices; entropy when absent.
    seed: Option<u64>,

    /// Event rendering on stdout.
    output: OutputFormat,

    /// Terminal bell cues for moves and wins.
    sound: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            first_mover: FirstMover::default(),
            opponent_delay_ms: u64::try_from(OPPONENT_DELAY.as_millis()).unwrap_or(u64::MAX),
            seed: None,
            output: OutputFormat::default(),
            sound: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The game settings a session starts with.
    pub fn game(&self) -> GameConfig {
        GameConfig::new(self.mode, self.difficulty, self.first_mover)
    }

    /// Pause before the computer answers.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets who opens.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Sets the computer's reply delay.
    pub fn with_opponent_delay_ms(mut self, ms: u64) -> Self {
        self.opponent_delay_ms = ms;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables sound cues.
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.game(), GameConfig::default());
        assert_eq!(config.opponent_delay(), Duration::from_millis(320));
        assert_eq!(*config.opponent_delay_ms(), 320);
        assert!(*config.sound());
        assert_eq!(*config.output(), OutputFormat::Text);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
mode = "vs-opponent"
difficulty = "hard"
first_mover = "opponent"
seed = 7
output = "json"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.game(),
            GameConfig::new(Mode::VsOpponent, Difficulty::Hard, FirstMover::Opponent)
        );
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.output(), OutputFormat::Json);
        assert_eq!(*config.opponent_delay_ms(), 320);
        assert!(*config.sound());
    }

    #[test]
    fn test_from_file_rejects_unknown_difficulty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"difficulty = "impossible""#).unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"), "{}", err);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"), "{}", err);
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_mode(Mode::VsOpponent)
            .with_difficulty(Difficulty::Medium)
            .with_opponent_delay_ms(0)
            .with_sound(false);
        assert_eq!(*config.mode(), Mode::VsOpponent);
        assert_eq!(config.opponent_delay(), Duration::ZERO);
        assert!(!*config.sound());
    }
}
