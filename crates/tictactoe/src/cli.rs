//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{AppConfig, OutputFormat};
use tictactoe_core::{Difficulty, FirstMover, Mode};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a three-tier computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play(PlayArgs),

    /// Pit two computer tiers against each other
    Duel {
        /// Tier playing X (moves first)
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Tier playing O
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Overrides for an interactive game; unset flags keep the config file value.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// pvp or vs-opponent
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// human or opponent
    #[arg(short, long)]
    pub first: Option<FirstMover>,

    /// Computer reply delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit events as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Disable bell cues
    #[arg(long)]
    pub mute: bool,
}

impl PlayArgs {
    /// Layers these flags over a loaded config.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(first) = self.first {
            config = config.with_first_mover(first);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_opponent_delay_ms(ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.json {
            config = config.with_output(OutputFormat::Json);
        }
        if self.mute {
            config = config.with_sound(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Play(_)));
    }

    #[test]
    fn test_play_flags_override_config() {
        let cli = Cli::parse_from([
            "tictactoe", "play", "--mode", "vs", "-d", "hard", "--first", "opponent", "--json", "--mute",
        ]);
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        let config = args.apply(AppConfig::default());
        assert_eq!(*config.mode(), Mode::VsOpponent);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.first_mover(), FirstMover::Opponent);
        assert_eq!(*config.output(), OutputFormat::Json);
        assert!(!*config.sound());
    }

    #[test]
    fn test_duel_args() {
        let cli = Cli::parse_from(["tictactoe", "duel", "-x", "easy", "--games", "5"]);
        match cli.command {
            Some(Command::Duel { x, o, games, seed }) => {
                assert_eq!(x, Difficulty::Easy);
                assert_eq!(o, Difficulty::Hard);
                assert_eq!(games, 5);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "brutal"]).is_err());
    }
}
