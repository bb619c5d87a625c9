//! Parsing of console command lines.

use std::str::FromStr;
use tictactoe_core::{BoardError, Difficulty, FirstMover, Mode, Position};

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  0-8 or a label (e.g. center, top-left)   place a mark
  reset | r                                 start a new game
  mode pvp|vs                               two players or against the computer
  difficulty easy|medium|hard               computer strength
  first [human|opponent]                    who opens against the computer;
                                            alone, swaps who opens
  help | ?                                  show this help
  quit | q                                  leave";

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Position),
    /// Start a new game.
    Reset,
    /// Change mode, then reset.
    Mode(Mode),
    /// Change difficulty, then reset.
    Difficulty(Difficulty),
    /// Change who opens, then reset.
    FirstMover(FirstMover),
    /// Swap who opens, then reset.
    ToggleFirstMover,
    /// Show commands.
    Help,
    /// Leave.
    Quit,
}

/// Error for a line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// A square number outside the board.
    #[display("{}", _0)]
    Board(BoardError),

    /// A known command with a bad or missing argument.
    #[display("Invalid {} {:?}; expected one of: {}", command, value, expected)]
    Argument {
        /// The command word.
        command: &'static str,
        /// What was given.
        value: String,
        /// What is accepted.
        expected: &'static str,
    },

    /// Nothing recognisable.
    #[display("Unknown command {:?} (type 'help' for commands)", _0)]
    Unknown(String),
}

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        match command.as_str() {
            "reset" | "r" | "new" => Ok(Input::Reset),
            "help" | "h" | "?" => Ok(Input::Help),
            "quit" | "q" | "exit" => Ok(Input::Quit),
            "mode" => argument("mode", &rest, "pvp, vs").map(Input::Mode),
            "difficulty" | "level" => {
                argument("difficulty", &rest, "easy, medium, hard").map(Input::Difficulty)
            }
            "first" if rest.is_empty() => Ok(Input::ToggleFirstMover),
            "first" => argument("first", &rest, "human, opponent").map(Input::FirstMover),
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    return Position::try_from(index)
                        .map(Input::Move)
                        .map_err(InputError::Board);
                }
                Position::from_label_or_number(line)
                    .map(Input::Move)
                    .ok_or_else(|| InputError::Unknown(line.to_string()))
            }
        }
    }
}

fn argument<T: FromStr>(
    command: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::Argument {
        command,
        value: value.to_string(),
        expected,
    })
}
