//! CLI command implementations for Parchís.

pub(crate) mod logger;
pub(crate) mod prompt;
pub(crate) mod replay;
pub(crate) mod run;
pub(crate) mod tournament;
pub(crate) mod track;
pub(crate) mod watch;

mod output;

use clap::{Args, ValueEnum};
use parchis::config::DEFAULT_MAX_TURNS;
use parchis::{FieldSize, MatchConfig, Side, StepRule};
use std::error::Error;
use std::fmt;

/// Board options shared by every command that plays matches.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct BoardArgs {
    /// Board edge length: odd, between 5 and 21
    #[arg(short = 'n', long)]
    pub(crate) size: Option<FieldSize>,

    /// How far pawns move: always six cells, or the rolled value
    #[arg(long, value_enum, default_value = "fixed")]
    pub(crate) steps: StepsArg,

    /// Turns before an undecided match is a draw (0 = no cap)
    #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TURNS)]
    pub(crate) max_turns: u32,
}

impl BoardArgs {
    /// Match configuration, using `size` when no size was given.
    pub(crate) fn config_with(&self, size: FieldSize) -> MatchConfig {
        MatchConfig {
            field_size: self.size.unwrap_or(size),
            step_rule: self.steps.into(),
            max_turns: self.max_turns,
        }
    }

    /// Match configuration, defaulting to an 11x11 board.
    pub(crate) fn config(&self) -> MatchConfig {
        self.config_with(FieldSize::default())
    }
}

/// Step rule as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StepsArg {
    /// Every move is six cells, whatever the die shows.
    Fixed,
    /// A non-six roll moves by the rolled value.
    Rolled,
}

impl From<StepsArg> for StepRule {
    fn from(arg: StepsArg) -> Self {
        match arg {
            StepsArg::Fixed => Self::Fixed,
            StepsArg::Rolled => Self::Rolled,
        }
    }
}

/// Side as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SideArg {
    /// Side A, entering from the top edge.
    A,
    /// Side B, entering from the bottom edge.
    B,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::A => Self::A,
            SideArg::B => Self::B,
        }
    }
}

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Board and status line after every event.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// Structured summary of the final state.
    Summary,
}

/// Output format for the `replay` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReplayFormat {
    /// Colored board with side statistics.
    Text,
    /// Structured plain text.
    Summary,
}

/// Output format for the `tournament` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TournamentFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Seed to use when none was given.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<parchis::replay::ReplayError> for CliError {
    fn from(e: parchis::replay::ReplayError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_args_config() {
        let args = BoardArgs {
            size: None,
            steps: StepsArg::Rolled,
            max_turns: 20,
        };
        let config = args.config();
        assert_eq!(config.field_size, FieldSize::default());
        assert_eq!(config.step_rule, StepRule::Rolled);
        assert_eq!(config.max_turns, 20);

        let size = FieldSize::new(7).unwrap();
        assert_eq!(args.config_with(size).field_size, size);
    }

    #[test]
    fn test_resolve_seed_keeps_given_seed() {
        assert_eq!(resolve_seed(Some(9)), 9);
    }
}
