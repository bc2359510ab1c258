//! Parchís CLI - play, watch and analyse matches in the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use parchis::FieldSize;
use std::process::ExitCode;

/// Parchís - a deterministic two-player race game
#[derive(Parser, Debug)]
#[command(name = "parchis")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single match
    Run {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text, json, or summary
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the result
        #[arg(short, long)]
        quiet: bool,

        /// Type out status messages and redraw the board in place
        #[arg(short, long, conflicts_with = "quiet")]
        animate: bool,
    },

    /// Interactive TUI to watch a match turn by turn
    Watch {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Turn delay in milliseconds (default: 500)
        #[arg(long, default_value = "500")]
        speed: u64,
    },

    /// Replay a match from its seed
    Replay {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Seed of the match
        #[arg(short, long, required = true)]
        seed: u64,

        /// Stop at this turn (default: the end of the match)
        #[arg(long)]
        turn: Option<u32>,

        /// Output format: text or summary
        #[arg(short, long, default_value = "text")]
        format: cli::ReplayFormat,
    },

    /// Run many matches in parallel and aggregate statistics
    Tournament {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::TournamentFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Print the cells a side walks from its entry to the center
    Track {
        /// Board edge length: odd, between 5 and 21
        #[arg(short = 'n', long)]
        size: Option<FieldSize>,

        /// Which side's path to print
        #[arg(long, value_enum, default_value = "a")]
        side: cli::SideArg,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::logger::init(args.verbose);

    let result = match args.command {
        Commands::Run {
            board,
            seed,
            format,
            quiet,
            animate,
        } => cli::run::execute(board, seed, format, quiet, animate),

        Commands::Watch { board, seed, speed } => cli::watch::execute(board, seed, speed),

        Commands::Replay {
            board,
            seed,
            turn,
            format,
        } => cli::replay::execute(board, seed, turn, format),

        Commands::Tournament {
            board,
            games,
            seed,
            threads,
            format,
            progress,
        } => cli::tournament::execute(board, games, seed, threads, format, progress),

        Commands::Track { size, side } => {
            cli::track::execute(size, side);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let args = Args::try_parse_from([
            "parchis", "-vv", "run", "-n", "7", "--steps", "rolled", "-t", "50", "--seed", "3",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let Commands::Run { board, seed, .. } = args.command else {
            panic!("expected run");
        };
        assert_eq!(board.size.map(FieldSize::get), Some(7));
        assert_eq!(board.max_turns, 50);
        assert_eq!(seed, Some(3));
    }

    #[test]
    fn test_rejects_even_size() {
        assert!(Args::try_parse_from(["parchis", "track", "-n", "8"]).is_err());
    }
}
