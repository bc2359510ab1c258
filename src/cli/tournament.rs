//! Tournament command implementation.

#![allow(clippy::cast_precision_loss)]

use super::output::{
    JsonTournamentResult, TournamentStats, format_tournament_csv, format_tournament_text,
};
use super::{BoardArgs, CliError, TournamentFormat, resolve_seed};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use parchis::tournament::run_game;
use rayon::prelude::*;
use std::time::Instant;

/// Execute the tournament command.
///
/// Game `i` is played with seed `seed + i`, so a tournament is reproducible
/// whatever the thread count.
///
/// # Errors
///
/// Returns an error if the progress template or JSON output fails.
pub(crate) fn execute(
    board: BoardArgs,
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    format: TournamentFormat,
    progress: bool,
) -> Result<(), CliError> {
    if let Some(num_threads) = threads
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
    {
        warn!("thread pool already initialized: {e}");
    }

    let base_seed = resolve_seed(seed);
    let config = board.config();
    info!("tournament of {games} games from seed {base_seed}");

    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})",
                )
                .map_err(|e| CliError::new(format!("bad progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let stats = (0..games)
        .into_par_iter()
        .fold(TournamentStats::default, |mut local, i| {
            local.add_result(&run_game(base_seed.wrapping_add(i), &config));
            local
        })
        .reduce(TournamentStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        TournamentFormat::Text => {
            println!();
            print!("{}", format_tournament_text(&stats));
            println!();
            println!(
                "Duration: {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        TournamentFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonTournamentResult::from_stats(&stats))?;
            println!("{json}");
        }
        TournamentFormat::Csv => print!("{}", format_tournament_csv(&stats)),
    }

    Ok(())
}
