//! Output formatting utilities for CLI.

#![allow(clippy::cast_precision_loss, clippy::format_push_string)]

use parchis::game::{Die, Opening, SideStats};
use parchis::tournament::GameResult;
use parchis::{Match, MatchConfig, MatchEvent, MatchOutcome, Side};
use serde::Serialize;

/// JSON-serializable match result with its full event log.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchResult<'a> {
    /// Seed for the dice.
    seed: u64,
    /// Configuration the match was played with.
    config: MatchConfig,
    /// Rolls that decided the first turn.
    opening: &'a Opening,
    /// How the match ended.
    outcome: MatchOutcome,
    /// Total turns played.
    turns_played: u32,
    /// Per-side results.
    sides: Vec<JsonSideResult>,
    /// Every event, in order.
    events: &'a [MatchEvent],
}

/// JSON-serializable side result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSideResult {
    /// Side name.
    side: Side,
    /// Pawns still in the reserve.
    reserve: u8,
    /// Pawns on the track.
    on_track: usize,
    /// Pawns brought home.
    finished: u8,
    /// Running totals.
    stats: SideStats,
}

impl<'a> JsonMatchResult<'a> {
    /// Create from a finished match and its events.
    pub(super) fn new<D: Die>(seed: u64, game: &'a Match<D>, events: &'a [MatchEvent]) -> Self {
        Self {
            seed,
            config: *game.config(),
            opening: game.opening(),
            outcome: game.outcome(),
            turns_played: game.turn(),
            sides: Side::BOTH
                .into_iter()
                .map(|side| {
                    let player = game.player(side);
                    JsonSideResult {
                        side,
                        reserve: player.reserve_count(),
                        on_track: player.pawns().len(),
                        finished: player.finished_count(),
                        stats: *game.stats(side),
                    }
                })
                .collect(),
            events,
        }
    }
}

/// Closing line for a match, matching the in-game status messages.
pub(super) fn format_outcome(outcome: MatchOutcome, turns: u32) -> String {
    match outcome {
        MatchOutcome::Won(side) => format!("{side} player won after {turns} turns"),
        MatchOutcome::Draw => format!("Draw: nobody finished within {turns} turns"),
        MatchOutcome::Ongoing => format!("Still playing after {turns} turns"),
    }
}

/// Tournament statistics for aggregated results.
#[derive(Debug, Default, Clone)]
pub(super) struct TournamentStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Win count per side.
    pub(super) wins: [u64; 2],
    /// Draw count.
    pub(super) draws: u64,
    /// Games won by the side that moved first.
    first_mover_wins: u64,
    /// Total turns across all games.
    total_turns: u64,
    /// Captures made per side.
    total_captures: [u64; 2],
    /// Pawns brought home per side.
    total_finished: [u64; 2],
}

impl TournamentStats {
    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &GameResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);

        match result.winner() {
            Some(winner) => {
                self.wins[winner.index()] += 1;
                if winner == result.first {
                    self.first_mover_wins += 1;
                }
            }
            None => self.draws += 1,
        }

        for side in Side::BOTH {
            let i = side.index();
            self.total_captures[i] += u64::from(result.stats(side).captures);
            self.total_finished[i] += u64::from(result.finished[i]);
        }
    }

    /// Merge another partial aggregate into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.draws += other.draws;
        self.first_mover_wins += other.first_mover_wins;
        self.total_turns += other.total_turns;
        for i in 0..2 {
            self.wins[i] += other.wins[i];
            self.total_captures[i] += other.total_captures[i];
            self.total_finished[i] += other.total_finished[i];
        }
    }

    fn per_game(&self, total: u64) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        total as f64 / self.games_played as f64
    }

    /// Win rate for a side (0.0-1.0).
    pub(super) fn win_rate(&self, side: Side) -> f64 {
        self.per_game(self.wins[side.index()])
    }

    /// Draw rate (0.0-1.0).
    pub(super) fn draw_rate(&self) -> f64 {
        self.per_game(self.draws)
    }

    /// Share of games won by whoever moved first (0.0-1.0).
    pub(super) fn first_mover_win_rate(&self) -> f64 {
        self.per_game(self.first_mover_wins)
    }

    /// Average captures per game for a side.
    pub(super) fn avg_captures(&self, side: Side) -> f64 {
        self.per_game(self.total_captures[side.index()])
    }

    /// Average pawns brought home per game for a side.
    pub(super) fn avg_finished(&self, side: Side) -> f64 {
        self.per_game(self.total_finished[side.index()])
    }

    /// Average game length.
    pub(super) fn avg_turns(&self) -> f64 {
        self.per_game(self.total_turns)
    }
}

/// JSON-serializable tournament result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentResult {
    /// Total games played.
    games_played: u64,
    /// Per-side statistics.
    sides: Vec<JsonTournamentSide>,
    /// Number of draws.
    draws: u64,
    /// Share of games won by the side that moved first.
    first_mover_win_rate: f64,
    /// Average game length in turns.
    avg_turns: f64,
}

/// JSON-serializable per-side tournament stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentSide {
    /// Side name.
    side: Side,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
    /// Average captures per game.
    avg_captures: f64,
    /// Average pawns brought home per game.
    avg_finished: f64,
}

impl JsonTournamentResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &TournamentStats) -> Self {
        let sides = Side::BOTH
            .into_iter()
            .map(|side| JsonTournamentSide {
                side,
                wins: stats.wins[side.index()],
                win_rate: stats.win_rate(side),
                avg_captures: stats.avg_captures(side),
                avg_finished: stats.avg_finished(side),
            })
            .collect();

        Self {
            games_played: stats.games_played,
            sides,
            draws: stats.draws,
            first_mover_win_rate: stats.first_mover_win_rate(),
            avg_turns: stats.avg_turns(),
        }
    }
}

/// Format tournament stats as human-readable text.
pub(super) fn format_tournament_text(stats: &TournamentStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tournament Results ({} games)\n", stats.games_played));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    for side in Side::BOTH {
        output.push_str(&format!(
            "  Side {side}: {:.1}% ({} wins)\n",
            stats.win_rate(side) * 100.0,
            stats.wins[side.index()]
        ));
    }
    output.push_str(&format!(
        "  Draws: {} ({:.1}%)\n",
        stats.draws,
        stats.draw_rate() * 100.0
    ));
    output.push_str(&format!(
        "  First mover won: {:.1}%\n\n",
        stats.first_mover_win_rate() * 100.0
    ));

    output.push_str("Per Game:\n");
    for side in Side::BOTH {
        output.push_str(&format!(
            "  Side {side}: {:.2} captures, {:.2} pawns home\n",
            stats.avg_captures(side),
            stats.avg_finished(side)
        ));
    }

    output.push_str(&format!("\nAverage Game Length: {:.0} turns\n", stats.avg_turns()));

    output
}

/// Format tournament stats as CSV.
pub(super) fn format_tournament_csv(stats: &TournamentStats) -> String {
    let mut output = String::new();

    output.push_str("side,wins,win_rate,draws,avg_captures,avg_finished,avg_turns\n");

    for side in Side::BOTH {
        output.push_str(&format!(
            "{side},{},{:.4},{},{:.2},{:.2},{:.1}\n",
            stats.wins[side.index()],
            stats.win_rate(side),
            stats.draws,
            stats.avg_captures(side),
            stats.avg_finished(side),
            stats.avg_turns()
        ));
    }

    output
}
