//! Batch runner for Parchís matches.
//!
//! Provides a pure function interface: `(seed, config) -> GameResult`.
//! Callers fan out over seeds however they like; the CLI uses rayon.

use serde::Serialize;

use crate::config::MatchConfig;
use crate::game::invariants::assert_invariants;
use crate::game::{Match, MatchOutcome, Side, SideStats};

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// The seed used for this match.
    pub seed: u64,
    /// How the match ended.
    pub outcome: MatchOutcome,
    /// Side that played the first turn.
    pub first: Side,
    /// Total turns played.
    pub turns_played: u32,
    /// Per-side statistics, indexed by [`Side::index`].
    pub side_stats: [SideStats; 2],
    /// Pawns each side brought home.
    pub finished: [u8; 2],
}

impl GameResult {
    /// The winning side (None on a draw).
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    /// Statistics for one side.
    #[must_use]
    pub const fn stats(&self, side: Side) -> &SideStats {
        &self.side_stats[side.index()]
    }
}

/// Play a complete match with the given seed and configuration.
///
/// # Determinism
///
/// Given the same seed and config, this function always produces the same
/// `GameResult`.
#[must_use]
pub fn run_game(seed: u64, config: &MatchConfig) -> GameResult {
    let mut game = Match::seeded(seed, *config);
    let outcome = game.play_out(&mut ());
    assert_invariants(&game);
    GameResult {
        seed,
        outcome,
        first: game.opening().first,
        turns_played: game.turn(),
        side_stats: Side::BOTH.map(|side| *game.stats(side)),
        finished: Side::BOTH.map(|side| game.player(side).finished_count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldSize, StepRule};

    fn rolled(size: u32) -> MatchConfig {
        MatchConfig {
            field_size: FieldSize::new(size).unwrap(),
            step_rule: StepRule::Rolled,
            max_turns: 5000,
        }
    }

    #[test]
    fn test_run_game_deterministic() {
        let config = rolled(9);
        assert_eq!(run_game(17, &config), run_game(17, &config));
    }

    #[test]
    fn test_result_is_copy() {
        let result = run_game(2, &MatchConfig { max_turns: 5, ..MatchConfig::default() });
        let copied = result;
        assert_eq!(copied, result);
        assert_eq!(result.turns_played, 5);
    }

    #[test]
    fn test_run_game_winner_finished_everything() {
        let config = rolled(7);
        let result = run_game(3, &config);
        let winner = result.winner().unwrap();
        assert_eq!(result.finished[winner.index()], 2);
        assert_eq!(u32::from(result.finished[winner.index()]), result.stats(winner).finished);
    }

    #[test]
    fn test_fixed_rule_hits_turn_cap() {
        let config = MatchConfig {
            max_turns: 50,
            ..MatchConfig::default()
        };
        let result = run_game(1, &config);
        assert_eq!(result.outcome, MatchOutcome::Draw);
        assert_eq!(result.turns_played, 50);
        assert_eq!(result.finished, [0, 0]);
    }
}
