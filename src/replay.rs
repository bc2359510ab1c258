//! Match replay and viewing system.
//!
//! Because matches are 100% deterministic, replay requires only:
//! - `seed: u64` - The seed for the dice
//! - `config: MatchConfig` - Board size, step rule and turn cap
//!
//! No state deltas needed. To view turn N, re-run the simulation from turn 0 to N.
//!
//! # Time Travel
//!
//! - **Forward**: Continue stepping the simulation
//! - **Backward**: Re-run from turn 0 to (`current_turn` - 1)
//! - **Jump to turn N**: Re-run from turn 0 to N

mod render;
mod text;

pub use render::{BoardFrame, cell_glyph, render_ascii};
pub use text::render_summary;

use serde::Serialize;
use thiserror::Error;

use crate::config::MatchConfig;
use crate::game::{Match, MatchEvent};

/// Minimal recording - just the seed and the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recording {
    /// Seed for the dice.
    pub seed: u64,
    /// Match configuration.
    pub config: MatchConfig,
}

impl Recording {
    /// Create a new recording.
    #[must_use]
    pub const fn new(seed: u64, config: MatchConfig) -> Self {
        Self { seed, config }
    }

    /// A fresh match at turn 0.
    #[must_use]
    pub fn start(&self) -> Match {
        Match::seeded(self.seed, self.config)
    }
}

/// Error type for replay operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Turn number out of bounds.
    #[error("Turn {requested} out of bounds (max: {max_turn})")]
    TurnOutOfBounds {
        /// Requested turn.
        requested: u32,
        /// Last reachable turn.
        max_turn: u32,
    },
    /// Match is already over.
    #[error("Match is already over")]
    GameOver,
}

/// Replay engine - steps through a match deterministically.
///
/// Since matches are deterministic, this engine can:
/// - Step forward by playing one turn
/// - Step backward by replaying from turn 0
/// - Jump to any turn by replaying from turn 0
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    /// The recording being replayed.
    recording: Recording,
    /// Current match state.
    game: Match,
    /// Events of the most recent turn (the opening at turn 0).
    last_events: Vec<MatchEvent>,
}

impl ReplayEngine {
    /// Create a new replay engine from a recording, starting at turn 0.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self::new_at_turn(recording, 0)
    }

    /// Create a new replay engine at a specific turn.
    ///
    /// This replays from turn 0 to the target turn, stopping early if the
    /// match ends first.
    #[must_use]
    pub fn new_at_turn(recording: Recording, target_turn: u32) -> Self {
        let game = recording.start();
        let mut last_events = Vec::new();
        game.announce_opening(&mut last_events);

        let mut engine = Self {
            recording,
            game,
            last_events,
        };
        for _ in 0..target_turn {
            if engine.game.is_over() {
                break;
            }
            engine.execute_turn_internal();
        }
        engine
    }

    /// Get the recording.
    #[must_use]
    pub const fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Get current turn number.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.game.turn()
    }

    /// Get current match state.
    #[must_use]
    pub const fn state(&self) -> &Match {
        &self.game
    }

    /// Events of the most recent turn.
    #[must_use]
    pub fn last_events(&self) -> &[MatchEvent] {
        &self.last_events
    }

    /// Check if the match is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Step forward one turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is already over.
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.game.is_over() {
            return Err(ReplayError::GameOver);
        }

        self.execute_turn_internal();
        Ok(())
    }

    /// Step backward one turn.
    ///
    /// This replays from turn 0 to (`current_turn` - 1).
    ///
    /// # Errors
    ///
    /// Returns an error if already at turn 0.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.turn() == 0 {
            return Err(ReplayError::TurnOutOfBounds {
                requested: 0,
                max_turn: 0,
            });
        }

        let target = self.turn() - 1;
        self.goto_turn(target)
    }

    /// Jump to a specific turn.
    ///
    /// This replays from turn 0 to the target turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn lies beyond the turn cap.
    pub fn goto_turn(&mut self, target_turn: u32) -> Result<(), ReplayError> {
        let max_turn = self.recording.config.max_turns;
        if max_turn != 0 && target_turn > max_turn {
            return Err(ReplayError::TurnOutOfBounds {
                requested: target_turn,
                max_turn,
            });
        }

        *self = Self::new_at_turn(self.recording, target_turn);
        Ok(())
    }

    /// Render current state to ASCII for terminal viewing.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        render_ascii(&self.game)
    }

    /// Render current state to structured plain text.
    #[must_use]
    pub fn render_summary(&self) -> String {
        render_summary(&self.game)
    }

    fn execute_turn_internal(&mut self) {
        self.last_events.clear();
        self.game.make_move(&mut self.last_events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldSize, StepRule};

    fn recording(seed: u64) -> Recording {
        Recording::new(
            seed,
            MatchConfig {
                field_size: FieldSize::new(7).unwrap(),
                step_rule: StepRule::Rolled,
                max_turns: 200,
            },
        )
    }

    #[test]
    fn test_starts_at_opening() {
        let engine = ReplayEngine::new(recording(1));
        assert_eq!(engine.turn(), 0);
        assert!(matches!(
            engine.last_events().last(),
            Some(MatchEvent::FirstMove { .. })
        ));
    }

    #[test]
    fn test_step_forward_and_back() {
        let mut engine = ReplayEngine::new(recording(5));
        engine.step_forward().unwrap();
        engine.step_forward().unwrap();
        let players_at_2 = engine.state().players().clone();
        let events_at_2 = engine.last_events().to_vec();
        engine.step_forward().unwrap();
        assert_eq!(engine.turn(), 3);

        engine.step_backward().unwrap();
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.state().players(), &players_at_2);
        assert_eq!(engine.last_events(), events_at_2.as_slice());
    }

    #[test]
    fn test_goto_turn_matches_stepping() {
        let mut stepped = ReplayEngine::new(recording(9));
        for _ in 0..10 {
            if stepped.step_forward().is_err() {
                break;
            }
        }
        let jumped = ReplayEngine::new_at_turn(recording(9), stepped.turn());
        assert_eq!(jumped.state().players(), stepped.state().players());
        assert_eq!(jumped.state().turn_holder(), stepped.state().turn_holder());
    }

    #[test]
    fn test_step_backward_at_start() {
        let mut engine = ReplayEngine::new(recording(2));
        assert_eq!(
            engine.step_backward(),
            Err(ReplayError::TurnOutOfBounds {
                requested: 0,
                max_turn: 0
            })
        );
    }

    #[test]
    fn test_goto_beyond_cap() {
        let mut engine = ReplayEngine::new(recording(2));
        let err = engine.goto_turn(201).unwrap_err();
        assert!(err.to_string().contains("201"));
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_step_forward_after_end() {
        let mut engine = ReplayEngine::new_at_turn(recording(4), 200);
        assert!(engine.is_game_over());
        assert_eq!(engine.step_forward(), Err(ReplayError::GameOver));
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::TurnOutOfBounds {
            requested: 1500,
            max_turn: 1000,
        };
        assert!(format!("{err}").contains("1500"));
        assert!(format!("{err}").contains("1000"));

        let err = ReplayError::GameOver;
        assert!(format!("{err}").contains("over"));
    }
}
