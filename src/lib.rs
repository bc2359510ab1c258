// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Parchís: a deterministic two-player race game for the terminal.
//!
//! Two sides, `A` and `B`, enter pawns on a cross-shaped track, run once
//! around it and turn into their own home lane towards the center. A die
//! decides everything:
//! - A six brings a pawn out of the reserve (or moves one) and the side
//!   rolls again, at most three times per turn
//! - Landing on a lone opponent pawn sends it back to its reserve
//! - Two pawns of one side on a cell form a block the opponent cannot pass
//! - The first side to bring every pawn to the center wins
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI / TUI (presenters)          │
//! ├─────────────────────────────────────┤
//! │   Replay        │  Batch runner     │
//! ├─────────────────────────────────────┤
//! │   Match engine (turns, captures)    │
//! ├─────────────────────────────────────┤
//! │   Player state  │  Board geometry   │
//! └─────────────────────────────────────┘
//! ```
//!
//! A match is fully determined by its seed and [`MatchConfig`], so replays
//! and batch runs need nothing else.

pub mod config;
pub mod error;
pub mod game;
pub mod replay;
pub mod tournament;

pub use config::{FieldSize, MatchConfig, StepRule};
pub use error::{ConfigResult, FieldSizeError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Coord, Match, MatchEvent, MatchOutcome, MatchView, PlayerState, Presenter, Side,
};
