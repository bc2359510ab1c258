//! Game layer for Parchís.
//!
//! Implements the rules of a two-sided race:
//! - Board geometry (track shape, per-side paths, home lanes)
//! - Player state (reserve, pawns on the track, blocked cells)
//! - Dice (seeded or scripted)
//! - Match engine (turns, captures, win detection)
//! - Events and the presenter contract

mod board;
mod dice;
mod event;
pub mod invariants;
mod player;
mod side;
mod state;
mod view;

pub use board::{Board, CellKind, Coord, Direction, Path};
pub use dice::{Die, MAX_ROLL, MIN_ROLL, ScriptedDice, SeededDice};
pub use event::MatchEvent;
pub use invariants::{InvariantViolation, check_invariants};
pub use player::{PawnMove, PlayerState};
pub use side::{Edge, Side, SideProfile};
pub use state::{Match, MatchOutcome, Opening, ROLLS_PER_TURN, SideStats};
pub use view::{MatchView, Presenter};
