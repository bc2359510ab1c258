//! Match invariants - sanity checks that detect bugs.
//!
//! These should never trigger in a correctly implemented match. They are
//! checked by the tests and the fuzz target after every turn.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::game::{Coord, Die, Match, PlayerState, Side};

/// A broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Pawns were created or lost.
    #[error(
        "side {side} has {reserve} in reserve, {active} on track and {finished} finished, expected {expected} in total"
    )]
    PawnCount {
        /// Side at fault.
        side: Side,
        /// Pawns in reserve.
        reserve: u8,
        /// Pawns on the track.
        active: usize,
        /// Pawns finished.
        finished: u8,
        /// Pawns per side for the board size.
        expected: u8,
    },
    /// The cached blocked cells disagree with the pawn positions.
    #[error("side {side} has stale blocked cells {cached:?}, pawns give {expected:?}")]
    StaleBlockedCells {
        /// Side at fault.
        side: Side,
        /// Cells currently cached.
        cached: Vec<Coord>,
        /// Cells recomputed from the pawns.
        expected: Vec<Coord>,
    },
    /// A pawn stands somewhere its side never walks.
    #[error("side {side} has a pawn off its track at {at}")]
    OffTrack {
        /// Side at fault.
        side: Side,
        /// Position of the pawn.
        at: Coord,
    },
    /// A pawn reached the center but is still on the track.
    #[error("side {side} has an unfinished pawn on the center")]
    OnCenter {
        /// Side at fault.
        side: Side,
    },
}

/// Check all match invariants.
///
/// Returns the violations found, or an empty list if all invariants hold.
#[must_use]
pub fn check_invariants<D: Die>(game: &Match<D>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let expected = game.board().size().pawns_per_side();
    let center = game.board().center();

    for side in Side::BOTH {
        let player = game.player(side);

        let active = player.pawns().len();
        let in_play = usize::from(player.reserve_count()) + active;
        if in_play + usize::from(player.finished_count()) != usize::from(expected) {
            violations.push(InvariantViolation::PawnCount {
                side,
                reserve: player.reserve_count(),
                active,
                finished: player.finished_count(),
                expected,
            });
        }

        let mut recomputed = player.clone();
        recomputed.refresh_blocked_cells();
        if recomputed.blocked_cells() != player.blocked_cells() {
            violations.push(InvariantViolation::StaleBlockedCells {
                side,
                cached: sorted(player),
                expected: sorted(&recomputed),
            });
        }

        let track: BTreeSet<Coord> = game.board().path(side).collect();
        for &at in player.pawns() {
            if at == center {
                violations.push(InvariantViolation::OnCenter { side });
            } else if !track.contains(&at) {
                violations.push(InvariantViolation::OffTrack { side, at });
            }
        }
    }

    violations
}

fn sorted(player: &PlayerState) -> Vec<Coord> {
    player.blocked_cells().iter().copied().collect()
}

/// Assert all match invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with every violation listed if any invariant is broken.
#[cfg(debug_assertions)]
pub fn assert_invariants<D: Die>(game: &Match<D>) {
    let violations = check_invariants(game);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
        panic!("Match invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants<D: Die>(_game: &Match<D>) {}
