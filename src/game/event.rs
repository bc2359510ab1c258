//! Things that happen during a match, in the order they happen.

use std::fmt;

use serde::Serialize;

use crate::game::{Coord, Side};

/// One step of a match, as reported to a [`crate::game::Presenter`].
///
/// `Display` gives the short status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Both sides rolled to decide who starts.
    OpeningRoll {
        /// Roll of side A.
        a: u8,
        /// Roll of side B.
        b: u8,
    },
    /// The opening rolls differed; `side` rolled higher.
    FirstMove {
        /// Side that plays the first turn.
        side: Side,
    },
    /// A die was rolled during a turn.
    Rolled {
        /// Side holding the turn.
        side: Side,
        /// Face shown.
        value: u8,
    },
    /// A pawn left the reserve.
    Entered {
        /// Side that entered a pawn.
        side: Side,
        /// Entry cell.
        at: Coord,
    },
    /// A pawn moved along the track.
    Moved {
        /// Side that moved.
        side: Side,
        /// Index of the pawn in entry order.
        pawn: usize,
        /// Start cell.
        from: Coord,
        /// Landing cell.
        to: Coord,
    },
    /// A pawn reached the center and left play.
    Finished {
        /// Side that scored.
        side: Side,
        /// Index of the pawn in entry order.
        pawn: usize,
        /// Start cell of the final move.
        from: Coord,
    },
    /// No pawn could complete the move.
    NoMoves {
        /// Side that was stuck.
        side: Side,
    },
    /// A pawn was sent back to its reserve.
    Captured {
        /// Side that captured.
        by: Side,
        /// Side that lost the pawn.
        victim: Side,
        /// Cell where it happened.
        at: Coord,
    },
}

impl MatchEvent {
    /// The side the event is about, if any.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match *self {
            Self::OpeningRoll { .. } => None,
            Self::FirstMove { side }
            | Self::Rolled { side, .. }
            | Self::Entered { side, .. }
            | Self::Moved { side, .. }
            | Self::Finished { side, .. }
            | Self::NoMoves { side } => Some(side),
            Self::Captured { by, .. } => Some(by),
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpeningRoll { a, b } => write!(f, "A rolled {a}, B rolled {b}"),
            Self::FirstMove { side } => write!(f, "{side} moves first"),
            Self::Rolled { side, value } => write!(f, "{side} got {value} on the die"),
            Self::Entered { side, .. } => write!(f, "Player {side} adds new pawn"),
            Self::Moved { side, from, to, .. } => write!(f, "{side} moves {from} -> {to}"),
            Self::Finished { side, .. } => write!(f, "Player {side} brings a pawn home"),
            Self::NoMoves { side } => write!(f, "No possible moves for {side}"),
            Self::Captured { by, victim, .. } => write!(f, "Player {by} bit pawn of {victim}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(MatchEvent::FirstMove { side: Side::A }.to_string(), "A moves first");
        assert_eq!(
            MatchEvent::Rolled { side: Side::B, value: 4 }.to_string(),
            "B got 4 on the die"
        );
        assert_eq!(MatchEvent::NoMoves { side: Side::A }.to_string(), "No possible moves for A");
        assert_eq!(
            MatchEvent::Captured {
                by: Side::B,
                victim: Side::A,
                at: Coord::new(0, 6)
            }
            .to_string(),
            "Player B bit pawn of A"
        );
    }

    #[test]
    fn test_event_side() {
        assert_eq!(MatchEvent::OpeningRoll { a: 3, b: 5 }.side(), None);
        assert_eq!(MatchEvent::NoMoves { side: Side::B }.side(), Some(Side::B));
        let capture = MatchEvent::Captured {
            by: Side::A,
            victim: Side::B,
            at: Coord::new(1, 1),
        };
        assert_eq!(capture.side(), Some(Side::A));
    }

    #[test]
    fn test_json_shape() {
        let event = MatchEvent::Entered {
            side: Side::A,
            at: Coord::new(0, 6),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"entered","side":"A","at":{"row":0,"col":6}}"#);
    }
}
